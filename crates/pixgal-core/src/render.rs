//! Card markup rendering.
//!
//! Pure functions: a slice of hits in, an HTML fragment out. The fragment is
//! appended to the gallery container by the view adapter.

use crate::domain::ImageHit;
use std::fmt::Write;

/// CSS class of a single card. View adapters count cards by this class.
pub const CARD_CLASS: &str = "photo-card";

/// Render hits into one markup fragment, one card per hit.
pub fn render_cards(hits: &[ImageHit]) -> String {
    let mut markup = String::with_capacity(hits.len() * 512);
    for hit in hits {
        render_card(&mut markup, hit);
    }
    markup
}

fn render_card(out: &mut String, hit: &ImageHit) {
    // Writing into a String cannot fail
    let _ = write!(
        out,
        r#"
<div class="{CARD_CLASS}">
  <a class="link" href="{href}">
    <img class="small-img" src="{src}" alt="{alt}" loading="lazy" />
    <div class="info">
      <p class="info-item"><b>Likes {likes}</b></p>
      <p class="info-item"><b>Views {views}</b></p>
      <p class="info-item"><b>Comments {comments}</b></p>
      <p class="info-item"><b>Downloads {downloads}</b></p>
    </div>
  </a>
</div>"#,
        href = escape_attr(&hit.fullsize_url),
        src = escape_attr(&hit.preview_url),
        alt = escape_attr(&hit.tags),
        likes = hit.likes,
        views = hit.views,
        comments = hit.comments,
        downloads = hit.downloads,
    );
}

/// Escape a value for use inside a double-quoted HTML attribute.
pub fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
