//! In-memory gallery page rendered to a standalone HTML document.

use super::lock;
use crate::error::CliError;
use pixgal_core::messages;
use pixgal_core::ports::{CaptionPosition, CardHandle, GalleryViewPort, LightboxOptions};
use pixgal_core::render::escape_attr;
use std::fmt::Write as _;
use std::path::Path;
use std::sync::Mutex;
use tracing::debug;

/// Height of one rendered card, used to turn card scrolls into offsets.
pub const CARD_HEIGHT_PX: f64 = 280.0;

const LIGHTBOX_CSS: &str =
    "https://cdn.jsdelivr.net/npm/simplelightbox@2.14.2/dist/simple-lightbox.min.css";
const LIGHTBOX_JS: &str =
    "https://cdn.jsdelivr.net/npm/simplelightbox@2.14.2/dist/simple-lightbox.min.js";

#[derive(Debug, Default)]
struct Page {
    fragments: Vec<String>,
    cards: Vec<CardHandle>,
    next_handle: u64,
    scroll_offset: f64,
    scroll_top_visible: bool,
    retry_visible: bool,
}

/// Gallery container backed by an HTML document.
///
/// Card handles are allocated in insertion order and never reused, so a
/// handle from a cleared gallery can't alias a new card.
#[derive(Debug, Default)]
pub struct HtmlGallery {
    page: Mutex<Page>,
}

impl HtmlGallery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn card_count(&self) -> usize {
        lock(&self.page).cards.len()
    }

    pub fn last_card(&self) -> Option<CardHandle> {
        lock(&self.page).cards.last().copied()
    }

    /// Current vertical scroll offset in pixels.
    pub fn scroll_offset(&self) -> f64 {
        lock(&self.page).scroll_offset
    }

    pub fn scroll_top_visible(&self) -> bool {
        lock(&self.page).scroll_top_visible
    }

    pub fn retry_visible(&self) -> bool {
        lock(&self.page).retry_visible
    }

    /// Render the full page: search form, gallery, controls and lightbox wiring.
    pub fn render_document(&self, query: &str, lightbox: &LightboxOptions) -> String {
        let page = lock(&self.page);
        let query = escape_attr(query);
        let title = if query.is_empty() {
            "pixgal".to_string()
        } else {
            format!("{query} - pixgal")
        };

        let body_len: usize = page.fragments.iter().map(String::len).sum();
        let mut html = String::with_capacity(1024 + body_len);
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        let _ = writeln!(html, "<title>{title}</title>");
        let _ = writeln!(html, "<link rel=\"stylesheet\" href=\"{LIGHTBOX_CSS}\">");
        html.push_str("</head>\n<body>\n");
        let _ = writeln!(
            html,
            "<form class=\"search-form\"><input type=\"text\" name=\"searchQuery\" value=\"{query}\" autocomplete=\"off\" placeholder=\"Search images...\"><button type=\"submit\">Search</button></form>"
        );
        html.push_str("<div class=\"gallery\">");
        for fragment in &page.fragments {
            html.push_str(fragment);
        }
        html.push_str("</div>\n");
        let _ = writeln!(
            html,
            "<button type=\"button\" class=\"load-more\"{}>{}</button>",
            hidden_attr(page.retry_visible),
            escape_attr(messages::LOAD_MORE_FAILED)
        );
        let _ = writeln!(
            html,
            "<button type=\"button\" class=\"scroll-top\"{}>Top</button>",
            hidden_attr(page.scroll_top_visible)
        );
        let _ = writeln!(html, "<script src=\"{LIGHTBOX_JS}\"></script>");
        let _ = writeln!(
            html,
            "<script>new SimpleLightbox('.gallery a', {{ captionsData: '{}', captionPosition: '{}' }});</script>",
            escape_attr(&lightbox.captions_data),
            caption_position(lightbox.caption_position)
        );
        html.push_str("</body>\n</html>\n");
        html
    }

    /// Write the rendered page to `path`.
    pub fn write_document(
        &self,
        path: &Path,
        query: &str,
        lightbox: &LightboxOptions,
    ) -> Result<(), CliError> {
        let html = self.render_document(query, lightbox);
        std::fs::write(path, html)
            .map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?;
        debug!(path = %path.display(), cards = self.card_count(), "Wrote gallery page");
        Ok(())
    }
}

const fn hidden_attr(visible: bool) -> &'static str {
    if visible { "" } else { " hidden" }
}

const fn caption_position(position: CaptionPosition) -> &'static str {
    match position {
        CaptionPosition::Top => "top",
        CaptionPosition::Bottom => "bottom",
        CaptionPosition::Outside => "outside",
    }
}

impl GalleryViewPort for HtmlGallery {
    fn clear(&self) {
        let mut page = lock(&self.page);
        page.fragments.clear();
        page.cards.clear();
        page.scroll_offset = 0.0;
    }

    fn append(&self, markup: &str, cards: usize) -> Option<CardHandle> {
        let mut page = lock(&self.page);
        page.fragments.push(markup.to_string());
        for _ in 0..cards {
            let handle = CardHandle::new(page.next_handle);
            page.next_handle += 1;
            page.cards.push(handle);
        }
        if cards == 0 { None } else { page.cards.last().copied() }
    }

    fn scroll_by_cards(&self, cards: u32) {
        lock(&self.page).scroll_offset += f64::from(cards) * CARD_HEIGHT_PX;
    }

    fn scroll_to_top(&self) {
        lock(&self.page).scroll_offset = 0.0;
    }

    fn set_scroll_top_visible(&self, visible: bool) {
        lock(&self.page).scroll_top_visible = visible;
    }

    fn set_retry_visible(&self, visible: bool) {
        lock(&self.page).retry_visible = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixgal_core::render_cards;
    use pixgal_core::testing::hit;

    #[test]
    fn test_append_returns_last_card() {
        let gallery = HtmlGallery::new();
        assert_eq!(gallery.append("", 0), None);

        let first = gallery.append("<div></div>", 3).unwrap();
        let second = gallery.append("<div></div>", 2).unwrap();
        assert_eq!(gallery.card_count(), 5);
        assert_eq!(gallery.last_card(), Some(second));
        assert!(second > first);
    }

    #[test]
    fn test_clear_does_not_reuse_handles() {
        let gallery = HtmlGallery::new();
        let before = gallery.append("<div></div>", 1).unwrap();
        gallery.scroll_by_cards(2);
        gallery.clear();
        assert_eq!(gallery.card_count(), 0);
        assert!(gallery.scroll_offset().abs() < f64::EPSILON);

        let after = gallery.append("<div></div>", 1).unwrap();
        assert_ne!(before, after);
    }

    #[test]
    fn test_scrolling_moves_offset() {
        let gallery = HtmlGallery::new();
        gallery.scroll_by_cards(2);
        assert!((gallery.scroll_offset() - 2.0 * CARD_HEIGHT_PX).abs() < f64::EPSILON);
        gallery.scroll_to_top();
        assert!(gallery.scroll_offset().abs() < f64::EPSILON);
    }

    #[test]
    fn test_document_contains_cards_and_lightbox_options() {
        let gallery = HtmlGallery::new();
        let hits = vec![hit(1), hit(2)];
        gallery.append(&render_cards(&hits), hits.len());

        let html = gallery.render_document("cats", &LightboxOptions::default());
        assert!(html.contains("<title>cats - pixgal</title>"));
        assert!(html.contains("value=\"cats\""));
        assert_eq!(html.matches("class=\"photo-card\"").count(), 2);
        assert!(html.contains("captionsData: 'alt', captionPosition: 'bottom'"));
    }

    #[test]
    fn test_document_escapes_query() {
        let gallery = HtmlGallery::new();
        let html = gallery.render_document("\"><script>", &LightboxOptions::default());
        assert!(!html.contains("\"><script>"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
    }

    #[test]
    fn test_controls_hidden_until_shown() {
        let gallery = HtmlGallery::new();
        let html = gallery.render_document("", &LightboxOptions::default());
        assert!(html.contains("class=\"load-more\" hidden"));
        assert!(html.contains("class=\"scroll-top\" hidden"));

        gallery.set_retry_visible(true);
        gallery.set_scroll_top_visible(true);
        let html = gallery.render_document("", &LightboxOptions::default());
        assert!(html.contains("class=\"load-more\">"));
        assert!(html.contains("class=\"scroll-top\">"));
    }

    #[test]
    fn test_write_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gallery.html");
        let gallery = HtmlGallery::new();
        gallery.append(&render_cards(&[hit(7)]), 1);

        gallery
            .write_document(&path, "dogs", &LightboxOptions::default())
            .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("<!DOCTYPE html>"));
        assert!(written.contains("https://cdn.example/7_1280.jpg"));
    }

    #[test]
    fn test_write_document_reports_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("gallery.html");
        let gallery = HtmlGallery::new();

        let err = gallery
            .write_document(&path, "dogs", &LightboxOptions::default())
            .unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }
}
