//! Lightbox adapter for the written gallery page.

use pixgal_core::ports::{LightboxOptions, LightboxPort};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

/// Lightbox bound to the gallery links of the written HTML page.
///
/// The page script picks up every link on load, so a refresh only has to
/// be counted; it is safe to call any number of times.
#[derive(Debug, Default)]
pub struct HtmlLightbox {
    options: LightboxOptions,
    refreshes: AtomicUsize,
}

impl HtmlLightbox {
    pub fn new(options: LightboxOptions) -> Self {
        Self {
            options,
            refreshes: AtomicUsize::new(0),
        }
    }

    pub const fn options(&self) -> &LightboxOptions {
        &self.options
    }

    /// Number of refreshes since creation.
    pub fn refreshes(&self) -> usize {
        self.refreshes.load(Ordering::Relaxed)
    }
}

impl LightboxPort for HtmlLightbox {
    fn refresh(&self) {
        let count = self.refreshes.fetch_add(1, Ordering::Relaxed) + 1;
        debug!(count, "Lightbox refreshed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::HtmlGallery;
    use pixgal_core::ports::{CaptionPosition, GalleryViewPort};
    use pixgal_core::render_cards;
    use pixgal_core::testing::hit;

    #[test]
    fn test_refresh_is_repeatable() {
        let lightbox = HtmlLightbox::default();
        lightbox.refresh();
        lightbox.refresh();
        assert_eq!(lightbox.refreshes(), 2);
    }

    #[test]
    fn test_refresh_leaves_rendered_page_untouched() {
        let gallery = HtmlGallery::new();
        let lightbox = HtmlLightbox::default();
        gallery.append(&render_cards(&[hit(1), hit(2), hit(3)]), 3);
        lightbox.refresh();
        let before = gallery.render_document("cats", lightbox.options());

        lightbox.refresh();
        lightbox.refresh();
        lightbox.refresh();

        let after = gallery.render_document("cats", lightbox.options());
        assert_eq!(after, before);
        assert_eq!(after.matches("new SimpleLightbox(").count(), 1);
        assert_eq!(gallery.card_count(), 3);
        assert_eq!(lightbox.refreshes(), 4);
    }

    #[test]
    fn test_keeps_options() {
        let options = LightboxOptions {
            captions_data: "title".to_string(),
            caption_position: CaptionPosition::Top,
        };
        let lightbox = HtmlLightbox::new(options.clone());
        assert_eq!(lightbox.options(), &options);
    }
}
