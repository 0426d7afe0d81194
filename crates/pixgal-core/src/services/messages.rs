//! User-facing notification texts.

/// Shown when a search fails, is empty, or matches nothing.
pub const NO_MATCHES: &str =
    "Sorry, there are no images matching your search query. Please try again.";

/// Shown once per search when the last page has been rendered.
pub const END_OF_RESULTS: &str = "We're sorry, but you've reached the end of search results.";

/// Label of the retry affordance shown after a failed load-more.
pub const LOAD_MORE_FAILED: &str = "Couldn't load more images. Retry?";

/// Shown after the first page of a search is rendered.
pub fn found(total_hits: u64) -> String {
    format!("Hooray! We found {total_hits} images.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_message() {
        assert_eq!(found(80), "Hooray! We found 80 images.");
    }
}
