//! URL construction helpers for the Pixabay API.
//!
//! Pure functions, so every request is built the same way and the API key
//! never leaks into logs or error messages.

use crate::models::{
    IMAGE_TYPE, ORIENTATION, PER_PAGE_RANGE, PixabayConfig, PixabaySearchQuery, SAFE_SEARCH,
};
use url::Url;

/// Placeholder that replaces the API key in logged URLs.
const REDACTED: &str = "REDACTED";

/// Build a search URL with all required parameters.
pub fn build_search_url(config: &PixabayConfig, query: &PixabaySearchQuery) -> Url {
    let (min_per_page, max_per_page) = PER_PAGE_RANGE;
    let mut url = config.base_url.clone();

    let query_string = format!(
        "key={}&q={}&image_type={IMAGE_TYPE}&orientation={ORIENTATION}&safesearch={SAFE_SEARCH}&per_page={}&page={}",
        urlencoding::encode(&config.api_key),
        urlencoding::encode(query.query.trim()),
        query.per_page.clamp(min_per_page, max_per_page),
        query.page.max(1),
    );

    url.set_query(Some(&query_string));
    url
}

/// Render a URL for logs and errors with the `key` parameter masked.
pub fn redact_key(url: &Url) -> String {
    if !url.query_pairs().any(|(name, _)| name == "key") {
        return url.to_string();
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(name, value)| {
            let value = if name == "key" {
                REDACTED.to_string()
            } else {
                value.into_owned()
            };
            (name.into_owned(), value)
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
