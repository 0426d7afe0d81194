//! Internal API types for the Pixabay image search endpoint.
//!
//! These types are internal to `pixgal-pixabay` and are not exposed to
//! consumers. External consumers see the core `ResultPage` / `ImageHit`.

use serde::{Deserialize, Serialize};
use url::Url;

// ============================================================================
// Configuration (used internally, see config.rs for public config)
// ============================================================================

/// Internal configuration for the Pixabay client.
#[derive(Debug, Clone)]
pub struct PixabayConfig {
    /// Base URL for the API (default: <https://pixabay.com/api/>)
    pub base_url: Url,
    /// API key sent with every request
    pub api_key: String,
}

// ============================================================================
// Search Types
// ============================================================================

/// Fixed image type filter.
pub const IMAGE_TYPE: &str = "photo";
/// Fixed orientation filter.
pub const ORIENTATION: &str = "horizontal";
/// Safe search is always on.
pub const SAFE_SEARCH: bool = true;

/// Smallest and largest `per_page` values the API accepts.
pub const PER_PAGE_RANGE: (u32, u32) = (3, 200);

/// Query parameters for one search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixabaySearchQuery {
    /// Free text query
    pub query: String,
    /// 1-based page number
    pub page: u32,
    /// Results per page
    pub per_page: u32,
}

impl PixabaySearchQuery {
    /// Create a query for the first page with the default page size.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page: 1,
            per_page: pixgal_core::PAGE_SIZE,
        }
    }

    /// Set the page number.
    pub const fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Set the page size.
    pub const fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }
}

// ============================================================================
// API Response
// ============================================================================

/// One hit in the search response.
///
/// Only the fields the gallery renders are kept; the API sends many more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixabayHit {
    /// Medium sized image, max 640px on the long side
    #[serde(rename = "webformatURL")]
    pub webformat_url: String,
    /// Scaled image, max 1280px on the long side
    #[serde(rename = "largeImageURL")]
    pub large_image_url: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub comments: u64,
    #[serde(default)]
    pub downloads: u64,
}

/// Search response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PixabayResponse {
    /// Matches reachable through the API (capped by Pixabay)
    pub total_hits: u64,
    #[serde(default)]
    pub hits: Vec<PixabayHit>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_query_builder() {
        let query = PixabaySearchQuery::new("cats").with_page(3).with_per_page(20);
        assert_eq!(query.query, "cats");
        assert_eq!(query.page, 3);
        assert_eq!(query.per_page, 20);
    }

    #[test]
    fn test_search_query_defaults() {
        let query = PixabaySearchQuery::new("cats");
        assert_eq!(query.page, 1);
        assert_eq!(query.per_page, 40);
    }

    #[test]
    fn test_response_deserializes_api_payload() {
        let response: PixabayResponse = serde_json::from_value(json!({
            "total": 4692,
            "totalHits": 500,
            "hits": [{
                "id": 195893,
                "pageURL": "https://pixabay.com/en/blossom-bloom-flower-195893/",
                "type": "photo",
                "tags": "blossom, bloom, flower",
                "previewURL": "https://cdn.pixabay.com/photo/2013/10/15/09/12/flower-195893_150.jpg",
                "webformatURL": "https://pixabay.com/get/35bbf209e13e39d2_640.jpg",
                "largeImageURL": "https://pixabay.com/get/ed6a99fd0a76647_1280.jpg",
                "views": 7671,
                "downloads": 6439,
                "likes": 5,
                "comments": 2,
                "user_id": 48777,
                "user": "Josch13"
            }]
        }))
        .unwrap();

        assert_eq!(response.total_hits, 500);
        assert_eq!(response.hits.len(), 1);
        let hit = &response.hits[0];
        assert_eq!(hit.webformat_url, "https://pixabay.com/get/35bbf209e13e39d2_640.jpg");
        assert_eq!(hit.large_image_url, "https://pixabay.com/get/ed6a99fd0a76647_1280.jpg");
        assert_eq!(hit.tags, "blossom, bloom, flower");
        assert_eq!((hit.likes, hit.views, hit.comments, hit.downloads), (5, 7671, 2, 6439));
    }

    #[test]
    fn test_response_missing_counters_default_to_zero() {
        let response: PixabayResponse = serde_json::from_value(json!({
            "totalHits": 1,
            "hits": [{
                "webformatURL": "https://example.com/a.jpg",
                "largeImageURL": "https://example.com/b.jpg"
            }]
        }))
        .unwrap();

        let hit = &response.hits[0];
        assert_eq!(hit.tags, "");
        assert_eq!(hit.likes, 0);
        assert_eq!(hit.downloads, 0);
    }

    #[test]
    fn test_response_requires_total_hits() {
        let result: Result<PixabayResponse, _> = serde_json::from_value(json!({"hits": []}));
        assert!(result.is_err());
    }
}
