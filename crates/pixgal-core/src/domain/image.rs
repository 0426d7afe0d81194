//! Image search results.

use serde::{Deserialize, Serialize};

/// One image returned by the search API.
///
/// All fields are sourced verbatim from the API response and passed through
/// to rendering unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageHit {
    /// URL of the medium-sized image shown in the card
    pub preview_url: String,
    /// URL of the large image opened by the lightbox
    pub fullsize_url: String,
    /// Comma separated descriptive tags, used as alt text
    pub tags: String,
    /// Like count
    pub likes: u64,
    /// View count
    pub views: u64,
    /// Comment count
    pub comments: u64,
    /// Download count
    pub downloads: u64,
}

/// A single page of search results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultPage {
    /// Hits on this page, in API order
    pub hits: Vec<ImageHit>,
    /// Total number of hits reachable through pagination for the query
    pub total_hits: u64,
}

impl ResultPage {
    /// Create a result page.
    pub const fn new(hits: Vec<ImageHit>, total_hits: u64) -> Self {
        Self { hits, total_hits }
    }

    /// Check whether this page has no hits.
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Number of hits on this page.
    pub fn len(&self) -> usize {
        self.hits.len()
    }
}
