//! Port trait implementation for `PixabayClient`.
//!
//! This module implements the core-owned `ImageSearchPort` trait for
//! `PixabayClient`, handling the conversion between Pixabay API types and
//! core domain types.

use async_trait::async_trait;
use pixgal_core::{FetchError, ImageHit, ImageSearchPort, ResultPage, SearchRequest};
use pixgal_core::ports::FetchResult;
use tracing::debug;

use crate::client::PixabayClient;
use crate::error::PixabayError;
use crate::http::HttpBackend;
use crate::models::{PixabayHit, PixabayResponse, PixabaySearchQuery};

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `PixabayError` to core `FetchError`.
fn map_error(err: PixabayError) -> FetchError {
    match err {
        PixabayError::ApiRequestFailed { status: 429, .. } => FetchError::RateLimited,
        PixabayError::ApiRequestFailed { status, .. } => FetchError::Status { status },
        PixabayError::InvalidResponse { message } => FetchError::InvalidResponse { message },
        PixabayError::MissingApiKey => FetchError::Configuration {
            message: PixabayError::MissingApiKey.to_string(),
        },
        PixabayError::Network(e) => FetchError::Network {
            message: e.to_string(),
        },
        PixabayError::InvalidUrl(e) => FetchError::Configuration {
            message: e.to_string(),
        },
        PixabayError::JsonParse(e) => FetchError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Type Conversions
// ============================================================================

/// Convert a Pixabay hit to a core `ImageHit`.
fn to_image_hit(hit: PixabayHit) -> ImageHit {
    ImageHit {
        preview_url: hit.webformat_url,
        fullsize_url: hit.large_image_url,
        tags: hit.tags,
        likes: hit.likes,
        views: hit.views,
        comments: hit.comments,
        downloads: hit.downloads,
    }
}

/// Convert a Pixabay response to a core `ResultPage`.
fn to_result_page(response: PixabayResponse) -> ResultPage {
    ResultPage::new(
        response.hits.into_iter().map(to_image_hit).collect(),
        response.total_hits,
    )
}

/// Convert a core `SearchRequest` to a Pixabay query.
fn to_search_query(request: &SearchRequest) -> PixabaySearchQuery {
    PixabaySearchQuery::new(request.query.clone())
        .with_page(request.page)
        .with_per_page(request.per_page)
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend + Send + Sync> ImageSearchPort for PixabayClient<B> {
    async fn fetch(&self, request: &SearchRequest) -> FetchResult<ResultPage> {
        let query = to_search_query(request);
        let response = self.search_page(&query).await.map_err(map_error)?;
        debug!(
            page = request.page,
            hits = response.hits.len(),
            total_hits = response.total_hits,
            "Pixabay page received"
        );
        Ok(to_result_page(response))
    }
}
