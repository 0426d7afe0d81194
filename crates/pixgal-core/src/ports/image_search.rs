//! Image search port.

use crate::domain::{ResultPage, SearchRequest};
use async_trait::async_trait;
use thiserror::Error;

/// Errors from image search port operations.
///
/// These are domain-level errors. Implementation-specific errors (HTTP,
/// JSON) are mapped to these by the adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The API answered with a non-success status.
    #[error("Search API request failed with status {status}")]
    Status {
        /// HTTP status code
        status: u16,
    },

    /// API rate limit exceeded.
    #[error("Rate limit exceeded, try again later")]
    RateLimited,

    /// Network or connectivity error.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// Invalid response from the API.
    #[error("Invalid API response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// Configuration error (bad base URL, missing key).
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

/// Result type alias for image search port operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Port trait for the remote image search API.
///
/// One call performs exactly one request. Implementations must not retry
/// and must not cache previous responses.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageSearchPort: Send + Sync {
    /// Fetch one page of results.
    async fn fetch(&self, request: &SearchRequest) -> FetchResult<ResultPage>;
}
