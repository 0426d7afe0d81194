//! Internal error types for Pixabay operations.
//!
//! These errors are internal to `pixgal-pixabay` and are mapped to the core
//! `FetchError` at the port boundary.

use thiserror::Error;

/// Result type alias for Pixabay operations.
pub type PixabayResult<T> = Result<T, PixabayError>;

/// Errors related to Pixabay API operations.
#[derive(Debug, Error)]
pub enum PixabayError {
    /// API request failed with an HTTP error status.
    #[error("Pixabay API request failed with status {status}: {url}{}", format_detail(.detail))]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested, with the API key redacted
        url: String,
        /// Response body, if the API sent one (Pixabay explains 4xx errors in plain text)
        detail: Option<String>,
    },

    /// API returned an invalid or unexpected response.
    #[error("Invalid response from Pixabay API: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// No API key was configured.
    #[error("Pixabay API key is missing")]
    MissingApiKey,

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

fn format_detail(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|d| format!(" ({d})"))
        .unwrap_or_default()
}
