//! HTTP backend abstraction for the Pixabay API.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest and sends exactly one request per call.

use crate::config::PixabayClientConfig;
use crate::error::{PixabayError, PixabayResult};
use crate::url::redact_key;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

/// Longest error body kept in `ApiRequestFailed::detail`.
const MAX_DETAIL_LEN: usize = 200;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can fetch JSON from URLs.
///
/// This abstraction allows for dependency injection of HTTP clients,
/// making it easy to test code that depends on HTTP requests.
///
/// This is an implementation detail - external code should use the
/// `ImageSearchPort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch JSON from a URL and deserialize it.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> PixabayResult<T>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// No retry: a failed request is reported to the caller as-is.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &PixabayClientConfig) -> PixabayResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client })
    }
}

/// Trim and truncate an error body for display.
fn error_detail(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    if body.chars().count() > MAX_DETAIL_LEN {
        let truncated: String = body.chars().take(MAX_DETAIL_LEN - 3).collect();
        return Some(format!("{truncated}..."));
    }
    Some(body.to_string())
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> PixabayResult<T> {
        debug!(url = %redact_key(url), "GET");
        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PixabayError::ApiRequestFailed {
                status: status.as_u16(),
                url: redact_key(url),
                detail: error_detail(&body),
            });
        }

        let data: T = response.json().await.map_err(reqwest::Error::without_url)?;
        Ok(data)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
