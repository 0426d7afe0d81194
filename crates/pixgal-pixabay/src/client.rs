//! Pixabay client for searching images.

use crate::config::PixabayClientConfig;
use crate::error::{PixabayError, PixabayResult};
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::{PixabayConfig, PixabayResponse, PixabaySearchQuery};
use crate::url::build_search_url;
use url::Url;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default Pixabay client using the reqwest HTTP backend.
pub type DefaultPixabayClient = PixabayClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the Pixabay image search API.
///
/// This client is generic over an HTTP backend, allowing for easy testing.
/// Use `DefaultPixabayClient` for production code.
pub struct PixabayClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: PixabayConfig,
}

impl DefaultPixabayClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails when the API key is missing or blank, or the base URL does not parse.
    pub fn new(config: &PixabayClientConfig) -> PixabayResult<Self> {
        let internal_config = Self::to_internal_config(config)?;
        let backend = ReqwestBackend::new(config)?;
        Ok(Self {
            backend,
            config: internal_config,
        })
    }

    fn to_internal_config(config: &PixabayClientConfig) -> PixabayResult<PixabayConfig> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(PixabayError::MissingApiKey)?;

        Ok(PixabayConfig {
            base_url: Url::parse(&config.base_url)?,
            api_key: api_key.to_string(),
        })
    }
}

impl<B: HttpBackend> PixabayClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: PixabayConfig, backend: B) -> Self {
        Self { backend, config }
    }

    /// Fetch one page of search results.
    pub(crate) async fn search_page(
        &self,
        query: &PixabaySearchQuery,
    ) -> PixabayResult<PixabayResponse> {
        let url = build_search_url(&self.config, query);
        let response: PixabayResponse = self.backend.get_json(&url).await?;

        if response.hits.len() > query.per_page as usize {
            return Err(PixabayError::InvalidResponse {
                message: format!(
                    "asked for {} hits per page, got {}",
                    query.per_page,
                    response.hits.len()
                ),
            });
        }

        Ok(response)
    }
}
