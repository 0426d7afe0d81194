//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. All concrete implementations are instantiated here:
//! - Pixabay search client (via pixgal-pixabay)
//! - HTML gallery, lightbox and simulated viewport (via `adapters`)
//! - Terminal notifier
//! - Pagination controller (via pixgal-core)
//!
//! Command handlers receive the fully-composed context and drive the
//! controller through it.

use std::sync::Arc;
use std::time::Duration;

use pixgal_core::ports::{ImageSearchPort, LightboxOptions, NotificationPort};
use pixgal_core::{GalleryPorts, PaginationController};
use pixgal_pixabay::{DefaultPixabayClient, PixabayClientConfig};
use tracing::debug;

use crate::adapters::{HtmlGallery, HtmlLightbox, SimulatedViewport, TerminalNotifier};
use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Pixabay API key.
    pub api_key: Option<String>,
    /// Pixabay endpoint override.
    pub base_url: Option<String>,
    /// HTTP request timeout.
    pub timeout: Duration,
}

impl CliConfig {
    /// Build the config from parsed global options.
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        if cli.timeout_secs == 0 {
            return Err(CliError::Arguments(
                "--timeout-secs must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            api_key: cli.api_key.clone(),
            base_url: cli.base_url.clone(),
            timeout: Duration::from_secs(cli.timeout_secs),
        })
    }

    /// Pixabay client configuration for these options.
    pub fn client_config(&self) -> PixabayClientConfig {
        let config = PixabayClientConfig::new()
            .with_optional_api_key(self.api_key.clone())
            .with_timeout(self.timeout);
        match &self.base_url {
            Some(url) => config.with_base_url(url.clone()),
            None => config,
        }
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The infinite-scroll controller.
    pub controller: Arc<PaginationController>,
    /// Gallery page the controller renders into.
    pub gallery: Arc<HtmlGallery>,
    /// Lightbox bound to the gallery page.
    pub lightbox: Arc<HtmlLightbox>,
    /// Viewport watcher for the load-more sentinel.
    pub viewport: Arc<SimulatedViewport>,
}

impl CliContext {
    /// Access the pagination controller.
    pub fn controller(&self) -> &PaginationController {
        &self.controller
    }

    /// Access the HTML gallery.
    pub fn gallery(&self) -> &HtmlGallery {
        &self.gallery
    }

    /// Access the lightbox.
    pub fn lightbox(&self) -> &HtmlLightbox {
        &self.lightbox
    }

    /// Access the simulated viewport.
    pub fn viewport(&self) -> &SimulatedViewport {
        &self.viewport
    }
}

/// Bootstrap the CLI application.
///
/// This is the composition root. It:
/// 1. Creates the Pixabay client from the config
/// 2. Creates the terminal notifier
/// 3. Wires both into the gallery adapters and the controller
pub fn bootstrap(config: &CliConfig) -> Result<CliContext, CliError> {
    // 1. Pixabay client (fails fast on a missing key or a bad base URL)
    let search: Arc<dyn ImageSearchPort> =
        Arc::new(DefaultPixabayClient::new(&config.client_config())?);
    debug!(timeout = ?config.timeout, "Pixabay client ready");

    // 2. Terminal notifier
    let notifier: Arc<dyn NotificationPort> = Arc::new(TerminalNotifier::stdout());

    Ok(bootstrap_with(search, notifier))
}

/// Bootstrap with a custom search port and notifier (for testing).
pub fn bootstrap_with(
    search: Arc<dyn ImageSearchPort>,
    notifier: Arc<dyn NotificationPort>,
) -> CliContext {
    let gallery = Arc::new(HtmlGallery::new());
    let lightbox = Arc::new(HtmlLightbox::new(LightboxOptions::default()));
    let viewport = Arc::new(SimulatedViewport::new());

    let controller = Arc::new(PaginationController::new(GalleryPorts {
        search,
        view: gallery.clone(),
        notifier,
        lightbox: lightbox.clone(),
        intersections: viewport.clone(),
    }));

    CliContext {
        controller,
        gallery,
        lightbox,
        viewport,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pixgal_core::SearchPhase;
    use pixgal_core::testing::ScriptedSearch;

    fn config(api_key: Option<&str>, base_url: Option<&str>) -> CliConfig {
        CliConfig {
            api_key: api_key.map(str::to_string),
            base_url: base_url.map(str::to_string),
            timeout: Duration::from_secs(30),
        }
    }

    #[test]
    fn test_config_from_cli() {
        let cli = Cli::parse_from(["pixgal", "--api-key", "k", "--timeout-secs", "7", "browse"]);
        let config = CliConfig::from_cli(&cli).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("k"));
        assert_eq!(config.timeout, Duration::from_secs(7));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let cli = Cli::parse_from(["pixgal", "--timeout-secs", "0", "browse"]);
        let err = CliConfig::from_cli(&cli).unwrap_err();
        assert!(matches!(err, CliError::Arguments(_)));
    }

    #[test]
    fn test_client_config_applies_overrides() {
        let client = config(Some("k"), Some("http://localhost:8080/api/")).client_config();
        assert_eq!(client.base_url(), "http://localhost:8080/api/");
        assert_eq!(client.api_key(), Some("k"));
        assert_eq!(client.timeout(), Duration::from_secs(30));

        let client = config(None, None).client_config();
        assert_eq!(client.base_url(), pixgal_pixabay::DEFAULT_BASE_URL);
    }

    #[test]
    fn test_bootstrap_requires_api_key() {
        let err = bootstrap(&config(None, None)).err().unwrap();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_bootstrap_rejects_bad_base_url() {
        let err = bootstrap(&config(Some("k"), Some("not a url"))).err().unwrap();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_bootstrap_with_starts_idle() {
        let ctx = bootstrap_with(
            Arc::new(ScriptedSearch::default()),
            Arc::new(TerminalNotifier::new(Vec::new())),
        );
        assert_eq!(ctx.controller().phase(), SearchPhase::Idle);
        assert_eq!(ctx.gallery().card_count(), 0);
        assert!(ctx.viewport().observed().is_empty());
    }
}
