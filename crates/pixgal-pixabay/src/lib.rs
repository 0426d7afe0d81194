//! Pixabay image search adapter for pixgal.
//!
//! Implements [`pixgal_core::ImageSearchPort`] on top of the public Pixabay
//! API. One port call is one HTTP GET; there is no retry and no caching.
//!
//! ```no_run
//! use pixgal_pixabay::{DefaultPixabayClient, PixabayClientConfig};
//!
//! let config = PixabayClientConfig::new().with_api_key("your-key");
//! let client = DefaultPixabayClient::new(&config)?;
//! # Ok::<(), pixgal_pixabay::PixabayError>(())
//! ```

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// Allow private types in public type alias - DefaultPixabayClient is meant to be used
// through the ImageSearchPort trait, not its internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultPixabayClient;

// Configuration
pub use config::{DEFAULT_BASE_URL, PixabayClientConfig};

// Errors surfaced by client construction
pub use error::PixabayError;

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
