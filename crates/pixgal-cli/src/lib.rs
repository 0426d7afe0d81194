//! Terminal front end for pixgal.
//!
//! Wires the Pixabay adapter and the terminal/HTML adapters into a
//! [`pixgal_core::PaginationController`] and exposes the `pixgal` commands.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tokio_test as _;

// Only used by the binary target
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod adapters;
pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap, bootstrap_with};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
