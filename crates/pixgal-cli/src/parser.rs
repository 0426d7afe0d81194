//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the pixgal image gallery.
///
/// Global options configure the Pixabay client; subcommands pick the way
/// results are browsed.
#[derive(Parser)]
#[command(name = "pixgal")]
#[command(about = "Search Pixabay and browse the results as an infinite-scroll gallery")]
#[command(version)]
pub struct Cli {
    /// Pixabay API key
    #[arg(long = "api-key", env = "PIXABAY_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Override the Pixabay API endpoint
    #[arg(long = "base-url", env = "PIXABAY_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// HTTP request timeout in seconds
    #[arg(long = "timeout-secs", global = true, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
