//! Available subcommands.

use clap::Subcommand;
use std::path::PathBuf;

/// Available commands for the gallery.
#[derive(Subcommand)]
pub enum Commands {
    /// Run one search and write the results as an HTML gallery
    Search {
        /// Search terms (joined with spaces)
        #[arg(required = true)]
        query: Vec<String>,
        /// Load at most this many pages (the sentinel is scrolled into view
        /// until the results are exhausted or the limit is reached)
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        pages: u32,
        /// Where to write the gallery page
        #[arg(short, long, default_value = "gallery.html")]
        output: PathBuf,
    },

    /// Browse interactively: type a query to search, press Enter to load more
    Browse {
        /// Where to write the gallery page after every action
        #[arg(short, long, default_value = "gallery.html")]
        output: PathBuf,
    },
}
