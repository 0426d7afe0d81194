//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (HTTP, terminal, HTML output).
//!
//! # Structure
//!
//! - `image` - Search results (`ImageHit`, `ResultPage`)
//! - `search` - Search session state (`SearchState`, `SearchRequest`, `SearchPhase`)

mod image;
mod search;

pub use image::{ImageHit, ResultPage};
pub use search::{PAGE_SIZE, SearchPhase, SearchRequest, SearchState, SessionId, total_pages};
