//! Core of the pixgal image gallery.
//!
//! This crate owns the domain types, the port traits the gallery needs from
//! the outside world (image search API, gallery view, notifications,
//! lightbox, viewport intersection watcher) and the services that drive
//! them: the [`QueryClient`] page cursor, the [`PaginationController`]
//! infinite-scroll state machine and the [`SentinelObserver`].
//!
//! Nothing in here performs I/O. Adapters live in `pixgal-pixabay` (HTTP)
//! and `pixgal-cli` (terminal and HTML output).

#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub mod domain;
mod error;
pub mod ports;
pub mod render;
pub mod services;

// In-memory ports for tests in this and downstream crates
#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use domain::{
    ImageHit, PAGE_SIZE, ResultPage, SearchPhase, SearchRequest, SearchState, SessionId,
    total_pages,
};
pub use error::SearchError;
pub use ports::{
    CardHandle, FetchError, GalleryViewPort, ImageSearchPort, IntersectionEntry,
    IntersectionPort, LightboxOptions, LightboxPort, NotificationPort, NotifyOptions,
    ObserverOptions,
};
pub use render::render_cards;
pub use services::{
    GalleryPorts, LoadMoreOutcome, PaginationController, PendingFetch, QueryClient,
    SCROLL_TOP_THRESHOLD_PX, ScrollTopToggle, SearchOutcome, SentinelObserver, messages,
};
