//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the gallery core expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No `reqwest` or DOM types in any signature
//! - The search port is async, UI ports are fire-and-forget and synchronous
//! - All ports are `Send + Sync` so the controller can be shared behind an `Arc`

mod image_search;
mod ui;

pub use image_search::{FetchError, FetchResult, ImageSearchPort};
#[cfg(test)]
pub use image_search::MockImageSearchPort;
pub use ui::{
    CaptionPosition, CardHandle, GalleryViewPort, IntersectionEntry, IntersectionPort,
    LightboxOptions, LightboxPort, NoticePosition, NotificationPort, NotifyOptions,
    ObserverOptions,
};
