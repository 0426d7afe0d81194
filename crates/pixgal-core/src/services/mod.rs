//! Services that drive the gallery through its ports.

pub mod messages;
mod observer;
mod pagination;
mod query_client;

pub use observer::{SCROLL_TOP_THRESHOLD_PX, ScrollTopToggle, SentinelObserver};
pub use pagination::{GalleryPorts, LoadMoreOutcome, PaginationController, SearchOutcome};
pub use query_client::{PendingFetch, QueryClient};
