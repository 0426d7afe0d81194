//! UI collaborator ports: gallery view, notifications, lightbox and the
//! viewport intersection watcher.

use std::fmt;
use std::time::Duration;

/// Opaque handle to a rendered card.
///
/// Returned by [`GalleryViewPort::append`] for the last card it inserted,
/// and used as the sentinel for the intersection watcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardHandle(u64);

impl CardHandle {
    /// Create a handle from a view-specific identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for CardHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "card-{}", self.0)
    }
}

/// The gallery surface: results container plus page-level affordances.
pub trait GalleryViewPort: Send + Sync {
    /// Remove every rendered card.
    fn clear(&self);

    /// Append a markup fragment holding `cards` cards.
    ///
    /// Returns the handle of the last card inserted, or `None` when the
    /// fragment holds no cards.
    fn append(&self, markup: &str, cards: usize) -> Option<CardHandle>;

    /// Smooth-scroll forward by `cards` card heights.
    fn scroll_by_cards(&self, cards: u32);

    /// Smooth-scroll back to the top of the page.
    fn scroll_to_top(&self);

    /// Show or hide the scroll-to-top button.
    fn set_scroll_top_visible(&self, visible: bool);

    /// Show or hide the muted "retry loading more" affordance.
    fn set_retry_visible(&self, visible: bool);
}

/// Where notifications appear.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NoticePosition {
    #[default]
    RightTop,
    RightBottom,
    LeftTop,
    LeftBottom,
    CenterTop,
}

/// Display options for notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotifyOptions {
    pub position: NoticePosition,
    /// Auto-dismiss delay
    pub timeout: Duration,
}

impl Default for NotifyOptions {
    fn default() -> Self {
        Self {
            position: NoticePosition::RightTop,
            timeout: Duration::from_secs(5),
        }
    }
}

/// Transient user-facing messages. Fire-and-forget.
pub trait NotificationPort: Send + Sync {
    /// Show a success message.
    fn success(&self, message: &str);

    /// Show a failure message.
    fn failure(&self, message: &str);

    /// Options used to display messages.
    fn options(&self) -> NotifyOptions {
        NotifyOptions::default()
    }
}

/// Caption placement inside the lightbox.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaptionPosition {
    Top,
    #[default]
    Bottom,
    Outside,
}

/// Lightbox configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxOptions {
    /// Image attribute used as caption text
    pub captions_data: String,
    pub caption_position: CaptionPosition,
}

impl Default for LightboxOptions {
    fn default() -> Self {
        Self {
            captions_data: "alt".to_string(),
            caption_position: CaptionPosition::Bottom,
        }
    }
}

/// Click-to-expand viewer for rendered images.
pub trait LightboxPort: Send + Sync {
    /// Rescan the gallery so newly added images become zoomable.
    ///
    /// Must be idempotent.
    fn refresh(&self);
}

/// Configuration of the viewport intersection watcher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Margin around the viewport, in pixels
    pub root_margin_px: u32,
    /// Fraction of the target that must be visible
    pub threshold: f32,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            root_margin_px: 0,
            threshold: 0.1,
        }
    }
}

/// One intersection change reported by the watcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntersectionEntry {
    pub target: CardHandle,
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    /// Entry for a target that just became visible.
    pub const fn entering(target: CardHandle) -> Self {
        Self {
            target,
            is_intersecting: true,
        }
    }
}

/// Viewport intersection watcher.
pub trait IntersectionPort: Send + Sync {
    /// Start watching `target` with `options`.
    fn observe(&self, target: CardHandle, options: ObserverOptions);

    /// Stop watching `target`.
    fn unobserve(&self, target: CardHandle);
}
