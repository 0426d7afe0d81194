//! Sentinel tracking and the scroll-to-top toggle.

use crate::ports::{CardHandle, IntersectionEntry, IntersectionPort, ObserverOptions};
use std::sync::Arc;
use tracing::debug;

/// Vertical offset past which the scroll-to-top button is shown.
pub const SCROLL_TOP_THRESHOLD_PX: f64 = 300.0;

/// Watches exactly one sentinel card at a time.
pub struct SentinelObserver {
    port: Arc<dyn IntersectionPort>,
    options: ObserverOptions,
    sentinel: Option<CardHandle>,
}

impl SentinelObserver {
    /// Create an observer with the default options (no margin, 10% visible).
    pub fn new(port: Arc<dyn IntersectionPort>) -> Self {
        Self::with_options(port, ObserverOptions::default())
    }

    /// Create an observer with custom options.
    pub fn with_options(port: Arc<dyn IntersectionPort>, options: ObserverOptions) -> Self {
        Self {
            port,
            options,
            sentinel: None,
        }
    }

    /// Card currently being watched.
    pub const fn sentinel(&self) -> Option<CardHandle> {
        self.sentinel
    }

    /// Check whether `entry` should trigger a load: it must be intersecting
    /// and target the current sentinel.
    pub fn is_trigger(&self, entry: &IntersectionEntry) -> bool {
        entry.is_intersecting && self.sentinel == Some(entry.target)
    }

    /// Stop watching the current sentinel (if any) and watch `target`.
    pub fn retarget(&mut self, target: CardHandle) {
        if self.sentinel == Some(target) {
            return;
        }
        if let Some(previous) = self.sentinel.take() {
            self.port.unobserve(previous);
        }
        debug!(sentinel = %target, "Observing sentinel");
        self.port.observe(target, self.options);
        self.sentinel = Some(target);
    }

    /// Stop watching entirely.
    pub fn stop(&mut self) {
        if let Some(previous) = self.sentinel.take() {
            debug!(sentinel = %previous, "Observer stopped");
            self.port.unobserve(previous);
        }
    }
}

/// Tracks whether the scroll-to-top button should be visible.
#[derive(Debug, Clone, Copy)]
pub struct ScrollTopToggle {
    threshold: f64,
    visible: bool,
}

impl Default for ScrollTopToggle {
    fn default() -> Self {
        Self::new(SCROLL_TOP_THRESHOLD_PX)
    }
}

impl ScrollTopToggle {
    pub const fn new(threshold: f64) -> Self {
        Self {
            threshold,
            visible: false,
        }
    }

    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feed a new scroll offset. Returns the new visibility when it flipped.
    pub fn update(&mut self, offset_y: f64) -> Option<bool> {
        let visible = offset_y > self.threshold;
        if visible == self.visible {
            return None;
        }
        self.visible = visible;
        Some(visible)
    }
}
