//! Terminal and HTML implementations of the gallery's UI ports.
//!
//! The browser page is replaced by an HTML document kept in memory and
//! written to disk by the handlers; notifications go to the terminal and
//! the viewport is simulated: the handlers decide when the sentinel card
//! scrolls into view.

mod gallery;
mod lightbox;
mod notifier;
mod viewport;

pub use gallery::{CARD_HEIGHT_PX, HtmlGallery};
pub use lightbox::HtmlLightbox;
pub use notifier::TerminalNotifier;
pub use viewport::SimulatedViewport;

use std::sync::{Mutex, MutexGuard, PoisonError};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
