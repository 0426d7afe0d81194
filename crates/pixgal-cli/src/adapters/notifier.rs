//! Terminal output for gallery notifications.

use super::lock;
use pixgal_core::ports::{NotificationPort, NotifyOptions};
use std::io::{self, Write};
use std::sync::Mutex;
use tracing::debug;

/// Prints gallery notifications as terminal lines.
pub struct TerminalNotifier<W: Write + Send = io::Stdout> {
    out: Mutex<W>,
    options: NotifyOptions,
}

impl TerminalNotifier {
    /// Notifier printing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TerminalNotifier<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            options: NotifyOptions::default(),
        }
    }

    #[must_use]
    pub const fn with_options(mut self, options: NotifyOptions) -> Self {
        self.options = options;
        self
    }

    /// Consume the notifier and return its writer.
    pub fn into_inner(self) -> W {
        self.out
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn print(&self, icon: &str, message: &str) {
        let mut out = lock(&self.out);
        // Printing is best effort.
        if let Err(err) = writeln!(out, "{icon} {message}").and_then(|()| out.flush()) {
            debug!(error = %err, "Failed to print notification");
        }
    }
}

impl<W: Write + Send> NotificationPort for TerminalNotifier<W> {
    fn success(&self, message: &str) {
        self.print("✅", message);
    }

    fn failure(&self, message: &str) {
        self.print("❌", message);
    }

    fn options(&self) -> NotifyOptions {
        self.options
    }
}
