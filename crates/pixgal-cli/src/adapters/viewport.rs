//! Simulated viewport reporting when the sentinel card scrolls into view.

use super::lock;
use pixgal_core::ports::{CardHandle, IntersectionEntry, IntersectionPort, ObserverOptions};
use std::sync::Mutex;
use tracing::trace;

/// Viewport watcher driven by the terminal instead of a real scroll position.
///
/// Remembers which cards are observed; [`SimulatedViewport::scroll_to_end`]
/// reports every observed card as entering the viewport.
#[derive(Debug, Default)]
pub struct SimulatedViewport {
    observed: Mutex<Vec<(CardHandle, ObserverOptions)>>,
}

impl SimulatedViewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards currently observed, oldest first.
    pub fn observed(&self) -> Vec<CardHandle> {
        lock(&self.observed).iter().map(|(card, _)| *card).collect()
    }

    pub fn options_for(&self, target: CardHandle) -> Option<ObserverOptions> {
        lock(&self.observed)
            .iter()
            .find(|(card, _)| *card == target)
            .map(|(_, options)| *options)
    }

    /// Scroll to the bottom of the gallery.
    ///
    /// Returns an entering entry for every observed card; empty when
    /// nothing is observed.
    pub fn scroll_to_end(&self) -> Vec<IntersectionEntry> {
        lock(&self.observed)
            .iter()
            .map(|(card, _)| IntersectionEntry::entering(*card))
            .collect()
    }
}

impl IntersectionPort for SimulatedViewport {
    fn observe(&self, target: CardHandle, options: ObserverOptions) {
        trace!(%target, "Observing card");
        let mut observed = lock(&self.observed);
        observed.retain(|(card, _)| *card != target);
        observed.push((target, options));
    }

    fn unobserve(&self, target: CardHandle) {
        trace!(%target, "Unobserving card");
        lock(&self.observed).retain(|(card, _)| *card != target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_reports_observed_cards() {
        let viewport = SimulatedViewport::new();
        assert!(viewport.scroll_to_end().is_empty());

        viewport.observe(CardHandle::new(39), ObserverOptions::default());
        let entries = viewport.scroll_to_end();
        assert_eq!(entries, vec![IntersectionEntry::entering(CardHandle::new(39))]);
    }

    #[test]
    fn test_unobserve_and_reobserve() {
        let viewport = SimulatedViewport::new();
        let card = CardHandle::new(1);
        viewport.observe(card, ObserverOptions::default());
        viewport.observe(card, ObserverOptions::default());
        assert_eq!(viewport.observed(), vec![card]);

        viewport.unobserve(card);
        assert!(viewport.observed().is_empty());
        assert_eq!(viewport.options_for(card), None);
    }

    #[test]
    fn test_remembers_options() {
        let viewport = SimulatedViewport::new();
        let options = ObserverOptions {
            root_margin_px: 200,
            threshold: 0.5,
        };
        viewport.observe(CardHandle::new(3), options);
        assert_eq!(viewport.options_for(CardHandle::new(3)), Some(options));
    }
}
