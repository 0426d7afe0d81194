//! End-to-end scenarios for the pagination controller, driven through the
//! in-memory ports from `pixgal_core::testing`.

use pixgal_core::testing::{Notice, TestGallery, ViewEvent, page};
use pixgal_core::{
    FetchError, IntersectionEntry, LoadMoreOutcome, ObserverOptions, SearchError, SearchOutcome,
    SearchPhase, messages,
};

#[tokio::test]
async fn test_cats_first_page() {
    let gallery = TestGallery::new();
    gallery.search.push_ok(page(40, 80));
    let controller = gallery.controller();

    let outcome = controller.search("cats").await;

    assert_eq!(
        outcome,
        SearchOutcome::Found {
            total_hits: 80,
            total_pages: 2
        }
    );
    let state = controller.state();
    assert_eq!(state.current_page, 1);
    assert_eq!(state.total_pages, 2);
    assert_eq!(
        gallery.notifier.notices(),
        vec![Notice::Success("Hooray! We found 80 images.".to_string())]
    );
    assert_eq!(gallery.view.card_count(), 40);
    assert_eq!(gallery.intersections.observed(), vec![gallery.view.last_card().unwrap()]);
}

#[tokio::test]
async fn test_sentinel_observed_at_zero_margin_and_tenth_threshold() {
    let gallery = TestGallery::new();
    gallery.search.push_ok(page(40, 80));
    let controller = gallery.controller();

    controller.search("cats").await;

    assert_eq!(
        gallery.intersections.last_options(),
        Some(ObserverOptions {
            root_margin_px: 0,
            threshold: 0.1
        })
    );
}

#[tokio::test]
async fn test_cats_scroll_to_exhaustion() {
    let gallery = TestGallery::new();
    gallery.search.push_ok(page(40, 80));
    gallery.search.push_ok(page(40, 80));
    let controller = gallery.controller();
    controller.search("cats").await;

    let sentinel = controller.sentinel().unwrap();
    let outcome = controller
        .on_intersection(&[IntersectionEntry::entering(sentinel)])
        .await;

    assert_eq!(
        outcome,
        LoadMoreOutcome::Loaded {
            current_page: 2,
            total_pages: 2
        }
    );
    assert_eq!(controller.phase(), SearchPhase::Exhausted);
    assert!(gallery.intersections.observed().is_empty());
    assert_eq!(gallery.view.card_count(), 80);
    assert_eq!(
        gallery.notifier.failures(),
        vec![messages::END_OF_RESULTS.to_string()]
    );

    // The old sentinel scrolling into view again does nothing.
    let again = controller
        .on_intersection(&[IntersectionEntry::entering(sentinel)])
        .await;
    assert_eq!(again, LoadMoreOutcome::Ignored);
    assert_eq!(gallery.notifier.failures().len(), 1);
    assert_eq!(gallery.search.requests().len(), 2);
}

#[tokio::test]
async fn test_empty_query_after_results() {
    let gallery = TestGallery::new();
    gallery.search.push_ok(page(40, 80));
    let controller = gallery.controller();
    controller.search("cats").await;

    let outcome = controller.search("").await;

    assert_eq!(outcome, SearchOutcome::Failed(SearchError::EmptyQuery));
    assert_eq!(gallery.view.card_count(), 0);
    assert_eq!(gallery.search.requests().len(), 1);
    let failures = gallery.notifier.failures();
    assert_eq!(failures.len(), 1);
    assert!(failures[0].contains("matching your search query"));
    assert_eq!(controller.sentinel(), None);
}

#[tokio::test]
async fn test_no_hits_clears_gallery() {
    let gallery = TestGallery::new();
    gallery.search.push_ok(page(40, 80));
    gallery.search.push_ok(page(0, 0));
    let controller = gallery.controller();
    controller.search("cats").await;

    let outcome = controller.search("zzznonexistent").await;

    assert_eq!(
        outcome,
        SearchOutcome::Failed(SearchError::NoResults {
            query: "zzznonexistent".to_string()
        })
    );
    assert_eq!(gallery.view.card_count(), 0);
    assert_eq!(gallery.notifier.failures(), vec![messages::NO_MATCHES.to_string()]);
    assert_eq!(controller.phase(), SearchPhase::Idle);
}

#[tokio::test]
async fn test_unreachable_api_on_search_collapses_to_no_matches() {
    let gallery = TestGallery::new();
    gallery.search.push_err(FetchError::Network {
        message: "dns error".to_string(),
    });
    let controller = gallery.controller();

    let outcome = controller.search("cats").await;

    assert!(matches!(outcome, SearchOutcome::Failed(SearchError::Fetch(_))));
    assert_eq!(gallery.notifier.failures(), vec![messages::NO_MATCHES.to_string()]);
}

#[tokio::test]
async fn test_load_more_never_replaces_cards() {
    let gallery = TestGallery::new();
    gallery.search.push_ok(page(40, 120));
    gallery.search.push_ok(page(40, 120));
    gallery.search.push_ok(page(40, 120));
    let controller = gallery.controller();

    controller.search("mountains").await;
    while let Some(card) = controller.sentinel() {
        controller
            .on_intersection(&[IntersectionEntry::entering(card)])
            .await;
    }

    let cleared = gallery
        .view
        .all_events()
        .iter()
        .filter(|e| **e == ViewEvent::Cleared)
        .count();
    assert_eq!(cleared, 1);
    assert_eq!(gallery.view.card_count(), 120);
    assert_eq!(gallery.lightbox.refreshes(), 3);
}

#[tokio::test]
async fn test_load_more_appends_markup_after_first_page() {
    let gallery = TestGallery::new();
    gallery.search.push_ok(page(40, 80));
    gallery.search.push_ok(page(40, 80));
    let controller = gallery.controller();

    controller.search("cats").await;
    let first = gallery.view.markup();
    let sentinel = controller.sentinel().unwrap();
    controller
        .on_intersection(&[IntersectionEntry::entering(sentinel)])
        .await;

    let markup = gallery.view.markup();
    assert!(markup.starts_with(&first));
    assert_eq!(markup.matches("class=\"photo-card\"").count(), 80);
}
