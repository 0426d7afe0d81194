//! Pagination controller - the infinite-scroll state machine.
//!
//! ```text
//! Idle ──search──▶ Searching ──hits──▶ HasResults ◀──────┐
//!  ▲                  │                    │ sentinel     │ more pages
//!  └──empty / error───┘                    ▼              │
//!                                      LoadingMore ───────┘
//!                                          │ last page
//!                                          ▼
//!                                      Exhausted
//! ```
//!
//! State lives behind a `std::sync::Mutex` that is never held across an
//! `.await`. Every fetch is tagged with the session that issued it, and a
//! response that comes back after a newer search started is dropped.

use crate::domain::{PAGE_SIZE, ResultPage, SearchPhase, SearchState, total_pages};
use crate::error::SearchError;
use crate::ports::{
    CardHandle, FetchError, GalleryViewPort, ImageSearchPort, IntersectionEntry,
    IntersectionPort, LightboxPort, NotificationPort,
};
use crate::render::render_cards;
use crate::services::messages;
use crate::services::observer::{ScrollTopToggle, SentinelObserver};
use crate::services::query_client::QueryClient;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

/// Card heights scrolled forward after each loaded page.
const SCROLL_CARDS_PER_PAGE: u32 = 2;

/// Container for every port the controller talks to.
#[derive(Clone)]
pub struct GalleryPorts {
    pub search: Arc<dyn ImageSearchPort>,
    pub view: Arc<dyn GalleryViewPort>,
    pub notifier: Arc<dyn NotificationPort>,
    pub lightbox: Arc<dyn LightboxPort>,
    pub intersections: Arc<dyn IntersectionPort>,
}

/// Result of submitting a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The first page was rendered.
    Found {
        total_hits: u64,
        total_pages: u32,
    },
    /// The search failed; the gallery is empty and a failure notice was shown.
    Failed(SearchError),
    /// A newer search started while this one was in flight.
    Superseded,
}

/// Result of a load-more attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadMoreOutcome {
    /// A page was appended.
    Loaded {
        current_page: u32,
        total_pages: u32,
    },
    /// Nothing to do: no trigger, no more pages, or a fetch already in flight.
    Ignored,
    /// The fetch failed; prior results are intact and the retry affordance is shown.
    Failed(FetchError),
    /// A newer search started while this fetch was in flight.
    Stale,
}

struct Inner {
    state: SearchState,
    client: QueryClient,
    observer: SentinelObserver,
    scroll_top: ScrollTopToggle,
    retry_pending: bool,
}

/// Orchestrates new searches and incremental loads.
pub struct PaginationController {
    view: Arc<dyn GalleryViewPort>,
    notifier: Arc<dyn NotificationPort>,
    lightbox: Arc<dyn LightboxPort>,
    inner: Mutex<Inner>,
}

impl PaginationController {
    /// Create a controller in the `Idle` phase.
    pub fn new(ports: GalleryPorts) -> Self {
        let GalleryPorts {
            search,
            view,
            notifier,
            lightbox,
            intersections,
        } = ports;

        Self {
            view,
            notifier,
            lightbox,
            inner: Mutex::new(Inner {
                state: SearchState::default(),
                client: QueryClient::new(search),
                observer: SentinelObserver::new(intersections),
                scroll_top: ScrollTopToggle::default(),
                retry_pending: false,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the current session state.
    pub fn state(&self) -> SearchState {
        self.lock().state.clone()
    }

    pub fn phase(&self) -> SearchPhase {
        self.lock().state.phase
    }

    /// Card currently watched for load-more.
    pub fn sentinel(&self) -> Option<CardHandle> {
        self.lock().observer.sentinel()
    }

    /// Check whether a failed load-more is waiting for a retry.
    pub fn retry_pending(&self) -> bool {
        self.lock().retry_pending
    }

    /// Submit a new search.
    ///
    /// Clears the gallery and starts a new session before anything else, so
    /// any load-more still in flight for the previous query is discarded
    /// when it returns.
    pub async fn search(&self, raw_query: &str) -> SearchOutcome {
        let query = raw_query.trim();

        let (pending, session) = {
            let mut inner = self.lock();
            inner.state.reset(query);
            inner.state.phase = SearchPhase::Searching;
            inner.observer.stop();
            inner.retry_pending = false;
            inner.client.reset_page();
            inner.client.set_query(query);
            self.view.clear();
            self.view.set_retry_visible(false);

            if query.is_empty() {
                inner.state.phase = SearchPhase::Idle;
                drop(inner);
                return self.fail_search(SearchError::EmptyQuery);
            }

            (inner.client.prepare(), inner.state.session)
        };

        let result = pending.send().await;

        let mut inner = self.lock();
        if inner.state.session != session {
            debug!(%session, current = %inner.state.session, "Dropping superseded search response");
            return SearchOutcome::Superseded;
        }

        let page = match result {
            Ok(page) if page.is_empty() => {
                inner.state.phase = SearchPhase::Idle;
                drop(inner);
                return self.fail_search(SearchError::NoResults {
                    query: query.to_string(),
                });
            }
            Ok(page) => page,
            Err(err) => {
                inner.state.phase = SearchPhase::Idle;
                drop(inner);
                return self.fail_search(err.into());
            }
        };

        inner.client.advance();
        let pages = total_pages(page.total_hits, PAGE_SIZE);
        inner.state.total_pages = pages;

        let last_card = self.render(&page);
        self.notifier.success(&messages::found(page.total_hits));
        inner.state.record_page();
        info!(
            query,
            total_hits = page.total_hits,
            total_pages = pages,
            "Search returned results"
        );

        if inner.state.has_more() {
            inner.state.phase = SearchPhase::HasResults;
            if let Some(card) = last_card {
                inner.observer.retarget(card);
            }
        } else {
            self.finish(&mut inner);
        }

        SearchOutcome::Found {
            total_hits: page.total_hits,
            total_pages: pages,
        }
    }

    /// Handle intersection changes reported by the viewport watcher.
    ///
    /// Only an intersecting entry for the current sentinel triggers a load.
    /// Returns the outcome of the last load triggered, or `Ignored`.
    pub async fn on_intersection(&self, entries: &[IntersectionEntry]) -> LoadMoreOutcome {
        let mut outcome = LoadMoreOutcome::Ignored;
        for entry in entries {
            let triggered = {
                let inner = self.lock();
                inner.state.total_pages > 1 && inner.observer.is_trigger(entry)
            };
            if triggered {
                outcome = self.load_more().await;
            }
        }
        outcome
    }

    /// Fetch and append the next page.
    pub async fn load_more(&self) -> LoadMoreOutcome {
        let (pending, session) = {
            let mut inner = self.lock();
            if inner.state.phase != SearchPhase::HasResults || !inner.state.has_more() {
                return LoadMoreOutcome::Ignored;
            }
            inner.state.phase = SearchPhase::LoadingMore;
            (inner.client.prepare(), inner.state.session)
        };

        let result = pending.send().await;

        let mut inner = self.lock();
        if inner.state.session != session {
            debug!(%session, current = %inner.state.session, "Dropping stale page");
            return LoadMoreOutcome::Stale;
        }

        let page = match result {
            Ok(page) => page,
            Err(err) => {
                warn!(
                    query = %inner.state.query,
                    page = inner.client.page(),
                    error = %err,
                    "Loading more results failed"
                );
                inner.state.phase = SearchPhase::HasResults;
                inner.retry_pending = true;
                self.view.set_retry_visible(true);
                return LoadMoreOutcome::Failed(err);
            }
        };

        if inner.retry_pending {
            inner.retry_pending = false;
            self.view.set_retry_visible(false);
        }
        inner.client.advance();
        let last_card = self.render(&page);
        self.view.scroll_by_cards(SCROLL_CARDS_PER_PAGE);
        inner.state.record_page();
        debug!(
            current_page = inner.state.current_page,
            total_pages = inner.state.total_pages,
            hits = page.len(),
            "Appended page"
        );

        match last_card {
            Some(card) if inner.state.has_more() => {
                inner.state.phase = SearchPhase::HasResults;
                inner.observer.retarget(card);
            }
            _ => {
                if inner.state.has_more() {
                    warn!(
                        current_page = inner.state.current_page,
                        total_pages = inner.state.total_pages,
                        "Empty page before the last one; treating results as exhausted"
                    );
                }
                self.finish(&mut inner);
            }
        }

        LoadMoreOutcome::Loaded {
            current_page: inner.state.current_page,
            total_pages: inner.state.total_pages,
        }
    }

    /// Retry the load-more that last failed.
    ///
    /// The affordance stays up until a load actually runs: `load_more` hides
    /// it on success and re-arms it on failure.
    pub async fn retry_load_more(&self) -> LoadMoreOutcome {
        if !self.lock().retry_pending {
            return LoadMoreOutcome::Ignored;
        }
        self.load_more().await
    }

    /// Feed the page's vertical scroll offset.
    pub fn on_scroll(&self, offset_y: f64) {
        let mut inner = self.lock();
        if let Some(visible) = inner.scroll_top.update(offset_y) {
            self.view.set_scroll_top_visible(visible);
        }
    }

    pub fn scroll_to_top(&self) {
        self.view.scroll_to_top();
    }

    /// Append a page to the gallery and return its last card.
    fn render(&self, page: &ResultPage) -> Option<CardHandle> {
        let markup = render_cards(&page.hits);
        let last_card = self.view.append(&markup, page.len());
        self.lightbox.refresh();
        last_card
    }

    /// Enter `Exhausted`: stop observing and show the end notice once.
    fn finish(&self, inner: &mut Inner) {
        inner.state.phase = SearchPhase::Exhausted;
        inner.observer.stop();
        if inner.state.take_end_notice() {
            self.notifier.failure(messages::END_OF_RESULTS);
        }
    }

    fn fail_search(&self, err: SearchError) -> SearchOutcome {
        match &err {
            SearchError::Fetch(cause) => warn!(error = %cause, "Search request failed"),
            other => info!(reason = %other, "Search produced no results"),
        }
        self.view.clear();
        self.notifier.failure(messages::NO_MATCHES);
        SearchOutcome::Failed(err)
    }
}
