//! In-memory port implementations for tests.
//!
//! Every fake records what it was asked to do so tests can assert on the
//! exact sequence of UI effects. Used by the unit tests in this crate, the
//! scenario tests under `tests/` and the CLI adapter tests.

use crate::domain::{ImageHit, ResultPage, SearchRequest};
use crate::ports::{
    CardHandle, FetchError, FetchResult, GalleryViewPort, ImageSearchPort, IntersectionPort,
    LightboxPort, NotificationPort, ObserverOptions,
};
use crate::services::{GalleryPorts, PaginationController};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::Notify;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Build a hit whose fields are derived from `n`.
pub fn hit(n: u64) -> ImageHit {
    ImageHit {
        preview_url: format!("https://cdn.example/{n}_640.jpg"),
        fullsize_url: format!("https://cdn.example/{n}_1280.jpg"),
        tags: format!("tag{n}, sample"),
        likes: n,
        views: n * 10,
        comments: n % 7,
        downloads: n * 3,
    }
}

/// Build a page holding `hits` hits out of `total_hits`.
pub fn page(hits: u64, total_hits: u64) -> ResultPage {
    ResultPage::new((0..hits).map(hit).collect(), total_hits)
}

/// Holds a scripted fetch until [`Gate::open`] is called.
#[derive(Clone)]
pub struct Gate(Arc<Notify>);

impl Gate {
    pub fn open(&self) {
        self.0.notify_one();
    }
}

/// Search port answering from a queue of scripted responses.
///
/// A response is taken from the queue when the call starts, before any
/// gate is awaited.
#[derive(Default)]
pub struct ScriptedSearch {
    responses: Mutex<VecDeque<FetchResult<ResultPage>>>,
    requests: Mutex<Vec<SearchRequest>>,
    gates: Mutex<HashMap<usize, Arc<Notify>>>,
}

impl ScriptedSearch {
    pub fn push_ok(&self, page: ResultPage) {
        lock(&self.responses).push_back(Ok(page));
    }

    pub fn push_err(&self, err: FetchError) {
        lock(&self.responses).push_back(Err(err));
    }

    /// Make the `call`-th fetch (1-based) wait for the returned gate.
    pub fn gate_call(&self, call: usize) -> Gate {
        let notify = Arc::new(Notify::new());
        lock(&self.gates).insert(call, Arc::clone(&notify));
        Gate(notify)
    }

    /// Requests received so far, in order.
    pub fn requests(&self) -> Vec<SearchRequest> {
        lock(&self.requests).clone()
    }
}

#[async_trait]
impl ImageSearchPort for ScriptedSearch {
    async fn fetch(&self, request: &SearchRequest) -> FetchResult<ResultPage> {
        let call = {
            let mut requests = lock(&self.requests);
            requests.push(request.clone());
            requests.len()
        };
        let response = lock(&self.responses)
            .pop_front()
            .unwrap_or_else(|| {
                Err(FetchError::InvalidResponse {
                    message: format!("no scripted response for call {call}"),
                })
            });
        let gate = lock(&self.gates).remove(&call);
        if let Some(gate) = gate {
            gate.notified().await;
        }
        response
    }
}

/// Something the gallery view was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Cleared,
    Appended { cards: usize },
    ScrolledBy(u32),
    ScrolledToTop,
    ScrollTopVisible(bool),
    RetryVisible(bool),
}

/// Gallery view keeping a list of card handles.
///
/// Handles are never reused, even across `clear`.
#[derive(Default)]
pub struct RecordingView {
    cards: Mutex<Vec<CardHandle>>,
    markup: Mutex<String>,
    next_id: Mutex<u64>,
    events: Mutex<Vec<ViewEvent>>,
}

impl RecordingView {
    pub fn card_count(&self) -> usize {
        lock(&self.cards).len()
    }

    pub fn last_card(&self) -> Option<CardHandle> {
        lock(&self.cards).last().copied()
    }

    pub fn markup(&self) -> String {
        lock(&self.markup).clone()
    }

    /// Events other than clear and append.
    pub fn events(&self) -> Vec<ViewEvent> {
        lock(&self.events)
            .iter()
            .filter(|e| !matches!(e, ViewEvent::Cleared | ViewEvent::Appended { .. }))
            .cloned()
            .collect()
    }

    pub fn all_events(&self) -> Vec<ViewEvent> {
        lock(&self.events).clone()
    }

    fn record(&self, event: ViewEvent) {
        lock(&self.events).push(event);
    }
}

impl GalleryViewPort for RecordingView {
    fn clear(&self) {
        lock(&self.cards).clear();
        lock(&self.markup).clear();
        self.record(ViewEvent::Cleared);
    }

    fn append(&self, markup: &str, cards: usize) -> Option<CardHandle> {
        lock(&self.markup).push_str(markup);
        let mut next_id = lock(&self.next_id);
        let mut list = lock(&self.cards);
        for _ in 0..cards {
            list.push(CardHandle::new(*next_id));
            *next_id += 1;
        }
        drop(list);
        drop(next_id);
        self.record(ViewEvent::Appended { cards });
        if cards == 0 { None } else { self.last_card() }
    }

    fn scroll_by_cards(&self, cards: u32) {
        self.record(ViewEvent::ScrolledBy(cards));
    }

    fn scroll_to_top(&self) {
        self.record(ViewEvent::ScrolledToTop);
    }

    fn set_scroll_top_visible(&self, visible: bool) {
        self.record(ViewEvent::ScrollTopVisible(visible));
    }

    fn set_retry_visible(&self, visible: bool) {
        self.record(ViewEvent::RetryVisible(visible));
    }
}

/// A notification that was shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Failure(String),
}

#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        lock(&self.notices).clone()
    }

    pub fn failures(&self) -> Vec<String> {
        self.notices()
            .into_iter()
            .filter_map(|n| match n {
                Notice::Failure(message) => Some(message),
                Notice::Success(_) => None,
            })
            .collect()
    }
}

impl NotificationPort for RecordingNotifier {
    fn success(&self, message: &str) {
        lock(&self.notices)
            .push(Notice::Success(message.to_string()));
    }

    fn failure(&self, message: &str) {
        lock(&self.notices)
            .push(Notice::Failure(message.to_string()));
    }
}

#[derive(Default)]
pub struct CountingLightbox {
    refreshes: AtomicUsize,
}

impl CountingLightbox {
    pub fn refreshes(&self) -> usize {
        self.refreshes.load(Ordering::SeqCst)
    }
}

impl LightboxPort for CountingLightbox {
    fn refresh(&self) {
        self.refreshes.fetch_add(1, Ordering::SeqCst);
    }
}

/// Intersection watcher remembering which cards are observed.
#[derive(Default)]
pub struct RecordingIntersections {
    observed: Mutex<Vec<CardHandle>>,
    options: Mutex<Option<ObserverOptions>>,
}

impl RecordingIntersections {
    pub fn observed(&self) -> Vec<CardHandle> {
        lock(&self.observed).clone()
    }

    pub fn last_options(&self) -> Option<ObserverOptions> {
        *lock(&self.options)
    }
}

impl IntersectionPort for RecordingIntersections {
    fn observe(&self, target: CardHandle, options: ObserverOptions) {
        lock(&self.observed).push(target);
        *lock(&self.options) = Some(options);
    }

    fn unobserve(&self, target: CardHandle) {
        lock(&self.observed).retain(|card| *card != target);
    }
}

/// All fakes wired together.
#[derive(Default)]
pub struct TestGallery {
    pub search: Arc<ScriptedSearch>,
    pub view: Arc<RecordingView>,
    pub notifier: Arc<RecordingNotifier>,
    pub lightbox: Arc<CountingLightbox>,
    pub intersections: Arc<RecordingIntersections>,
}

impl TestGallery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ports(&self) -> GalleryPorts {
        GalleryPorts {
            search: self.search.clone(),
            view: self.view.clone(),
            notifier: self.notifier.clone(),
            lightbox: self.lightbox.clone(),
            intersections: self.intersections.clone(),
        }
    }

    pub fn controller(&self) -> PaginationController {
        PaginationController::new(self.ports())
    }
}
