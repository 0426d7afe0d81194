//! Search session state.
//!
//! A session spans one submitted query and every page loaded for it. The
//! state is owned by the pagination controller and never shared as globals.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed number of hits requested per page.
pub const PAGE_SIZE: u32 = 40;

/// Number of pages needed to show `total_hits`, never less than one.
pub fn total_pages(total_hits: u64, page_size: u32) -> u32 {
    let page_size = u64::from(page_size.max(1));
    let pages = total_hits.div_ceil(page_size).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Identifier of a search session.
///
/// Every submitted search gets a fresh id. Fetches are tagged with the id
/// that was current when they were issued so late responses from an older
/// session can be recognised and dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionId(u64);

impl SessionId {
    /// Create a session id from a raw counter value.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The id of the session following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Phase of the pagination state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchPhase {
    /// No search has produced results yet (initial, or after a failed search)
    #[default]
    Idle,
    /// The first page of a new search is in flight
    Searching,
    /// Results are shown and more pages remain
    HasResults,
    /// A next-page fetch is in flight
    LoadingMore,
    /// Every page has been loaded for the current query
    Exhausted,
}

/// Mutable state of the current search session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchState {
    /// Query as submitted, trimmed
    pub query: String,
    /// Pages rendered so far
    pub current_page: u32,
    /// Pages available for the query (at least 1)
    pub total_pages: u32,
    /// Whether the end-of-results notice was already shown this session
    pub end_notice_shown: bool,
    /// Session this state belongs to
    pub session: SessionId,
    /// Current phase
    pub phase: SearchPhase,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            current_page: 0,
            total_pages: 1,
            end_notice_shown: false,
            session: SessionId::default(),
            phase: SearchPhase::Idle,
        }
    }
}

impl SearchState {
    /// Reset for a new search, moving to the next session.
    pub fn reset(&mut self, query: impl Into<String>) {
        *self = Self {
            query: query.into(),
            session: self.session.next(),
            ..Self::default()
        };
    }

    /// Check whether more pages remain to be fetched.
    pub const fn has_more(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Check whether every page has been loaded.
    pub const fn is_exhausted(&self) -> bool {
        self.current_page >= self.total_pages
    }

    /// Record a rendered page. Returns `false` if the state was already exhausted.
    pub fn record_page(&mut self) -> bool {
        if self.is_exhausted() {
            return false;
        }
        self.current_page += 1;
        true
    }

    /// Mark the end notice as shown. Returns `true` only the first time per session.
    pub fn take_end_notice(&mut self) -> bool {
        !std::mem::replace(&mut self.end_notice_shown, true)
    }
}

/// A single page request against the search API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Free text query
    pub query: String,
    /// 1-based page number
    pub page: u32,
    /// Hits per page
    pub per_page: u32,
}

impl SearchRequest {
    /// Create a request for `query` at `page` with the fixed page size.
    pub fn new(query: impl Into<String>, page: u32) -> Self {
        Self {
            query: query.into(),
            page,
            per_page: PAGE_SIZE,
        }
    }
}
