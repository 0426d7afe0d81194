//! Query client: the current query plus the page cursor.

use crate::domain::{ResultPage, SearchRequest};
use crate::ports::{FetchResult, ImageSearchPort};
use std::sync::Arc;
use tracing::debug;

/// Wraps the search port with a query string and a page cursor.
///
/// The cursor is the next page number to request. It only moves forward
/// after a successful fetch, or back to 1 through [`reset_page`].
///
/// [`reset_page`]: QueryClient::reset_page
pub struct QueryClient {
    port: Arc<dyn ImageSearchPort>,
    query: String,
    page: u32,
}

/// A request captured from the client, ready to be sent.
///
/// Holding one does not borrow the client, so the caller can release any
/// lock around the client while the request is in flight.
pub struct PendingFetch {
    port: Arc<dyn ImageSearchPort>,
    request: SearchRequest,
}

impl PendingFetch {
    /// The request that will be sent.
    pub const fn request(&self) -> &SearchRequest {
        &self.request
    }

    /// Send the request. Exactly one call to the port, no retry.
    pub async fn send(self) -> FetchResult<ResultPage> {
        debug!(query = %self.request.query, page = self.request.page, "Fetching page");
        self.port.fetch(&self.request).await
    }
}

impl QueryClient {
    /// Create a client with an empty query and the cursor on page 1.
    pub fn new(port: Arc<dyn ImageSearchPort>) -> Self {
        Self {
            port,
            query: String::new(),
            page: 1,
        }
    }

    /// Replace the query. Does not touch the page cursor.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Current query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Move the cursor back to page 1.
    pub const fn reset_page(&mut self) {
        self.page = 1;
    }

    /// Next page number to request.
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Capture the request for the current query and page.
    pub fn prepare(&self) -> PendingFetch {
        PendingFetch {
            port: Arc::clone(&self.port),
            request: SearchRequest::new(self.query.clone(), self.page),
        }
    }

    /// Advance the cursor after a successful fetch.
    pub const fn advance(&mut self) {
        self.page = self.page.saturating_add(1);
    }

    /// Fetch the current page and advance the cursor on success.
    pub async fn fetch_page(&mut self) -> FetchResult<ResultPage> {
        let page = self.prepare().send().await?;
        self.advance();
        Ok(page)
    }
}
