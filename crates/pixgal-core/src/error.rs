//! Errors raised while running a search.
//!
//! None of these are fatal: the controller catches each one at the action
//! that triggered it and turns it into a notification or a log line.

use crate::ports::FetchError;
use thiserror::Error;

/// Why a search or load-more did not produce results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The trimmed query was empty; no request was sent.
    #[error("search query is empty")]
    EmptyQuery,

    /// The request succeeded but matched nothing.
    #[error("no images match '{query}'")]
    NoResults {
        /// The query that matched nothing
        query: String,
    },

    /// Transport or server failure.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(SearchError::EmptyQuery.to_string(), "search query is empty");

        let err = SearchError::NoResults {
            query: "zzznonexistent".to_string(),
        };
        assert!(err.to_string().contains("zzznonexistent"));

        let err = SearchError::from(FetchError::Status { status: 500 });
        assert!(err.to_string().contains("500"));
    }
}
