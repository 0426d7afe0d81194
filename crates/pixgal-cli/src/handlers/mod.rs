//! Command handlers that drive the pagination controller.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input
//!   2. Call controller operations
//!   3. Format output for the terminal and write the gallery page
//!
//! Handlers should NOT touch the search client or the gallery state
//! directly; everything goes through the controller.

pub mod browse;
pub mod search;

use std::path::Path;

use pixgal_core::LoadMoreOutcome;
use pixgal_core::messages;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Report the gallery's scroll offset back to the controller.
pub(crate) fn sync_scroll(ctx: &CliContext) {
    ctx.controller().on_scroll(ctx.gallery().scroll_offset());
}

/// Write the gallery page for the current query.
pub(crate) fn write_gallery(ctx: &CliContext, output: &Path) -> Result<(), CliError> {
    let query = ctx.controller().state().query;
    ctx.gallery()
        .write_document(output, &query, ctx.lightbox().options())
}

/// Scroll the sentinel into view once and hand the entries to the controller.
pub(crate) async fn reveal_sentinel(ctx: &CliContext) -> LoadMoreOutcome {
    let entries = ctx.viewport().scroll_to_end();
    let outcome = ctx.controller().on_intersection(&entries).await;
    sync_scroll(ctx);
    outcome
}

/// One-line terminal summary of a load-more outcome.
pub(crate) fn describe(outcome: &LoadMoreOutcome) -> Option<String> {
    match outcome {
        LoadMoreOutcome::Loaded {
            current_page,
            total_pages,
        } => Some(format!("📄 Loaded page {current_page} of {total_pages}")),
        LoadMoreOutcome::Failed(err) => Some(format!("⚠️  {} ({err})", messages::LOAD_MORE_FAILED)),
        LoadMoreOutcome::Ignored | LoadMoreOutcome::Stale => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixgal_core::FetchError;

    #[test]
    fn test_describe_outcomes() {
        let loaded = LoadMoreOutcome::Loaded {
            current_page: 2,
            total_pages: 3,
        };
        assert_eq!(describe(&loaded).as_deref(), Some("📄 Loaded page 2 of 3"));

        let failed = LoadMoreOutcome::Failed(FetchError::RateLimited);
        assert!(describe(&failed).unwrap().contains("Retry?"));

        assert_eq!(describe(&LoadMoreOutcome::Ignored), None);
        assert_eq!(describe(&LoadMoreOutcome::Stale), None);
    }
}
