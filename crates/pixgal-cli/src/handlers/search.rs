//! One-shot search handler.
//!
//! Runs a search, keeps scrolling the sentinel into view until the results
//! are exhausted or the page limit is reached, then writes the gallery page.

use std::path::Path;

use anyhow::Result;
use pixgal_core::{LoadMoreOutcome, SearchOutcome, SearchPhase};
use tracing::debug;

use super::{describe, reveal_sentinel, sync_scroll, write_gallery};
use crate::bootstrap::CliContext;

/// Execute the search command.
///
/// # Arguments
///
/// * `ctx` - The CLI context
/// * `query` - Search terms as typed
/// * `max_pages` - Upper bound on pages to load (at least 1)
/// * `output` - Where to write the gallery page
pub async fn execute(ctx: &CliContext, query: &str, max_pages: u32, output: &Path) -> Result<()> {
    println!("🔍 Searching Pixabay for: '{}'...", query.trim());

    let outcome = ctx.controller().search(query).await;
    debug!(?outcome, "Search finished");
    sync_scroll(ctx);

    if let SearchOutcome::Found { .. } = outcome {
        load_pages(ctx, max_pages.max(1)).await;
    }

    write_gallery(ctx, output)?;

    let state = ctx.controller().state();
    println!(
        "🖼️  {} images ({} of {} pages) written to {}",
        ctx.gallery().card_count(),
        state.current_page,
        state.total_pages,
        output.display()
    );
    Ok(())
}

/// Load further pages until `max_pages` are shown or nothing more can load.
///
/// Returns the number of pages appended.
pub async fn load_pages(ctx: &CliContext, max_pages: u32) -> u32 {
    let mut appended = 0;
    loop {
        let state = ctx.controller().state();
        if state.current_page >= max_pages || state.phase != SearchPhase::HasResults {
            break;
        }

        let outcome = reveal_sentinel(ctx).await;
        if let Some(line) = describe(&outcome) {
            println!("{line}");
        }
        match outcome {
            LoadMoreOutcome::Loaded { .. } => appended += 1,
            LoadMoreOutcome::Failed(_) | LoadMoreOutcome::Ignored | LoadMoreOutcome::Stale => {
                break;
            }
        }
    }
    appended
}
