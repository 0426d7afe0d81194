//! Interactive browse handler.
//!
//! A line of text starts a new search; an empty line scrolls to the end of
//! the gallery, which loads the next page when the sentinel is observed.
//! The gallery page is rewritten after every action.

use std::path::Path;

use anyhow::Result;
use pixgal_core::{SearchOutcome, SearchPhase};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use super::{describe, reveal_sentinel, sync_scroll, write_gallery};
use crate::bootstrap::CliContext;
use crate::error::CliError;

const PROMPT: &str = "pixgal> ";

/// What a line typed at the prompt asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseAction {
    Search(String),
    LoadMore,
    Retry,
    Top,
    Help,
    Quit,
}

impl BrowseAction {
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            "" => Self::LoadMore,
            "retry" => Self::Retry,
            "top" => Self::Top,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            query => Self::Search(query.to_string()),
        }
    }
}

/// Execute the browse command.
pub async fn execute(ctx: &CliContext, output: &Path) -> Result<()> {
    let mut editor = DefaultEditor::new().map_err(CliError::from)?;
    print_help();

    loop {
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(CliError::from(err).into()),
        };
        if !line.trim().is_empty() {
            editor
                .add_history_entry(line.as_str())
                .map_err(CliError::from)?;
        }

        match BrowseAction::parse(&line) {
            BrowseAction::Quit => break,
            BrowseAction::Help => print_help(),
            action => {
                apply(ctx, action).await;
                write_gallery(ctx, output)?;
            }
        }
    }

    println!("👋 Gallery saved to {}", output.display());
    Ok(())
}

/// Run one action against the controller and print its status line.
pub async fn apply(ctx: &CliContext, action: BrowseAction) {
    let controller = ctx.controller();
    match action {
        BrowseAction::Search(query) => {
            if let SearchOutcome::Found { .. } = controller.search(&query).await {
                print_status(ctx);
            }
        }
        BrowseAction::LoadMore => match controller.phase() {
            SearchPhase::HasResults => {
                let outcome = reveal_sentinel(ctx).await;
                if let Some(line) = describe(&outcome) {
                    println!("{line}");
                }
            }
            SearchPhase::Exhausted => println!("ℹ️  No more results for this query."),
            SearchPhase::Idle => println!("ℹ️  Type a query to search."),
            SearchPhase::Searching | SearchPhase::LoadingMore => {}
        },
        BrowseAction::Retry => {
            let outcome = controller.retry_load_more().await;
            match describe(&outcome) {
                Some(line) => println!("{line}"),
                None => println!("ℹ️  Nothing to retry."),
            }
        }
        BrowseAction::Top => {
            controller.scroll_to_top();
            println!("⬆️  Back to the top.");
        }
        BrowseAction::Help | BrowseAction::Quit => {}
    }
    sync_scroll(ctx);
}

fn print_status(ctx: &CliContext) {
    let state = ctx.controller().state();
    println!(
        "🖼️  {} images shown, page {} of {}",
        ctx.gallery().card_count(),
        state.current_page,
        state.total_pages
    );
}

fn print_help() {
    println!("Type a query and press Enter to search.");
    println!("  <Enter>  load more results");
    println!("  retry    retry a failed load");
    println!("  top      scroll back to the top");
    println!("  quit     exit");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::TerminalNotifier;
    use crate::bootstrap::bootstrap_with;
    use pixgal_core::FetchError;
    use pixgal_core::testing::{ScriptedSearch, page};
    use std::sync::Arc;

    fn context(search: &Arc<ScriptedSearch>) -> CliContext {
        bootstrap_with(search.clone(), Arc::new(TerminalNotifier::new(Vec::new())))
    }

    #[test]
    fn test_parse_actions() {
        assert_eq!(BrowseAction::parse(""), BrowseAction::LoadMore);
        assert_eq!(BrowseAction::parse("   "), BrowseAction::LoadMore);
        assert_eq!(BrowseAction::parse("retry"), BrowseAction::Retry);
        assert_eq!(BrowseAction::parse(" top "), BrowseAction::Top);
        assert_eq!(BrowseAction::parse("?"), BrowseAction::Help);
        assert_eq!(BrowseAction::parse("exit"), BrowseAction::Quit);
        assert_eq!(
            BrowseAction::parse("  red fox "),
            BrowseAction::Search("red fox".to_string())
        );
    }

    #[tokio::test]
    async fn test_search_then_load_more() {
        let search = Arc::new(ScriptedSearch::default());
        search.push_ok(page(40, 80));
        search.push_ok(page(40, 80));
        let ctx = context(&search);

        apply(&ctx, BrowseAction::Search("cats".to_string())).await;
        assert_eq!(ctx.gallery().card_count(), 40);

        apply(&ctx, BrowseAction::LoadMore).await;
        assert_eq!(ctx.gallery().card_count(), 80);
        assert_eq!(ctx.controller().phase(), SearchPhase::Exhausted);

        apply(&ctx, BrowseAction::LoadMore).await;
        assert_eq!(search.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_load_more_before_search_does_nothing() {
        let search = Arc::new(ScriptedSearch::default());
        let ctx = context(&search);

        apply(&ctx, BrowseAction::LoadMore).await;
        assert!(search.requests().is_empty());
    }

    #[tokio::test]
    async fn test_retry_after_failure() {
        let search = Arc::new(ScriptedSearch::default());
        search.push_ok(page(40, 120));
        search.push_err(FetchError::Network {
            message: "connection reset".to_string(),
        });
        search.push_ok(page(40, 120));
        let ctx = context(&search);

        apply(&ctx, BrowseAction::Search("cats".to_string())).await;
        apply(&ctx, BrowseAction::LoadMore).await;
        assert!(ctx.gallery().retry_visible());
        assert_eq!(ctx.gallery().card_count(), 40);

        apply(&ctx, BrowseAction::Retry).await;
        assert!(!ctx.gallery().retry_visible());
        assert_eq!(ctx.gallery().card_count(), 80);
        assert_eq!(search.requests()[2].page, 2);
    }

    #[tokio::test]
    async fn test_top_resets_scroll() {
        let search = Arc::new(ScriptedSearch::default());
        search.push_ok(page(40, 120));
        search.push_ok(page(40, 120));
        let ctx = context(&search);

        apply(&ctx, BrowseAction::Search("cats".to_string())).await;
        apply(&ctx, BrowseAction::LoadMore).await;
        assert!(ctx.gallery().scroll_top_visible());

        apply(&ctx, BrowseAction::Top).await;
        assert!(ctx.gallery().scroll_offset().abs() < f64::EPSILON);
        assert!(!ctx.gallery().scroll_top_visible());
    }

    #[tokio::test]
    async fn test_new_search_replaces_gallery() {
        let search = Arc::new(ScriptedSearch::default());
        search.push_ok(page(40, 120));
        search.push_ok(page(5, 5));
        let ctx = context(&search);

        apply(&ctx, BrowseAction::Search("cats".to_string())).await;
        apply(&ctx, BrowseAction::Search("dogs".to_string())).await;

        assert_eq!(ctx.gallery().card_count(), 5);
        assert_eq!(ctx.controller().state().query, "dogs");
        assert_eq!(ctx.controller().phase(), SearchPhase::Exhausted);
    }
}
