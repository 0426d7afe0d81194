//! CLI entry point.
//!
//! Loads `.env`, parses arguments, initialises logging, bootstraps the
//! context and dispatches to the command handlers.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use pixgal_cli::{Cli, CliConfig, Commands, bootstrap, handlers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads PIXABAY_* fallbacks
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging (RUST_LOG wins over --verbose)
    init_tracing(cli.verbose);

    let Some(command) = cli.command.as_ref() else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    // Bootstrap the CLI context (composition root)
    let ctx = match CliConfig::from_cli(&cli).and_then(|config| bootstrap(&config)) {
        Ok(ctx) => ctx,
        Err(err) => {
            eprintln!("❌ {err}");
            std::process::exit(err.exit_code());
        }
    };

    match command {
        Commands::Search {
            query,
            pages,
            output,
        } => {
            handlers::search::execute(&ctx, &query.join(" "), *pages, output).await?;
        }
        Commands::Browse { output } => {
            handlers::browse::execute(&ctx, output).await?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
