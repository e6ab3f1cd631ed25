//! Aniplan CLI
//!
//! A command-line tool for planning weekly anime viewing using AniList catalog and airing data.

use aniplan::cli::{
    args::{Cli, Commands},
    commands::{plan, schedule, trending},
};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    // Run the appropriate command
    match cli.command {
        Commands::Plan {
            episodes_per_day,
            focus,
            include_completed,
            genres,
            season,
            year,
            format,
        } => {
            plan::run(
                episodes_per_day,
                &focus,
                include_completed,
                &genres,
                season.as_deref(),
                year,
                &format,
            )
            .await?;
        }

        Commands::Schedule { format } => {
            schedule::run(&format).await?;
        }

        Commands::Trending { limit, format } => {
            trending::run(limit, &format).await?;
        }
    }

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("aniplan=debug")
    } else {
        EnvFilter::new("aniplan=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}
