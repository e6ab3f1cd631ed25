//! Command line argument definitions.

use clap::{Parser, Subcommand};

/// Aniplan - Plan your weekly anime viewing with AniList data
#[derive(Parser, Debug)]
#[command(name = "aniplan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a weekly viewing plan from the season's catalog
    Plan {
        /// Episode quota for each day of the week
        #[arg(short, long, default_value_t = 2)]
        episodes_per_day: u32,

        /// Ranking key: score or popularity
        #[arg(short, long, default_value = "score")]
        focus: String,

        /// Keep titles that have already finished airing
        #[arg(long)]
        include_completed: bool,

        /// Only consider titles in this genre (repeatable)
        #[arg(short, long = "genre", value_name = "GENRE")]
        genres: Vec<String>,

        /// Season to pull candidates from: winter, spring, summer, fall
        /// (default: the current season)
        #[arg(short, long)]
        season: Option<String>,

        /// Year the season belongs to (default: the current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Show episodes airing over the next seven days, grouped by date
    Schedule {
        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// List currently trending titles
    Trending {
        /// Number of titles to fetch
        #[arg(short, long, default_value_t = 18)]
        limit: u32,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },
}
