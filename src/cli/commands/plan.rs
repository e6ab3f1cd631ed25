//! Plan command: fetch season candidates and build the weekly plan.

use crate::core::planner::build_plan;
use crate::models::config::load_config;
use crate::models::plan::{DayPlan, Focus, PlanOptions};
use crate::models::report::{PlanFilters, PlanReport};
use crate::services::anilist::AniListClient;
use crate::utils::season::Season;
use crate::{Error, Result};
use chrono::{Datelike, Utc};
use colored::Colorize;

pub async fn run(
    episodes_per_day: u32,
    focus: &str,
    include_completed: bool,
    genres: &[String],
    season: Option<&str>,
    year: Option<i32>,
    format: &str,
) -> Result<()> {
    let config = load_config();
    let client = AniListClient::new(config.anilist)?;

    let now = Utc::now();
    let season = match season {
        Some(name) => name.parse::<Season>().map_err(Error::other)?,
        None => Season::current(now),
    };
    let year = year.unwrap_or_else(|| now.year());

    let options = PlanOptions {
        episodes_per_day,
        focus: Focus::parse(focus),
        include_completed,
    };

    tracing::info!(
        "Building plan for {} {} (quota {}, focus {})",
        season,
        year,
        options.episodes_per_day,
        options.focus
    );

    let catalog = client.season_candidates(season, year, genres).await?;
    tracing::debug!("Catalog query returned {} candidates", catalog.len());

    let plan = build_plan(&catalog, &options)?;

    if format == "json" {
        let report = PlanReport {
            generated_at: Utc::now().timestamp_millis(),
            source_total: catalog.len(),
            filters: PlanFilters {
                preferred_genres: genres.to_vec(),
                episodes_per_day: options.episodes_per_day,
                focus: options.focus,
                include_completed: options.include_completed,
            },
            plan,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_plan(&plan, catalog.len(), season, year);
    Ok(())
}

fn print_plan(plan: &[DayPlan], source_total: usize, season: Season, year: i32) {
    println!(
        "{}",
        format!("Weekly plan for {} {}", season, year).bold()
    );

    if plan.is_empty() {
        println!("No titles to schedule.");
        return;
    }

    for day in plan {
        println!();
        println!("{}", day.day.name().cyan().bold());
        for entry in &day.entries {
            let score = entry
                .average_score
                .map(|s| format!("  score {}", s))
                .unwrap_or_default();
            println!(
                "  {} x{}{}",
                entry.title.bold(),
                entry.episodes,
                score.dimmed()
            );
            if !entry.genres.is_empty() {
                println!("    {}", entry.genres.join(", ").dimmed());
            }
        }
    }

    let scheduled: usize = plan.iter().map(|day| day.entries.len()).sum();
    println!();
    println!("{} of {} candidates scheduled", scheduled, source_total);
}
