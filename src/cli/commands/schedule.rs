//! Schedule command: show the next seven days of airings grouped by date.

use crate::core::schedule::group_by_day;
use crate::models::config::load_config;
use crate::models::media::AiringEvent;
use crate::models::report::ScheduleReport;
use crate::services::anilist::AniListClient;
use crate::utils::season::format_countdown;
use crate::Result;
use chrono::{DateTime, Utc};
use colored::Colorize;
use indexmap::IndexMap;

const DAY_SECONDS: i64 = 86_400;

pub async fn run(format: &str) -> Result<()> {
    let config = load_config();
    let client = AniListClient::new(config.anilist)?;

    let now = Utc::now().timestamp();
    let until = now + 7 * DAY_SECONDS;

    let events = client.airing_window(now, until).await?;
    tracing::debug!("Airing query returned {} events", events.len());

    let grouped = group_by_day(&events)?;

    if format == "json" {
        let report = ScheduleReport {
            generated_at: Utc::now().timestamp_millis(),
            total: events.len(),
            grouped,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_schedule(&grouped, events.len());
    Ok(())
}

fn print_schedule(grouped: &IndexMap<String, Vec<AiringEvent>>, total: usize) {
    println!("{}", "Airing over the next seven days".bold());

    if grouped.is_empty() {
        println!("Nothing airing in this window.");
        return;
    }

    for (date, events) in grouped {
        println!();
        println!("{}", date.cyan().bold());
        for event in events {
            let time = DateTime::from_timestamp(event.airing_at, 0)
                .map(|t| t.format("%H:%M").to_string())
                .unwrap_or_else(|| "--:--".to_string());
            let countdown = if event.time_until_airing <= 0 {
                "airing now".to_string()
            } else {
                format!("in {}", format_countdown(event.time_until_airing))
            };
            println!(
                "  {}  {} ep {} {}",
                time.dimmed(),
                event.media.title.preferred().bold(),
                event.episode,
                format!("({})", countdown).dimmed()
            );
        }
    }

    println!();
    println!("{} episodes in the window", total);
}
