//! Trending command: list what is currently trending on AniList.

use crate::models::config::load_config;
use crate::models::report::TrendingReport;
use crate::services::anilist::AniListClient;
use crate::utils::season::format_countdown;
use crate::Result;
use chrono::Utc;
use colored::Colorize;

pub async fn run(limit: u32, format: &str) -> Result<()> {
    let config = load_config();
    let client = AniListClient::new(config.anilist)?;

    let items = client.trending(limit).await?;
    tracing::debug!("Trending query returned {} titles", items.len());

    if format == "json" {
        let report = TrendingReport {
            generated_at: Utc::now().timestamp_millis(),
            items,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", "Trending now".bold());
    if items.is_empty() {
        println!("Nothing trending right now.");
        return Ok(());
    }

    let now = Utc::now().timestamp();
    for (rank, item) in items.iter().enumerate() {
        println!();
        println!("{:>2}. {}", rank + 1, item.title.preferred().bold());

        let mut details: Vec<String> = Vec::new();
        if let Some(score) = item.average_score {
            details.push(format!("score {}", score));
        }
        if let Some(popularity) = item.popularity {
            details.push(format!("{} lists", popularity));
        }
        if let Some(episodes) = item.episodes {
            details.push(format!("{} episodes", episodes));
        }
        if !details.is_empty() {
            println!("    {}", details.join("  ").dimmed());
        }
        if !item.genres.is_empty() {
            println!("    {}", item.genres.join(", ").dimmed());
        }
        if let (Some(episode), Some(airing_at)) = (item.next_episode, item.next_airing_at) {
            let wait = airing_at - now;
            if wait > 0 {
                println!(
                    "    {}",
                    format!("ep {} in {}", episode, format_countdown(wait)).yellow()
                );
            }
        }
    }

    Ok(())
}
