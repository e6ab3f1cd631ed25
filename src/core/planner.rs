//! Weekly plan builder.
//!
//! Turns an unordered catalog of candidate titles into a day-bucketed viewing
//! plan under a per-day episode quota:
//! 1. Drop finished titles unless asked to keep them
//! 2. Rank the rest by the chosen focus key
//! 3. Walk the ranked list once, placing each title into the first weekday
//!    with quota left

use crate::models::media::{MediaItem, MediaStatus};
use crate::models::plan::{DayPlan, Focus, PlanEntry, PlanOptions, Weekday};
use crate::{Error, Result};

/// Assumed total when AniList reports neither an episode count nor a next
/// episode number.
const DEFAULT_EPISODE_TOTAL: u32 = 12;

/// Mutable per-day state threaded through the placement pass.
struct DaySlot {
    day: Weekday,
    entries: Vec<PlanEntry>,
    quota: u32,
}

/// Build a weekly viewing plan from a catalog of candidates.
///
/// Placement is a single greedy pass: each title lands on at most one day,
/// the first one (Monday to Sunday) with quota remaining. Titles that find
/// no open day are dropped silently. Days that received nothing are omitted
/// from the result.
pub fn build_plan(catalog: &[MediaItem], options: &PlanOptions) -> Result<Vec<DayPlan>> {
    if options.episodes_per_day == 0 {
        return Err(Error::InvalidEpisodesPerDay(options.episodes_per_day));
    }

    let mut ranked: Vec<&MediaItem> = catalog
        .iter()
        .filter(|media| options.include_completed || media.status != MediaStatus::Finished)
        .collect();

    // sort_by is stable, so ties keep their catalog order. Missing values
    // rank as 0; the stored Option stays untouched for display.
    match options.focus {
        Focus::Popularity => {
            ranked.sort_by(|a, b| b.popularity.unwrap_or(0).cmp(&a.popularity.unwrap_or(0)))
        }
        Focus::Score => {
            ranked.sort_by(|a, b| b.average_score.unwrap_or(0).cmp(&a.average_score.unwrap_or(0)))
        }
    }

    let mut days: Vec<DaySlot> = Weekday::ORDER
        .iter()
        .map(|&day| DaySlot {
            day,
            entries: Vec::new(),
            quota: options.episodes_per_day,
        })
        .collect();

    for media in ranked {
        let total = media
            .episodes
            .or(media.next_episode)
            .unwrap_or(DEFAULT_EPISODE_TOTAL);
        // Per-day fair share assuming the title spreads evenly over a week.
        let fair_share = total.div_ceil(7).max(1);

        for slot in days.iter_mut() {
            if slot.quota == 0 {
                continue;
            }

            let assigned = slot.quota.min(fair_share);
            slot.entries.push(PlanEntry {
                title: media.title.preferred().to_string(),
                media_id: media.id,
                episodes: assigned,
                cover: media.cover_url.clone(),
                genres: media.genres.clone(),
                average_score: media.average_score,
                status: media.status,
            });
            slot.quota -= assigned;
            break;
        }
    }

    Ok(days
        .into_iter()
        .filter(|slot| !slot.entries.is_empty())
        .map(|slot| DayPlan {
            day: slot.day,
            entries: slot.entries,
        })
        .collect())
}
