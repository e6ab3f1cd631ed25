//! Airing schedule day grouping.

use crate::models::media::AiringEvent;
use crate::{Error, Result};
use chrono::DateTime;
use indexmap::IndexMap;

/// Group airing events into buckets keyed by UTC calendar date (`YYYY-MM-DD`).
///
/// One pass in input order: bucket keys appear in first-seen order and events
/// keep their relative order within a bucket. No re-sorting happens here, so
/// chronological order inside a day is only as good as the input's.
pub fn group_by_day(events: &[AiringEvent]) -> Result<IndexMap<String, Vec<AiringEvent>>> {
    let mut grouped: IndexMap<String, Vec<AiringEvent>> = IndexMap::new();

    for event in events {
        let airing = DateTime::from_timestamp(event.airing_at, 0)
            .ok_or(Error::InvalidAiringTimestamp(event.airing_at))?;
        let key = airing.format("%Y-%m-%d").to_string();
        grouped.entry(key).or_default().push(event.clone());
    }

    Ok(grouped)
}
