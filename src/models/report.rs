//! JSON report envelopes for command output.

use super::media::{AiringEvent, MediaItem};
use super::plan::{DayPlan, Focus};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Filters echoed back with a plan report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanFilters {
    pub preferred_genres: Vec<String>,
    pub episodes_per_day: u32,
    pub focus: Focus,
    pub include_completed: bool,
}

/// Envelope for `aniplan plan --format json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanReport {
    /// Epoch milliseconds when the report was produced.
    pub generated_at: i64,
    pub plan: Vec<DayPlan>,
    /// Number of candidates the catalog query returned.
    pub source_total: usize,
    pub filters: PlanFilters,
}

/// Envelope for `aniplan schedule --format json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleReport {
    pub generated_at: i64,
    /// Events grouped by UTC calendar date, in first-seen date order.
    pub grouped: IndexMap<String, Vec<AiringEvent>>,
    pub total: usize,
}

/// Envelope for `aniplan trending --format json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingReport {
    pub generated_at: i64,
    pub items: Vec<MediaItem>,
}
