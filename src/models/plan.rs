//! Weekly plan data model.

use super::media::MediaStatus;
use serde::{Deserialize, Serialize};

/// Ranking key controlling sort order before placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Focus {
    #[default]
    Score,
    Popularity,
}

impl Focus {
    /// Parse a focus name; anything other than "popularity" ranks by score.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("popularity") {
            Focus::Popularity
        } else {
            Focus::Score
        }
    }
}

impl std::fmt::Display for Focus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Focus::Score => write!(f, "score"),
            Focus::Popularity => write!(f, "popularity"),
        }
    }
}

/// Options for building a weekly plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanOptions {
    /// Episode quota applied independently to every day.
    pub episodes_per_day: u32,
    /// Ranking key.
    pub focus: Focus,
    /// Whether finished titles stay in the candidate set.
    pub include_completed: bool,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            episodes_per_day: 2,
            focus: Focus::Score,
            include_completed: false,
        }
    }
}

/// Day of the week a plan entry lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Fixed Monday-to-Sunday placement order.
    pub const ORDER: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One title placed on a day.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanEntry {
    /// Resolved display title.
    pub title: String,
    /// AniList media ID.
    pub media_id: u64,
    /// Episodes assigned to this day.
    pub episodes: u32,
    /// Cover image URL.
    pub cover: Option<String>,
    /// Genre tags.
    pub genres: Vec<String>,
    /// Average user score (0-100), as reported by AniList.
    pub average_score: Option<u32>,
    /// Airing status of the title.
    pub status: MediaStatus,
}

/// All entries assigned to one day of the week.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPlan {
    /// Weekday label.
    pub day: Weekday,
    /// Entries in placement order.
    pub entries: Vec<PlanEntry>,
}
