//! Media-related data models.

use serde::{Deserialize, Serialize};

/// Airing status reported by AniList.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaStatus {
    Finished,
    Releasing,
    NotYetReleased,
    Cancelled,
    Hiatus,
    /// Any status value this version does not know about.
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for MediaStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaStatus::Finished => write!(f, "finished"),
            MediaStatus::Releasing => write!(f, "releasing"),
            MediaStatus::NotYetReleased => write!(f, "not yet released"),
            MediaStatus::Cancelled => write!(f, "cancelled"),
            MediaStatus::Hiatus => write!(f, "hiatus"),
            MediaStatus::Unknown => write!(f, "unknown"),
        }
    }
}

/// Title in the languages AniList carries for a media entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MediaTitle {
    /// English title, when licensed.
    pub english: Option<String>,
    /// Romanized Japanese title.
    pub romaji: Option<String>,
}

impl MediaTitle {
    /// Resolve a display title: english, then romaji, then a literal default.
    /// Empty strings fall through the chain like missing values.
    pub fn preferred(&self) -> &str {
        self.english
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.romaji.as_deref().filter(|s| !s.is_empty()))
            .unwrap_or("Untitled")
    }
}

/// One watchable title from the AniList catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    /// AniList media ID.
    pub id: u64,
    /// Display titles.
    pub title: MediaTitle,
    /// Total episode count; absent for ongoing or unannounced titles.
    pub episodes: Option<u32>,
    /// Number of the next episode to air, used as a total estimate
    /// when the episode count is unknown.
    pub next_episode: Option<u32>,
    /// Epoch seconds of the next airing, for countdown display.
    pub next_airing_at: Option<i64>,
    /// Average user score (0-100).
    pub average_score: Option<u32>,
    /// Popularity (list count).
    pub popularity: Option<u32>,
    /// Airing status.
    pub status: MediaStatus,
    /// Genre tags.
    #[serde(default)]
    pub genres: Vec<String>,
    /// Cover image URL, passed through unmodified.
    pub cover_url: Option<String>,
    /// Synopsis, when the query selects it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Denormalized media summary embedded in an airing event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaSummary {
    /// Display titles.
    pub title: MediaTitle,
    /// Cover image URL.
    pub cover_url: Option<String>,
    /// Total episode count, when known.
    pub episodes: Option<u32>,
    /// Genre tags.
    #[serde(default)]
    pub genres: Vec<String>,
    /// Average user score (0-100).
    pub average_score: Option<u32>,
}

/// One scheduled episode airing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiringEvent {
    /// AniList media ID.
    pub media_id: u64,
    /// Episode number airing at this time.
    pub episode: u32,
    /// Airing time as epoch seconds (UTC).
    pub airing_at: i64,
    /// Seconds between query time and airing.
    pub time_until_airing: i64,
    /// Summary of the media this episode belongs to.
    pub media: MediaSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preferred_title_prefers_english() {
        let title = MediaTitle {
            english: Some("Frieren".to_string()),
            romaji: Some("Sousou no Frieren".to_string()),
        };
        assert_eq!(title.preferred(), "Frieren");
    }

    #[test]
    fn preferred_title_falls_back_to_romaji() {
        let title = MediaTitle {
            english: None,
            romaji: Some("Sousou no Frieren".to_string()),
        };
        assert_eq!(title.preferred(), "Sousou no Frieren");
    }

    #[test]
    fn preferred_title_defaults_when_both_missing() {
        assert_eq!(MediaTitle::default().preferred(), "Untitled");
    }

    #[test]
    fn preferred_title_skips_empty_strings() {
        let title = MediaTitle {
            english: Some(String::new()),
            romaji: Some("Sousou no Frieren".to_string()),
        };
        assert_eq!(title.preferred(), "Sousou no Frieren");

        let blank = MediaTitle {
            english: Some(String::new()),
            romaji: Some(String::new()),
        };
        assert_eq!(blank.preferred(), "Untitled");
    }

    #[test]
    fn unknown_status_value_deserializes() {
        let status: MediaStatus = serde_json::from_str("\"SOME_NEW_STATUS\"").unwrap();
        assert_eq!(status, MediaStatus::Unknown);
    }
}
