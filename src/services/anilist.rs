//! AniList GraphQL API client.

use crate::models::config::AniListConfig;
use crate::models::media::{AiringEvent, MediaItem, MediaStatus, MediaSummary, MediaTitle};
use crate::utils::season::Season;
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

/// Query for season candidates feeding the weekly planner.
const SEASON_CANDIDATES_QUERY: &str = r#"
query SeasonCandidates($season: MediaSeason!, $seasonYear: Int!, $genres: [String], $perPage: Int!) {
  Page(perPage: $perPage) {
    media(
      type: ANIME,
      season: $season,
      seasonYear: $seasonYear,
      sort: [POPULARITY_DESC, SCORE_DESC],
      genre_in: $genres,
      status_not_in: [CANCELLED, HIATUS],
      format_not: MUSIC
    ) {
      id
      status
      title {
        romaji
        english
      }
      coverImage {
        medium
      }
      episodes
      averageScore
      popularity
      genres
      nextAiringEpisode {
        airingAt
        episode
      }
    }
  }
}
"#;

/// Query for episodes airing inside a time window.
const AIRING_WINDOW_QUERY: &str = r#"
query Airing($from: Int!, $until: Int!, $perPage: Int!) {
  Page(perPage: $perPage) {
    airingSchedules(airingAt_greater: $from, airingAt_lesser: $until, sort: TIME) {
      mediaId
      episode
      airingAt
      timeUntilAiring
      media {
        title {
          romaji
          english
        }
        coverImage {
          medium
        }
        episodes
        genres
        averageScore
      }
    }
  }
}
"#;

/// Query for currently trending titles.
const TRENDING_QUERY: &str = r#"
query Trending($perPage: Int!) {
  Page(perPage: $perPage) {
    media(sort: TRENDING_DESC, type: ANIME, status_not: CANCELLED, format_not: MUSIC) {
      id
      status
      title {
        romaji
        english
      }
      coverImage {
        large
      }
      description(asHtml: false)
      averageScore
      popularity
      genres
      episodes
      nextAiringEpisode {
        airingAt
        episode
      }
    }
  }
}
"#;

/// AniList API client.
pub struct AniListClient {
    config: AniListConfig,
    client: reqwest::Client,
}

/// Top-level GraphQL response.
#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQlError>>,
}

/// One GraphQL-level error.
#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

/// Page wrapper for media queries.
#[derive(Debug, Deserialize)]
struct MediaPageData {
    #[serde(rename = "Page")]
    page: MediaPage,
}

#[derive(Debug, Deserialize)]
struct MediaPage {
    media: Option<Vec<MediaNode>>,
}

/// Page wrapper for the airing schedule query.
#[derive(Debug, Deserialize)]
struct SchedulePageData {
    #[serde(rename = "Page")]
    page: SchedulePage,
}

#[derive(Debug, Deserialize)]
struct SchedulePage {
    #[serde(rename = "airingSchedules")]
    airing_schedules: Option<Vec<ScheduleNode>>,
}

/// Media record as AniList returns it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MediaNode {
    id: u64,
    status: Option<MediaStatus>,
    title: Option<MediaTitle>,
    cover_image: Option<CoverImageNode>,
    episodes: Option<u32>,
    average_score: Option<u32>,
    popularity: Option<u32>,
    genres: Option<Vec<String>>,
    description: Option<String>,
    next_airing_episode: Option<NextAiringNode>,
}

#[derive(Debug, Deserialize)]
struct CoverImageNode {
    medium: Option<String>,
    large: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NextAiringNode {
    airing_at: i64,
    episode: u32,
}

/// Airing schedule record as AniList returns it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScheduleNode {
    media_id: u64,
    episode: u32,
    airing_at: i64,
    time_until_airing: i64,
    media: Option<ScheduleMediaNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScheduleMediaNode {
    title: Option<MediaTitle>,
    cover_image: Option<CoverImageNode>,
    episodes: Option<u32>,
    genres: Option<Vec<String>>,
    average_score: Option<u32>,
}

impl MediaNode {
    fn into_media_item(self) -> MediaItem {
        MediaItem {
            id: self.id,
            title: self.title.unwrap_or_default(),
            episodes: self.episodes,
            next_episode: self.next_airing_episode.as_ref().map(|n| n.episode),
            next_airing_at: self.next_airing_episode.as_ref().map(|n| n.airing_at),
            average_score: self.average_score,
            popularity: self.popularity,
            status: self.status.unwrap_or(MediaStatus::Unknown),
            genres: self.genres.unwrap_or_default(),
            cover_url: self.cover_image.and_then(|c| c.medium.or(c.large)),
            description: self.description,
        }
    }
}

impl ScheduleNode {
    fn into_airing_event(self) -> AiringEvent {
        let media = self.media.map(|m| MediaSummary {
            title: m.title.unwrap_or_default(),
            cover_url: m.cover_image.and_then(|c| c.medium.or(c.large)),
            episodes: m.episodes,
            genres: m.genres.unwrap_or_default(),
            average_score: m.average_score,
        });

        AiringEvent {
            media_id: self.media_id,
            episode: self.episode,
            airing_at: self.airing_at,
            time_until_airing: self.time_until_airing,
            media: media.unwrap_or(MediaSummary {
                title: MediaTitle::default(),
                cover_url: None,
                episodes: None,
                genres: Vec::new(),
                average_score: None,
            }),
        }
    }
}

impl AniListClient {
    /// Create a new AniList client.
    pub fn new(config: AniListConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self { config, client })
    }

    /// Fetch candidate titles for a season, optionally filtered by genre.
    pub async fn season_candidates(
        &self,
        season: Season,
        year: i32,
        genres: &[String],
    ) -> Result<Vec<MediaItem>> {
        let genre_filter = if genres.is_empty() {
            Value::Null
        } else {
            json!(genres)
        };

        let variables = json!({
            "season": season.api_name(),
            "seasonYear": year,
            "genres": genre_filter,
            "perPage": self.config.catalog_per_page,
        });

        tracing::debug!("Fetching {} {} candidates", season, year);
        let data: MediaPageData = self.execute(SEASON_CANDIDATES_QUERY, variables).await?;

        Ok(data
            .page
            .media
            .unwrap_or_default()
            .into_iter()
            .map(MediaNode::into_media_item)
            .collect())
    }

    /// Fetch episodes airing with epoch timestamps in `[from, until]`.
    pub async fn airing_window(&self, from: i64, until: i64) -> Result<Vec<AiringEvent>> {
        let variables = json!({
            "from": from,
            "until": until,
            "perPage": self.config.schedule_per_page,
        });

        tracing::debug!("Fetching airing schedule between {} and {}", from, until);
        let data: SchedulePageData = self.execute(AIRING_WINDOW_QUERY, variables).await?;

        Ok(data
            .page
            .airing_schedules
            .unwrap_or_default()
            .into_iter()
            .map(ScheduleNode::into_airing_event)
            .collect())
    }

    /// Fetch currently trending titles.
    pub async fn trending(&self, limit: u32) -> Result<Vec<MediaItem>> {
        let variables = json!({ "perPage": limit });

        tracing::debug!("Fetching {} trending titles", limit);
        let data: MediaPageData = self.execute(TRENDING_QUERY, variables).await?;

        Ok(data
            .page
            .media
            .unwrap_or_default()
            .into_iter()
            .map(MediaNode::into_media_item)
            .collect())
    }

    /// POST a query and unwrap the GraphQL envelope.
    async fn execute<T: DeserializeOwned>(&self, query: &str, variables: Value) -> Result<T> {
        let mut request = self
            .client
            .post(&self.config.api_url)
            .header("Accept", "application/json")
            .json(&json!({ "query": query, "variables": variables }));

        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::AniListStatus {
                status: status.as_u16(),
                body,
            });
        }

        let payload: GraphQlResponse<T> = response.json().await?;
        if let Some(errors) = payload.errors {
            if !errors.is_empty() {
                let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
                return Err(Error::AniListQuery(messages.join("; ")));
            }
        }

        payload.data.ok_or(Error::AniListEmptyResponse)
    }
}
