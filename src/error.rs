//! Error types for aniplan.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for aniplan.
#[derive(Error, Debug)]
pub enum Error {
    // Plan input errors
    #[error("episodes per day must be at least 1, got {0}")]
    InvalidEpisodesPerDay(u32),

    // Schedule input errors
    #[error("airing timestamp out of range: {0}")]
    InvalidAiringTimestamp(i64),

    // AniList errors
    #[error("AniList responded with {status}: {body}")]
    AniListStatus { status: u16, body: String },

    #[error("AniList query failed: {0}")]
    AniListQuery(String),

    #[error("AniList response missing expected data")]
    AniListEmptyResponse,

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Generic errors
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a string.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}
