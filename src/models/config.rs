//! Configuration model.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// AniList configuration.
    pub anilist: AniListConfig,
}

/// AniList API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AniListConfig {
    /// GraphQL endpoint.
    pub api_url: String,
    /// Optional bearer token for authenticated queries.
    pub token: Option<String>,
    /// Page size for catalog queries.
    pub catalog_per_page: u32,
    /// Page size for the airing schedule query.
    pub schedule_per_page: u32,
    /// Request timeout in seconds.
    pub timeout: u64,
}

impl Default for AniListConfig {
    fn default() -> Self {
        Self {
            api_url: "https://graphql.anilist.co".to_string(),
            token: std::env::var("ANILIST_TOKEN").ok(),
            catalog_per_page: 40,
            schedule_per_page: 50,
            timeout: 30,
        }
    }
}

/// Get the configuration directory path.
fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("aniplan")
}

/// Load configuration from file.
pub fn load_config() -> Config {
    let config_path = dirs_config_path().join("config.toml");

    if config_path.exists() {
        if let Ok(content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str(&content) {
                return config;
            }
        }
    }

    Config::default()
}
