//! Anime season helpers and countdown formatting.

use chrono::{DateTime, Datelike, Utc};

/// Broadcast season as AniList defines it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Season {
    /// Season a given month (1-12) falls in.
    pub fn for_month(month: u32) -> Self {
        match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Fall,
            _ => Season::Winter,
        }
    }

    /// Season of the given instant, by UTC month.
    pub fn current(now: DateTime<Utc>) -> Self {
        Season::for_month(now.month())
    }

    /// Name used in AniList query variables.
    pub fn api_name(&self) -> &'static str {
        match self {
            Season::Winter => "WINTER",
            Season::Spring => "SPRING",
            Season::Summer => "SUMMER",
            Season::Fall => "FALL",
        }
    }
}

impl std::str::FromStr for Season {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "winter" => Ok(Season::Winter),
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "fall" | "autumn" => Ok(Season::Fall),
            other => Err(format!(
                "unknown season '{}', expected winter, spring, summer or fall",
                other
            )),
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Season::Winter => "winter",
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
        };
        write!(f, "{}", name)
    }
}

/// Format a seconds-until value as a short countdown like "2d 5h" or "41m".
pub fn format_countdown(seconds: i64) -> String {
    if seconds <= 0 {
        return "airing now".to_string();
    }

    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;
    let minutes = (seconds % 3_600) / 60;

    if days > 0 {
        format!("{}d {}h", days, hours)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_to_season_mapping() {
        assert_eq!(Season::for_month(1), Season::Winter);
        assert_eq!(Season::for_month(3), Season::Spring);
        assert_eq!(Season::for_month(8), Season::Summer);
        assert_eq!(Season::for_month(11), Season::Fall);
        assert_eq!(Season::for_month(12), Season::Winter);
    }

    #[test]
    fn season_parses_case_insensitively() {
        assert_eq!("Spring".parse::<Season>().unwrap(), Season::Spring);
        assert_eq!("autumn".parse::<Season>().unwrap(), Season::Fall);
        assert!("monsoon".parse::<Season>().is_err());
    }

    #[test]
    fn countdown_formats() {
        assert_eq!(format_countdown(-5), "airing now");
        assert_eq!(format_countdown(30), "1m");
        assert_eq!(format_countdown(3_720), "1h 2m");
        assert_eq!(format_countdown(90_000), "1d 1h");
    }
}
