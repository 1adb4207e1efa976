use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::movie::MovieDetails;

/// Runtime assumed for movies whose metadata omits a runtime (or reports 0).
pub const DEFAULT_RUNTIME_MINUTES: u32 = 120;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// One saved movie in the watchlist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchlistEntry {
    pub id: u64,
    pub title: String,
    pub original_title: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub overview: String,
    pub release_date: Option<String>, // YYYY-MM-DD when present
    #[serde(default)]
    pub vote_average: f32,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub popularity: f32,
    #[serde(default)]
    pub genres: Vec<Genre>,
    pub runtime_minutes: u32,
    pub original_language: String,
    pub added_at: DateTime<Utc>,
    #[serde(default)]
    pub watched: bool,
}

impl WatchlistEntry {
    /// Build an entry from fetched movie details, applying defaults.
    /// `added_at` is fixed at insertion time and never changes afterwards.
    pub fn from_details(details: MovieDetails, added_at: DateTime<Utc>) -> Self {
        let runtime_minutes = details
            .runtime
            .filter(|&m| m > 0)
            .unwrap_or(DEFAULT_RUNTIME_MINUTES);

        Self {
            id: details.id,
            title: details.title,
            original_title: details.original_title,
            poster_path: details.poster_path,
            backdrop_path: details.backdrop_path,
            overview: details.overview,
            release_date: details.release_date,
            vote_average: details.vote_average,
            vote_count: details.vote_count,
            popularity: details.popularity,
            genres: details.genres,
            runtime_minutes,
            original_language: details.original_language,
            added_at,
            watched: false,
        }
    }

    /// Name of the first genre, or "Unknown" for a genre-less entry.
    /// Genre-less entries sort under the literal string "Unknown".
    pub fn first_genre_name(&self) -> &str {
        self.genres.first().map(|g| g.name.as_str()).unwrap_or("Unknown")
    }

    /// Release year as a 4-digit string slice, if the date is present.
    pub fn release_year(&self) -> Option<&str> {
        crate::movie::release_year(self.release_date.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn create_details(runtime: Option<u32>) -> MovieDetails {
        MovieDetails {
            id: 603,
            title: "The Matrix".to_string(),
            original_title: "The Matrix".to_string(),
            poster_path: None,
            backdrop_path: None,
            overview: String::new(),
            release_date: Some("1999-03-30".to_string()),
            vote_average: 8.2,
            vote_count: 24000,
            popularity: 85.5,
            genres: vec![],
            runtime,
            original_language: "en".to_string(),
        }
    }

    #[test]
    fn test_from_details_defaults_runtime() {
        let now = Utc::now();
        assert_eq!(
            WatchlistEntry::from_details(create_details(None), now).runtime_minutes,
            DEFAULT_RUNTIME_MINUTES
        );
        assert_eq!(
            WatchlistEntry::from_details(create_details(Some(0)), now).runtime_minutes,
            DEFAULT_RUNTIME_MINUTES
        );
        assert_eq!(
            WatchlistEntry::from_details(create_details(Some(136)), now).runtime_minutes,
            136
        );
    }

    #[test]
    fn test_from_details_starts_unwatched() {
        let now = Utc::now();
        let entry = WatchlistEntry::from_details(create_details(Some(136)), now);
        assert!(!entry.watched);
        assert_eq!(entry.added_at, now);
    }

    #[test]
    fn test_first_genre_name_unknown_when_empty() {
        let now = Utc::now();
        let mut entry = WatchlistEntry::from_details(create_details(None), now);
        assert_eq!(entry.first_genre_name(), "Unknown");

        entry.genres.push(Genre { id: 18, name: "Drama".to_string() });
        assert_eq!(entry.first_genre_name(), "Drama");
    }
}
