use serde::{Deserialize, Serialize};

use crate::entry::Genre;

/// Full movie record as returned by a details-by-id lookup.
/// Defensive defaults (missing ratings -> 0.0) are applied by the source
/// before these are constructed; only runtime stays optional because the
/// watchlist applies its own default at insertion time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieDetails {
    pub id: u64,
    pub title: String,
    pub original_title: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub overview: String,
    pub release_date: Option<String>,
    pub vote_average: f32,
    pub vote_count: u64,
    pub popularity: f32,
    pub genres: Vec<Genre>,
    pub runtime: Option<u32>,
    pub original_language: String,
}

/// One search/popular result. Search responses carry genre ids only;
/// full genre objects require a details lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieSummary {
    pub id: u64,
    pub title: String,
    pub original_title: String,
    pub overview: String,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub vote_average: f32,
    pub vote_count: u64,
    pub popularity: f32,
    pub genre_ids: Vec<u64>,
    pub original_language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoviePage {
    pub page: u32,
    pub total_pages: u32,
    pub total_results: u64,
    pub results: Vec<MovieSummary>,
}

/// Extract the 4-digit year from an ISO `YYYY-MM-DD` date string.
pub fn release_year(release_date: Option<&str>) -> Option<&str> {
    release_date
        .map(str::trim)
        .filter(|d| d.len() >= 4)
        .and_then(|d| d.get(..4))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_year() {
        assert_eq!(release_year(Some("1994-09-23")), Some("1994"));
        assert_eq!(release_year(Some("2011")), Some("2011"));
        assert_eq!(release_year(Some("")), None);
        assert_eq!(release_year(None), None);
    }
}
