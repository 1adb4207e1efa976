use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;
use watchlist_models::{Genre, MovieDetails, MoviePage, MovieSummary};

pub const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TmdbGenre {
    id: u64,
    name: String,
}

/// Raw details-by-id response. Everything beyond id/title is optional:
/// TMDB omits fields freely and reports empty strings for unknown dates.
#[derive(Debug, Deserialize)]
struct TmdbMovieDetails {
    id: u64,
    title: String,
    #[serde(default)]
    original_title: Option<String>,
    #[serde(default)]
    poster_path: Option<String>,
    #[serde(default)]
    backdrop_path: Option<String>,
    #[serde(default)]
    overview: Option<String>,
    #[serde(default)]
    release_date: Option<String>,
    #[serde(default)]
    vote_average: Option<f32>,
    #[serde(default)]
    vote_count: Option<u64>,
    #[serde(default)]
    popularity: Option<f32>,
    #[serde(default)]
    genres: Vec<TmdbGenre>,
    #[serde(default)]
    runtime: Option<u32>,
    #[serde(default)]
    original_language: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TmdbSearchMovie {
    id: u64,
    title: String,
    #[serde(default)]
    original_title: Option<String>,
    #[serde(default)]
    overview: Option<String>,
    #[serde(default)]
    poster_path: Option<String>,
    #[serde(default)]
    release_date: Option<String>,
    #[serde(default)]
    vote_average: Option<f32>,
    #[serde(default)]
    vote_count: Option<u64>,
    #[serde(default)]
    popularity: Option<f32>,
    #[serde(default)]
    genre_ids: Vec<u64>,
    #[serde(default)]
    original_language: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TmdbPageResponse {
    #[serde(default = "default_page")]
    page: u32,
    #[serde(default)]
    total_pages: u32,
    #[serde(default)]
    total_results: u64,
    #[serde(default)]
    results: Vec<TmdbSearchMovie>,
}

fn default_page() -> u32 {
    1
}

/// Treat TMDB's empty-string dates and paths as absent.
fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|v| !v.is_empty())
}

fn map_details(raw: TmdbMovieDetails) -> MovieDetails {
    MovieDetails {
        id: raw.id,
        original_title: raw.original_title.unwrap_or_else(|| raw.title.clone()),
        title: raw.title,
        poster_path: non_empty(raw.poster_path),
        backdrop_path: non_empty(raw.backdrop_path),
        overview: raw.overview.unwrap_or_default(),
        release_date: non_empty(raw.release_date),
        vote_average: raw.vote_average.unwrap_or(0.0),
        vote_count: raw.vote_count.unwrap_or(0),
        popularity: raw.popularity.unwrap_or(0.0),
        genres: raw
            .genres
            .into_iter()
            .map(|g| Genre { id: g.id, name: g.name })
            .collect(),
        runtime: raw.runtime,
        original_language: raw.original_language.unwrap_or_else(|| "unknown".to_string()),
    }
}

fn map_summary(raw: TmdbSearchMovie) -> MovieSummary {
    MovieSummary {
        id: raw.id,
        original_title: raw.original_title.unwrap_or_else(|| raw.title.clone()),
        title: raw.title,
        overview: raw.overview.unwrap_or_default(),
        poster_path: non_empty(raw.poster_path),
        release_date: non_empty(raw.release_date),
        vote_average: raw.vote_average.unwrap_or(0.0),
        vote_count: raw.vote_count.unwrap_or(0),
        popularity: raw.popularity.unwrap_or(0.0),
        genre_ids: raw.genre_ids,
        original_language: raw.original_language.unwrap_or_else(|| "unknown".to_string()),
    }
}

fn map_page(raw: TmdbPageResponse) -> MoviePage {
    MoviePage {
        page: raw.page,
        total_pages: raw.total_pages,
        total_results: raw.total_results,
        results: raw.results.into_iter().map(map_summary).collect(),
    }
}

/// Fetch one movie's full details by TMDB id
pub async fn get_movie_details(client: &Client, api_key: &str, id: u64) -> Result<MovieDetails> {
    let url = format!("{}/movie/{}?api_key={}", TMDB_BASE_URL, id, api_key);
    debug!(movie_id = id, "Fetching movie details");

    let response = client
        .get(&url)
        .header("Accept", "application/json")
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        return Err(anyhow!("Failed to fetch movie {}: {} - {}", id, status, error_text));
    }

    let raw: TmdbMovieDetails = response.json().await?;
    Ok(map_details(raw))
}

/// Title search, one page of results
pub async fn search_movies(
    client: &Client,
    api_key: &str,
    query: &str,
    page: u32,
) -> Result<MoviePage> {
    let url = format!(
        "{}/search/movie?api_key={}&query={}&page={}",
        TMDB_BASE_URL,
        api_key,
        urlencoding::encode(query),
        page
    );
    debug!(query = %query, page, "Searching movies");

    let response = client
        .get(&url)
        .header("Accept", "application/json")
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        return Err(anyhow!("Search failed: {} - {}", status, error_text));
    }

    let raw: TmdbPageResponse = response.json().await?;
    Ok(map_page(raw))
}

/// Current popular movies, one page
pub async fn get_popular_movies(client: &Client, api_key: &str, page: u32) -> Result<MoviePage> {
    let url = format!("{}/movie/popular?api_key={}&page={}", TMDB_BASE_URL, api_key, page);
    debug!(page, "Fetching popular movies");

    let response = client
        .get(&url)
        .header("Accept", "application/json")
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        return Err(anyhow!("Failed to fetch popular movies: {} - {}", status, error_text));
    }

    let raw: TmdbPageResponse = response.json().await?;
    Ok(map_page(raw))
}
