use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use watchlist_models::{MovieDetails, MoviePage};

use crate::error::SourceError;
use crate::tmdb::api;
use crate::traits::MovieMetadataSource;

/// A hung request must not leave the caller waiting forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub fn create_tmdb_client() -> Client {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .unwrap_or_else(|_| Client::new())
}

#[derive(Clone)]
pub struct TmdbClient {
    client: Arc<Client>,
    api_key: String,
}

impl TmdbClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Arc::new(create_tmdb_client()),
            api_key,
        }
    }
}

#[async_trait]
impl MovieMetadataSource for TmdbClient {
    async fn movie_details(&self, id: u64) -> Result<MovieDetails, SourceError> {
        api::get_movie_details(&self.client, &self.api_key, id)
            .await
            .map_err(|e| SourceError::new(format!("{}", e)))
    }

    async fn search_movies(&self, query: &str, page: u32) -> Result<MoviePage, SourceError> {
        api::search_movies(&self.client, &self.api_key, query, page)
            .await
            .map_err(|e| SourceError::new(format!("{}", e)))
    }

    async fn popular_movies(&self, page: u32) -> Result<MoviePage, SourceError> {
        api::get_popular_movies(&self.client, &self.api_key, page)
            .await
            .map_err(|e| SourceError::new(format!("{}", e)))
    }
}
