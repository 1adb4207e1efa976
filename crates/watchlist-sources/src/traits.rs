use async_trait::async_trait;
use watchlist_models::{MovieDetails, MoviePage};

/// External movie metadata endpoint. The watchlist store fetches through
/// this seam so its behavior can be exercised without the network.
#[async_trait]
pub trait MovieMetadataSource: Send + Sync {
    /// Full record for one movie id.
    async fn movie_details(&self, id: u64) -> Result<MovieDetails, crate::error::SourceError>;

    /// Title search, paged.
    async fn search_movies(
        &self,
        query: &str,
        page: u32,
    ) -> Result<MoviePage, crate::error::SourceError>;

    /// Current popular movies, paged.
    async fn popular_movies(&self, page: u32) -> Result<MoviePage, crate::error::SourceError>;
}
