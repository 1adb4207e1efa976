pub mod assistant;
pub mod error;
pub mod tmdb;
pub mod traits;

pub use assistant::AssistantClient;
pub use error::SourceError;
pub use tmdb::TmdbClient;
pub use traits::MovieMetadataSource;
