pub mod entry;
pub mod export;
pub mod genres;
pub mod movie;
pub mod stats;

pub use entry::{Genre, WatchlistEntry, DEFAULT_RUNTIME_MINUTES};
pub use export::ExportRow;
pub use genres::{genre_name, genre_names};
pub use movie::{release_year, MovieDetails, MoviePage, MovieSummary};
pub use stats::WatchlistStats;
