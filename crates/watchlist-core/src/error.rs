use thiserror::Error;
use watchlist_sources::SourceError;

/// Outcomes of `WatchlistStore::add` that stop an insertion.
/// `AlreadyExists` is user-facing information rather than a real failure;
/// callers are expected to render it as a notice, not an error exit.
#[derive(Debug, Error)]
pub enum AddError {
    #[error("\"{title}\" is already in the watchlist")]
    AlreadyExists { id: u64, title: String },

    #[error("failed to fetch movie {id}: {source}")]
    FetchFailed {
        id: u64,
        #[source]
        source: SourceError,
    },
}
