use std::cmp::Ordering;

use watchlist_models::WatchlistEntry;

/// Minimum vote average for the highly-rated view.
pub const HIGHLY_RATED_THRESHOLD: f32 = 7.0;

/// Derived orderings of the stored collection. Views never mutate stored
/// order; `All` is the insertion order itself (most recently added first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WatchlistFilter {
    #[default]
    All,
    Recent,
    HighlyRated,
    ByGenre,
}

pub fn apply(filter: WatchlistFilter, entries: &[WatchlistEntry]) -> Vec<&WatchlistEntry> {
    let mut view: Vec<&WatchlistEntry> = entries.iter().collect();

    match filter {
        WatchlistFilter::All => {}
        WatchlistFilter::Recent => {
            view.sort_by(|a, b| b.added_at.cmp(&a.added_at));
        }
        WatchlistFilter::HighlyRated => {
            view.retain(|e| e.vote_average >= HIGHLY_RATED_THRESHOLD);
            view.sort_by(|a, b| {
                b.vote_average
                    .partial_cmp(&a.vote_average)
                    .unwrap_or(Ordering::Equal)
            });
        }
        WatchlistFilter::ByGenre => {
            // Case-aware lexicographic on the first genre name; genre-less
            // entries carry the literal key "Unknown".
            view.sort_by(|a, b| a.first_genre_name().cmp(b.first_genre_name()));
        }
    }

    view
}
