use chrono::Utc;
use tracing::{info, warn};
use watchlist_models::{ExportRow, WatchlistEntry, WatchlistStats};
use watchlist_sources::MovieMetadataSource;

use crate::error::AddError;
use crate::storage::WatchlistStorage;
use crate::view::{self, WatchlistFilter};

/// The user's saved-movie collection. Loaded from durable storage once at
/// construction and authoritative in memory for the rest of the session;
/// every mutation re-serializes the whole collection.
///
/// Entry ids are unique: adding a movie that is already present is a
/// side-effect-free no-op reported as `AddError::AlreadyExists`. Stored
/// order is insertion order, most recently added first.
pub struct WatchlistStore {
    entries: Vec<WatchlistEntry>,
    storage: WatchlistStorage,
}

impl WatchlistStore {
    pub fn load(storage: WatchlistStorage) -> Self {
        let entries = storage.load();
        Self { entries, storage }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[WatchlistEntry] {
        &self.entries
    }

    /// Add a movie by id. Fetches details through the metadata source,
    /// applies insertion defaults, prepends, and persists. On failure
    /// nothing is committed.
    pub async fn add(
        &mut self,
        source: &dyn MovieMetadataSource,
        id: u64,
    ) -> Result<WatchlistEntry, AddError> {
        if let Some(existing) = self.entries.iter().find(|e| e.id == id) {
            return Err(AddError::AlreadyExists {
                id,
                title: existing.title.clone(),
            });
        }

        let details = source
            .movie_details(id)
            .await
            .map_err(|e| AddError::FetchFailed { id, source: e })?;

        let entry = WatchlistEntry::from_details(details, Utc::now());
        info!("Adding \"{}\" ({}) to watchlist", entry.title, entry.id);

        self.entries.insert(0, entry.clone());
        self.persist();
        Ok(entry)
    }

    /// Remove the entry with the given id, returning it. `None` (and no
    /// write) when the id is not present.
    pub fn remove(&mut self, id: u64) -> Option<WatchlistEntry> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        let removed = self.entries.remove(index);
        info!("Removed \"{}\" ({}) from watchlist", removed.title, removed.id);
        self.persist();
        Some(removed)
    }

    /// Set the watched flag. An absent id is a no-op, not an error.
    pub fn set_watched(&mut self, id: u64, watched: bool) -> Option<WatchlistEntry> {
        let entry = self.entries.iter_mut().find(|e| e.id == id)?;
        entry.watched = watched;
        let updated = entry.clone();
        self.persist();
        Some(updated)
    }

    /// Empty the collection, returning how many entries were removed.
    /// `None` when there was nothing to clear (no write happens). The
    /// interactive are-you-sure gate belongs to the caller.
    pub fn clear(&mut self) -> Option<usize> {
        if self.entries.is_empty() {
            return None;
        }
        let count = self.entries.len();
        self.entries.clear();
        info!("Cleared {} watchlist entries", count);
        self.persist();
        Some(count)
    }

    /// Derived, read-only view of the collection. Stored order is untouched.
    pub fn view(&self, filter: WatchlistFilter) -> Vec<&WatchlistEntry> {
        view::apply(filter, &self.entries)
    }

    pub fn stats(&self) -> WatchlistStats {
        let total: u32 = self.entries.iter().map(|e| e.runtime_minutes).sum();
        WatchlistStats::new(self.entries.len(), total)
    }

    /// Flat projection for CSV export. No mutation.
    pub fn export_rows(&self) -> Vec<ExportRow> {
        self.entries
            .iter()
            .map(|e| ExportRow {
                title: e.title.clone(),
                year: e.release_year().unwrap_or("Unknown").to_string(),
                rating: e.vote_average,
                added: e.added_at.format("%Y-%m-%d").to_string(),
            })
            .collect()
    }

    /// Persist the whole collection. A failed write is a warning, not an
    /// error: the in-memory collection stays authoritative for the session.
    fn persist(&self) {
        if let Err(e) = self.storage.save(&self.entries) {
            warn!("Failed to persist watchlist (in-memory state kept): {:#}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::HIGHLY_RATED_THRESHOLD;
    use async_trait::async_trait;
    use chrono::{DateTime, Duration, Utc};
    use watchlist_models::{Genre, MovieDetails, MoviePage, DEFAULT_RUNTIME_MINUTES};
    use watchlist_sources::SourceError;

    struct StubSource {
        movies: Vec<MovieDetails>,
    }

    #[async_trait]
    impl MovieMetadataSource for StubSource {
        async fn movie_details(&self, id: u64) -> Result<MovieDetails, SourceError> {
            self.movies
                .iter()
                .find(|m| m.id == id)
                .cloned()
                .ok_or_else(|| SourceError::new(format!("HTTP 404 for movie {}", id)))
        }

        async fn search_movies(&self, _query: &str, _page: u32) -> Result<MoviePage, SourceError> {
            Err(SourceError::new("not used in store tests".to_string()))
        }

        async fn popular_movies(&self, _page: u32) -> Result<MoviePage, SourceError> {
            Err(SourceError::new("not used in store tests".to_string()))
        }
    }

    fn create_details(id: u64, title: &str) -> MovieDetails {
        MovieDetails {
            id,
            title: title.to_string(),
            original_title: title.to_string(),
            poster_path: Some(format!("/poster-{}.jpg", id)),
            backdrop_path: None,
            overview: "A movie.".to_string(),
            release_date: Some("1999-03-30".to_string()),
            vote_average: 8.2,
            vote_count: 24000,
            popularity: 85.5,
            genres: vec![Genre { id: 878, name: "Sci-Fi".to_string() }],
            runtime: Some(136),
            original_language: "en".to_string(),
        }
    }

    fn create_entry(
        id: u64,
        title: &str,
        vote_average: f32,
        runtime_minutes: u32,
        genre: Option<&str>,
        added_at: DateTime<Utc>,
    ) -> WatchlistEntry {
        WatchlistEntry {
            id,
            title: title.to_string(),
            original_title: title.to_string(),
            poster_path: None,
            backdrop_path: None,
            overview: String::new(),
            release_date: Some("2004-06-18".to_string()),
            vote_average,
            vote_count: 100,
            popularity: 10.0,
            genres: genre
                .map(|name| vec![Genre { id: 0, name: name.to_string() }])
                .unwrap_or_default(),
            runtime_minutes,
            original_language: "en".to_string(),
            added_at,
            watched: false,
        }
    }

    fn store_with(entries: &[WatchlistEntry]) -> (tempfile::TempDir, WatchlistStore) {
        let dir = tempfile::tempdir().unwrap();
        let storage = WatchlistStorage::new(dir.path().join("watchlist.json"));
        storage.save(entries).unwrap();
        let store = WatchlistStore::load(storage);
        (dir, store)
    }

    #[tokio::test]
    async fn test_add_fetches_and_prepends() {
        let (_dir, mut store) = store_with(&[]);
        let source = StubSource { movies: vec![create_details(603, "The Matrix")] };

        let entry = store.add(&source, 603).await.unwrap();
        assert_eq!(entry.title, "The Matrix");
        assert_eq!(entry.runtime_minutes, 136);
        assert!(!entry.watched);
        assert_eq!(store.len(), 1);

        let second = store.add(&source, 604).await;
        assert!(second.is_err()); // not in stub
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_add_duplicate_is_rejected_without_side_effects() {
        let (_dir, mut store) = store_with(&[]);
        let source = StubSource { movies: vec![create_details(603, "The Matrix")] };

        store.add(&source, 603).await.unwrap();
        let err = store.add(&source, 603).await.unwrap_err();

        assert!(matches!(err, AddError::AlreadyExists { id: 603, .. }));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_add_fetch_failure_commits_nothing() {
        let (_dir, mut store) = store_with(&[]);
        let source = StubSource { movies: vec![] };

        let err = store.add(&source, 42).await.unwrap_err();
        assert!(matches!(err, AddError::FetchFailed { id: 42, .. }));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_add_defaults_runtime_when_source_omits_it() {
        let (_dir, mut store) = store_with(&[]);
        let mut details = create_details(11, "No Runtime");
        details.runtime = None;
        let mut zero = create_details(12, "Zero Runtime");
        zero.runtime = Some(0);
        let source = StubSource { movies: vec![details, zero] };

        let entry = store.add(&source, 11).await.unwrap();
        assert_eq!(entry.runtime_minutes, DEFAULT_RUNTIME_MINUTES);

        let entry = store.add(&source, 12).await.unwrap();
        assert_eq!(entry.runtime_minutes, DEFAULT_RUNTIME_MINUTES);
    }

    #[tokio::test]
    async fn test_add_most_recent_first() {
        let (_dir, mut store) = store_with(&[]);
        let source = StubSource {
            movies: vec![create_details(1, "First"), create_details(2, "Second")],
        };

        store.add(&source, 1).await.unwrap();
        store.add(&source, 2).await.unwrap();

        let ids: Vec<u64> = store.view(WatchlistFilter::All).iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn test_add_persists_to_storage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("watchlist.json");
        let source = StubSource { movies: vec![create_details(603, "The Matrix")] };

        let mut store = WatchlistStore::load(WatchlistStorage::new(path.clone()));
        store.add(&source, 603).await.unwrap();

        let reloaded = WatchlistStore::load(WatchlistStorage::new(path));
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.entries()[0].title, "The Matrix");
    }

    #[test]
    fn test_remove_then_view_never_contains_id() {
        let now = Utc::now();
        let (_dir, mut store) = store_with(&[
            create_entry(1, "A", 8.0, 90, Some("Drama"), now),
            create_entry(2, "B", 5.0, 150, Some("Comedy"), now),
        ]);

        let removed = store.remove(1).unwrap();
        assert_eq!(removed.id, 1);
        assert!(store.view(WatchlistFilter::All).iter().all(|e| e.id != 1));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_missing_id_is_none() {
        let now = Utc::now();
        let (_dir, mut store) = store_with(&[create_entry(1, "A", 8.0, 90, None, now)]);

        assert!(store.remove(99).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_set_watched() {
        let now = Utc::now();
        let (_dir, mut store) = store_with(&[create_entry(1, "A", 8.0, 90, None, now)]);

        let updated = store.set_watched(1, true).unwrap();
        assert!(updated.watched);
        assert!(store.entries()[0].watched);

        let updated = store.set_watched(1, false).unwrap();
        assert!(!updated.watched);
    }

    #[test]
    fn test_set_watched_missing_id_is_noop() {
        let now = Utc::now();
        let (_dir, mut store) = store_with(&[create_entry(1, "A", 8.0, 90, None, now)]);

        assert!(store.set_watched(99, true).is_none());
        assert!(!store.entries()[0].watched);
    }

    #[test]
    fn test_clear() {
        let now = Utc::now();
        let (_dir, mut store) = store_with(&[
            create_entry(1, "A", 8.0, 90, None, now),
            create_entry(2, "B", 5.0, 150, None, now),
        ]);

        assert_eq!(store.clear(), Some(2));
        assert!(store.is_empty());
        assert_eq!(store.clear(), None);
    }

    #[test]
    fn test_stats_scenario() {
        let t1 = Utc::now();
        let t2 = t1 + Duration::minutes(5);
        let (_dir, store) = store_with(&[
            create_entry(1, "A", 8.0, 90, None, t1),
            create_entry(2, "B", 5.0, 150, None, t2),
        ]);

        let stats = store.stats();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.total_runtime_minutes, 240);
        assert_eq!(stats.hours, 4);
        assert_eq!(stats.minutes, 0);
        assert_eq!(stats.hours * 60 + stats.minutes, stats.total_runtime_minutes);
    }

    #[test]
    fn test_view_recent_orders_by_added_at_descending() {
        let t1 = Utc::now();
        let t2 = t1 + Duration::minutes(5);
        let (_dir, store) = store_with(&[
            create_entry(1, "A", 8.0, 90, None, t1),
            create_entry(2, "B", 5.0, 150, None, t2),
        ]);

        let ids: Vec<u64> = store.view(WatchlistFilter::Recent).iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_view_highly_rated_filters_and_orders() {
        let now = Utc::now();
        let (_dir, store) = store_with(&[
            create_entry(1, "A", 8.0, 90, None, now),
            create_entry(2, "B", 5.0, 150, None, now),
            create_entry(3, "C", 9.1, 120, None, now),
            create_entry(4, "D", 7.0, 120, None, now),
        ]);

        let view = store.view(WatchlistFilter::HighlyRated);
        let ids: Vec<u64> = view.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 1, 4]); // 9.1, 8.0, 7.0 (threshold inclusive)
        assert!(view.iter().all(|e| e.vote_average >= HIGHLY_RATED_THRESHOLD));
    }

    #[test]
    fn test_view_by_genre_sorts_unknown_literally() {
        let now = Utc::now();
        let (_dir, store) = store_with(&[
            create_entry(1, "A", 8.0, 90, Some("Western"), now),
            create_entry(2, "B", 5.0, 150, None, now), // "Unknown"
            create_entry(3, "C", 9.1, 120, Some("Action"), now),
        ]);

        let ids: Vec<u64> = store.view(WatchlistFilter::ByGenre).iter().map(|e| e.id).collect();
        // Action < Unknown < Western
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_view_does_not_mutate_stored_order() {
        let t1 = Utc::now();
        let t2 = t1 + Duration::minutes(5);
        let (_dir, store) = store_with(&[
            create_entry(1, "A", 8.0, 90, Some("Western"), t1),
            create_entry(2, "B", 9.0, 150, Some("Action"), t2),
        ]);

        let _ = store.view(WatchlistFilter::ByGenre);
        let _ = store.view(WatchlistFilter::Recent);
        let ids: Vec<u64> = store.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_export_rows_projection() {
        let added = "2026-08-01T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let mut dated = create_entry(1, "The Matrix", 8.2, 136, None, added);
        dated.release_date = Some("1999-03-30".to_string());
        let mut undated = create_entry(2, "Untitled", 6.0, 120, None, added);
        undated.release_date = None;

        let (_dir, store) = store_with(&[dated, undated]);
        let rows = store.export_rows();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].title, "The Matrix");
        assert_eq!(rows[0].year, "1999");
        assert_eq!(rows[0].added, "2026-08-01");
        assert_eq!(rows[1].year, "Unknown");
    }

    #[test]
    fn test_storage_roundtrip_is_elementwise_equal() {
        let now = Utc::now();
        let entries = vec![
            create_entry(1, "A", 8.0, 90, Some("Drama"), now),
            create_entry(2, "B", 5.0, 150, None, now),
        ];
        let (_dir, store) = store_with(&entries);

        assert_eq!(store.entries(), entries.as_slice());
    }
}
