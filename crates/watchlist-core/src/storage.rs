use anyhow::{anyhow, Result};
use std::path::PathBuf;
use tracing::{debug, warn};
use watchlist_models::WatchlistEntry;

/// Durable home of the watchlist: one JSON file holding the whole
/// collection. Read once at startup, overwritten in full on every
/// mutation. There is no schema versioning or incremental persistence.
#[derive(Clone)]
pub struct WatchlistStorage {
    path: PathBuf,
}

impl WatchlistStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the stored collection. A missing, unreadable, or corrupt file
    /// yields the empty collection — never an error.
    pub fn load(&self) -> Vec<WatchlistEntry> {
        if !self.path.exists() {
            debug!("No watchlist file at {}, starting empty", self.path.display());
            return Vec::new();
        }

        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to read watchlist file {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<WatchlistEntry>>(&content) {
            Ok(entries) => {
                debug!("Loaded {} watchlist entries from {}", entries.len(), self.path.display());
                entries
            }
            Err(e) => {
                warn!(
                    "Watchlist file {} is unparsable ({}), starting empty. \
                     The file will be overwritten on the next change.",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Overwrite the stored collection with the given entries.
    pub fn save(&self, entries: &[WatchlistEntry]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| anyhow!("Failed to serialize watchlist: {}", e))?;
        std::fs::write(&self.path, json)
            .map_err(|e| anyhow!("Failed to write {}: {}", self.path.display(), e))?;

        debug!("Saved {} watchlist entries to {}", entries.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::io::Write;
    use watchlist_models::{Genre, WatchlistEntry};

    fn create_entry(id: u64, title: &str) -> WatchlistEntry {
        WatchlistEntry {
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
            genres: vec![Genre { id: 28, name: "Action".to_string() }],
            runtime_minutes: 136,
            original_language: "en".to_string(),
            added_at: Utc::now(),
            watched: false,
        }
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = WatchlistStorage::new(dir.path().join("watchlist.json"));
        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = WatchlistStorage::new(dir.path().join("data").join("watchlist.json"));

        let entries = vec![create_entry(603, "The Matrix"), create_entry(680, "Pulp Fiction")];
        storage.save(&entries).unwrap();

        let loaded = storage.load();
        assert_eq!(loaded, entries);
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("watchlist.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "{{not json").unwrap();

        let storage = WatchlistStorage::new(path.clone());
        assert!(storage.load().is_empty());
        // Corrupt file is left in place until the next save overwrites it
        assert!(path.exists());
    }

    #[test]
    fn test_save_overwrites_whole_collection() {
        let dir = tempfile::tempdir().unwrap();
        let storage = WatchlistStorage::new(dir.path().join("watchlist.json"));

        storage.save(&[create_entry(1, "A"), create_entry(2, "B")]).unwrap();
        storage.save(&[create_entry(3, "C")]).unwrap();

        let loaded = storage.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, 3);
    }
}
