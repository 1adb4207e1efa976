pub mod add;
pub mod ask;
pub mod clear;
pub mod config;
pub mod export;
pub mod list;
pub mod prompts;
pub mod remove;
pub mod search;
pub mod stats;
pub mod watched;

use color_eyre::Result;
use watchlist_config::{Config, PathManager};
use watchlist_core::{WatchlistStorage, WatchlistStore};

/// Load the watchlist from its durable home. A missing or corrupt file
/// starts an empty session; it is never fatal.
pub(crate) fn open_store() -> WatchlistStore {
    let paths = PathManager::default();
    WatchlistStore::load(WatchlistStorage::new(paths.watchlist_file()))
}

pub(crate) fn load_config() -> Result<Config> {
    let paths = PathManager::default();
    Config::load_or_default(&paths.config_file())
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load configuration: {}", e))
}
