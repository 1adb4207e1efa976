use anyhow::Result;
use std::path::{Path, PathBuf};

/// Base path override from the environment, for containers and tests.
pub fn base_path_override() -> Option<PathBuf> {
    std::env::var("CINETRACK_BASE_PATH").ok().map(PathBuf::from)
}

pub struct PathManager {
    config_dir: PathBuf,
    data_dir: PathBuf,
}

impl PathManager {
    pub fn new() -> Result<Self> {
        let base_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("cinetrack");

        Ok(Self::from_base(base_dir))
    }

    pub fn from_base(base: PathBuf) -> Self {
        Self {
            data_dir: base.join("data"),
            config_dir: base,
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn watchlist_file(&self) -> PathBuf {
        self.data_dir.join("watchlist.json")
    }

    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.data_dir)?;
        Ok(())
    }
}

impl Default for PathManager {
    fn default() -> Self {
        if let Some(base) = base_path_override() {
            return Self::from_base(base);
        }

        // Platform-specific paths (e.g. ~/.config/cinetrack on Linux)
        Self::new().unwrap_or_else(|_| Self::from_base(PathBuf::from(".cinetrack")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_derive_from_base() {
        let pm = PathManager::from_base(PathBuf::from("/tmp/ct"));
        assert_eq!(pm.config_file(), PathBuf::from("/tmp/ct/config.toml"));
        assert_eq!(pm.watchlist_file(), PathBuf::from("/tmp/ct/data/watchlist.json"));
    }
}
