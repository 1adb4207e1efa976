use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_ASSISTANT_MODEL: &str = "gemini-pro";

const PLACEHOLDER_KEY: &str = "YOUR_API_KEY";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tmdb: Option<TmdbConfig>,
    #[serde(default)]
    pub assistant: Option<AssistantConfig>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TmdbConfig {
    pub api_key: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AssistantConfig {
    pub api_key: String,
    #[serde(default = "default_assistant_model")]
    pub model: String,
}

fn default_assistant_model() -> String {
    DEFAULT_ASSISTANT_MODEL.to_string()
}

impl Config {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the config file, falling back to defaults when it does not exist yet.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// TMDB settings, validated. Commands that hit the metadata API call this
    /// before building a client.
    pub fn require_tmdb(&self) -> anyhow::Result<&TmdbConfig> {
        let tmdb = self.tmdb.as_ref().ok_or_else(|| {
            anyhow::anyhow!("TMDB is not configured. Run `cinetrack config tmdb` first")
        })?;
        if tmdb.api_key.is_empty() || tmdb.api_key == PLACEHOLDER_KEY {
            return Err(anyhow::anyhow!(
                "TMDB api_key is not configured. Run `cinetrack config tmdb` first"
            ));
        }
        Ok(tmdb)
    }

    /// Assistant settings, validated.
    pub fn require_assistant(&self) -> anyhow::Result<&AssistantConfig> {
        let assistant = self.assistant.as_ref().ok_or_else(|| {
            anyhow::anyhow!("Assistant is not configured. Run `cinetrack config assistant` first")
        })?;
        if assistant.api_key.is_empty() || assistant.api_key == PLACEHOLDER_KEY {
            return Err(anyhow::anyhow!(
                "Assistant api_key is not configured. Run `cinetrack config assistant` first"
            ));
        }
        Ok(assistant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config {
            tmdb: Some(TmdbConfig {
                api_key: "abc123".to_string(),
            }),
            assistant: Some(AssistantConfig {
                api_key: "def456".to_string(),
                model: DEFAULT_ASSISTANT_MODEL.to_string(),
            }),
        };
        config.save_to_file(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.require_tmdb().unwrap().api_key, "abc123");
        assert_eq!(loaded.require_assistant().unwrap().model, DEFAULT_ASSISTANT_MODEL);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join("missing.toml")).unwrap();
        assert!(config.tmdb.is_none());
        assert!(config.require_tmdb().is_err());
    }

    #[test]
    fn test_placeholder_key_rejected() {
        let config = Config {
            tmdb: Some(TmdbConfig {
                api_key: "YOUR_API_KEY".to_string(),
            }),
            assistant: None,
        };
        assert!(config.require_tmdb().is_err());
        assert!(config.require_assistant().is_err());
    }

    #[test]
    fn test_assistant_model_defaults_when_absent() {
        let parsed: Config = toml::from_str(
            r#"
            [assistant]
            api_key = "k"
            "#,
        )
        .unwrap();
        assert_eq!(parsed.assistant.unwrap().model, DEFAULT_ASSISTANT_MODEL);
    }
}
