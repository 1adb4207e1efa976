pub mod config;
pub mod paths;

pub use config::{AssistantConfig, Config, TmdbConfig};
pub use paths::{base_path_override, PathManager};
