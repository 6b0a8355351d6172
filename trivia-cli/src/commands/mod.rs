pub mod config;
pub mod seed;
pub mod serve;

use std::path::PathBuf;

use anyhow::{Context, Result};
use trivia_core::TriviaConfig;

/// Load config from `path` (or the default location) with env overrides.
pub fn load_config(path: Option<PathBuf>) -> Result<TriviaConfig> {
    let path = path.unwrap_or_else(TriviaConfig::config_path);
    TriviaConfig::load_from(&path, |key| std::env::var(key).ok())
        .with_context(|| format!("Failed to load config from {}", path.display()))
}
