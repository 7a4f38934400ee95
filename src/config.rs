//! Configuration loading and management for newsbrief.
//!
//! Loads settings from `newsbrief.toml` with an environment variable override
//! for the API key.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

const CONFIG_FILE: &str = "newsbrief.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("missing NewsAPI key (set NEWS_API_KEY or [api] news_key)")]
    MissingApiKey,
}

/// News search settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsConfig {
    /// Base URL of the NewsAPI `everything` endpoint
    pub endpoint: String,
    /// Two-letter language code passed to the API
    pub language: String,
    /// Articles requested per search (single page only)
    pub page_size: u32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

/// API keys configuration (loaded from environment)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiConfig {
    #[serde(default)]
    pub news_key: Option<String>,
}

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub news: NewsConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

impl Config {
    /// Load configuration from the default location (newsbrief.toml in cwd or home).
    ///
    /// A missing file is not an error; defaults are used instead.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::find_config_file() {
            Some(path) => Self::parse_file(&path)?,
            None => Config::default(),
        };
        config.apply_env();
        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::parse_file(path)?;
        config.apply_env();
        Ok(config)
    }

    fn parse_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Override the API key from the environment
    fn apply_env(&mut self) {
        if let Ok(key) = std::env::var("NEWS_API_KEY") {
            if !key.trim().is_empty() {
                self.api.news_key = Some(key);
            }
        }
    }

    /// Find the config file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        // Check current directory first
        let local_config = PathBuf::from(CONFIG_FILE);
        if local_config.exists() {
            return Some(local_config);
        }

        let home = dirs::home_dir()?;
        let home_config = home.join(".config").join("newsbrief").join(CONFIG_FILE);
        home_config.exists().then_some(home_config)
    }

    /// Get the NewsAPI key
    pub fn api_key(&self) -> Result<&str, ConfigError> {
        self.api
            .news_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)
    }
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://newsapi.org/v2/everything".to_string(),
            language: "zh".to_string(),
            page_size: 20,
            timeout_secs: 10,
        }
    }
}
