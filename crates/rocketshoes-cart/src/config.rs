//! Runtime configuration.
//!
//! Loaded from an optional TOML file, then overridden from the environment (a `.env`
//! file is honoured through `dotenvy`):
//!
//! | Variable | Field |
//! |----------|-------|
//! | `ROCKETSHOES_CONFIG` | path of the TOML file (when `--config` is not given) |
//! | `ROCKETSHOES_API_URL` | `api.base_url` |
//! | `ROCKETSHOES_STORAGE_PATH` | `storage.path` |
//!
//! ```toml
//! channel_capacity = 32
//!
//! [api]
//! base_url = "http://localhost:3333"
//!
//! [storage]
//! path = "rocketshoes.json"
//! key = "@RocketShoes:cart"
//! ```

use crate::storage::CART_KEY;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_ENV: &str = "ROCKETSHOES_CONFIG";
pub const API_URL_ENV: &str = "ROCKETSHOES_API_URL";
pub const STORAGE_PATH_ENV: &str = "ROCKETSHOES_STORAGE_PATH";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CartConfig {
    pub api: ApiConfig,
    pub storage: StorageConfig,
    /// Capacity of the cart actor's request channel.
    pub channel_capacity: usize,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            storage: StorageConfig::default(),
            channel_capacity: 32,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3333".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub path: PathBuf,
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("rocketshoes.json"),
            key: CART_KEY.into(),
        }
    }
}

impl CartConfig {
    /// Full load: `.env`, then the file (explicit path, else `ROCKETSHOES_CONFIG`, else
    /// defaults), then environment overrides, then validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let from_env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let mut config = match path.map(Path::to_path_buf).or(from_env) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        config.apply_overrides(|name| std::env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Applies `ROCKETSHOES_*` overrides, reading variables through `lookup`.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.api.base_url = url;
        }
        if let Some(path) = lookup(STORAGE_PATH_ENV).filter(|v| !v.trim().is_empty()) {
            self.storage.path = PathBuf::from(path);
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("api.base_url is empty".into()));
        }
        if self.storage.key.is_empty() {
            return Err(ConfigError::Invalid("storage.key is empty".into()));
        }
        if self.channel_capacity == 0 {
            return Err(ConfigError::Invalid("channel_capacity must be >= 1".into()));
        }
        Ok(())
    }
}
