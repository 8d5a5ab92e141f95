use std::collections::HashSet;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/tally/config.toml` on Unix, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if there is no config dir.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("tally").join("config.toml")
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates it.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - `server.bind_addr` is a socket address
    /// - `ui.tick_rate_ms` is non-zero
    /// - every element id is non-empty and no two elements share an id
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.bind_addr.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::ValidationError {
                message: format!("Invalid bind address '{}'", self.server.bind_addr),
            });
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than zero".to_string(),
            });
        }

        let ids = &self.elements;
        let all = std::iter::once(ids.display.as_str()).chain(ids.controls().map(|(_, id)| id));
        let mut seen = HashSet::new();
        for id in all {
            if id.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    message: "Element ids must not be empty".to_string(),
                });
            }
            if !seen.insert(id) {
                return Err(ConfigError::ValidationError {
                    message: format!("Element id '{}' is used more than once", id),
                });
            }
        }

        Ok(())
    }
}
