//! TOML settings for the minimax strategy.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// ```toml
/// depth = 4
/// move_time_ms = 2000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiniMaxConfig {
    /// Plies to search.
    pub depth: u32,
    /// Wall-clock budget per move; unlimited when absent.
    pub move_time_ms: Option<u64>,
}

impl Default for MiniMaxConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            move_time_ms: None,
        }
    }
}

impl MiniMaxConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn move_time(&self) -> Option<Duration> {
        self.move_time_ms.map(Duration::from_millis)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
