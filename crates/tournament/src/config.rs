use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum TournamentError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid match config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid results file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),
}

/// Configuration for a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Search depth handed to strategies built by name
    pub depth: u32,
    /// Half-moves per game before it is declared drawn
    pub max_moves: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            depth: 3,
            max_moves: 200,
            alternate_colors: true,
        }
    }
}

impl MatchConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, TournamentError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, TournamentError> {
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }
}
