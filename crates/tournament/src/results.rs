//! Match results storage and reporting

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::TournamentError;
use crate::game::{GameOutcome, GameRecord};

/// Result of a single game from the first strategy's point of view
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// Translate a board outcome for the side the first strategy played.
    pub fn from_outcome(outcome: GameOutcome, first_was_white: bool) -> Self {
        match (outcome, first_was_white) {
            (GameOutcome::Draw, _) => GameResult::Draw,
            (GameOutcome::WhiteWins, true) | (GameOutcome::BlackWins, false) => GameResult::Win,
            _ => GameResult::Loss,
        }
    }
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchResult {
    pub strategy1: String,
    pub strategy2: String,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub games: Vec<GameRecord>,
}

impl MatchResult {
    pub fn new(strategy1: &str, strategy2: &str) -> Self {
        Self {
            strategy1: strategy1.to_string(),
            strategy2: strategy2.to_string(),
            ..Default::default()
        }
    }

    pub fn add_game(&mut self, result: GameResult, record: GameRecord) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
        self.games.push(record);
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from strategy1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }

    /// Save results to a JSON file
    pub fn save(&self, path: &Path) -> Result<(), TournamentError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load results from a JSON file
    pub fn load(path: &Path) -> Result<Self, TournamentError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!(
            "=== Match: {} vs {} ===\n\n",
            self.strategy1, self.strategy2
        ));
        report.push_str(&format!(
            "{:<6} {:<12} {:<12} {:<8} {:>6}\n",
            "Game", "White", "Black", "Result", "Moves"
        ));
        report.push_str(&"-".repeat(48));
        report.push('\n');

        for (i, game) in self.games.iter().enumerate() {
            report.push_str(&format!(
                "{:<6} {:<12} {:<12} {:<8} {:>6}\n",
                i + 1,
                game.white,
                game.black,
                game.outcome.as_str(),
                game.moves.len()
            ));
        }

        report.push_str(&format!(
            "\n{}: {} wins, {} losses, {} draws ({:.1}%)\n",
            self.strategy1,
            self.wins,
            self.losses,
            self.draws,
            self.score() * 100.0
        ));
        report
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
