//! Minimax move strategy
//!
//! Fixed-depth minimax over immutable boards with a pluggable evaluator.
//! Every reachable board within the depth is visited; there is no pruning.

mod config;
mod eval;
mod search;

use std::time::Duration;

use chess_rules::{Board, Move, MoveStrategy, SearchLimits, TimeControl};
use tracing::debug;

pub use config::{ConfigError, MiniMaxConfig};
pub use eval::{BoardEvaluator, MaterialEvaluator, StandardBoardEvaluator};
pub use search::{SearchOutcome, pick_best_move};

/// Move strategy that searches `depth` plies and scores leaves with `E`.
#[derive(Debug, Clone)]
pub struct MiniMax<E: BoardEvaluator = StandardBoardEvaluator> {
    evaluator: E,
    limits: SearchLimits,
    boards_evaluated: u64,
}

impl MiniMax<StandardBoardEvaluator> {
    pub fn new(depth: u32) -> Self {
        Self::with_evaluator(StandardBoardEvaluator, depth)
    }

    pub fn from_config(config: &MiniMaxConfig) -> Self {
        let mut strategy = Self::new(config.depth);
        if let Some(move_time) = config.move_time() {
            strategy = strategy.with_move_time(move_time);
        }
        strategy
    }
}

impl<E: BoardEvaluator> MiniMax<E> {
    pub fn with_evaluator(evaluator: E, depth: u32) -> Self {
        Self {
            evaluator,
            limits: SearchLimits::depth(depth),
            boards_evaluated: 0,
        }
    }

    /// Give up on a search after `move_time`, keeping the best root move so far.
    pub fn with_move_time(mut self, move_time: Duration) -> Self {
        self.limits = SearchLimits::depth_and_time(self.limits.depth, move_time);
        self
    }

    pub fn depth(&self) -> u32 {
        self.limits.depth
    }

    /// Handle for stopping a running search from another thread.
    pub fn time_control(&self) -> TimeControl {
        self.limits.time_control.clone()
    }

    /// Full result of a search, including the value of the chosen move.
    pub fn search(&mut self, board: &Board) -> SearchOutcome {
        let tc = &self.limits.time_control;
        tc.start();
        let outcome = pick_best_move(board, self.limits.depth, &self.evaluator, tc);
        self.boards_evaluated = outcome.boards_evaluated;

        debug!(
            depth = self.limits.depth,
            boards = outcome.boards_evaluated,
            elapsed = ?tc.elapsed(),
            stopped = outcome.stopped,
            best = %outcome.best_move,
            value = outcome.value,
            "minimax search finished"
        );
        outcome
    }
}

impl<E: BoardEvaluator> MoveStrategy for MiniMax<E> {
    fn execute(&mut self, board: &Board) -> Move {
        self.search(board).best_move
    }

    fn name(&self) -> &str {
        "MiniMax"
    }

    fn boards_evaluated(&self) -> u64 {
        self.boards_evaluated
    }

    fn new_game(&mut self) {
        self.boards_evaluated = 0;
    }
}
