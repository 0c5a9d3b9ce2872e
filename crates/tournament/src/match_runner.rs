//! Match runner for playing games between move strategies

use chess_rules::{Board, MoveStrategy};
use minimax_engine::MiniMax;
use random_engine::RandomStrategy;
use tracing::{info, warn};

use crate::config::{MatchConfig, TournamentError};
use crate::game::{GameOutcome, GameRecord, Termination};
use crate::results::{GameResult, MatchResult};

/// Build a strategy by name: `minimax` (searching `depth` plies) or `random`.
pub fn create_strategy(name: &str, depth: u32) -> Result<Box<dyn MoveStrategy>, TournamentError> {
    match name.to_lowercase().as_str() {
        "minimax" => Ok(Box::new(MiniMax::new(depth))),
        "random" => Ok(Box::new(RandomStrategy::new())),
        _ => Err(TournamentError::UnknownStrategy(name.to_string())),
    }
}

/// Runs matches between two strategies
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Build a strategy by name, searching at the configured depth.
    pub fn create_strategy(&self, name: &str) -> Result<Box<dyn MoveStrategy>, TournamentError> {
        create_strategy(name, self.config.depth)
    }

    /// Run a match between two strategies
    ///
    /// Returns the result from strategy1's perspective
    pub fn run_match(
        &self,
        strategy1: &mut dyn MoveStrategy,
        strategy2: &mut dyn MoveStrategy,
    ) -> MatchResult {
        let mut result = MatchResult::new(strategy1.name(), strategy2.name());

        for game_num in 0..self.config.num_games {
            let first_is_white = !self.config.alternate_colors || game_num % 2 == 0;

            let record = if first_is_white {
                self.play_game(strategy1, strategy2)
            } else {
                self.play_game(strategy2, strategy1)
            };
            let game_result = GameResult::from_outcome(record.outcome, first_is_white);

            info!(
                game = game_num + 1,
                of = self.config.num_games,
                white = %record.white,
                black = %record.black,
                result = record.outcome.as_str(),
                termination = ?record.termination,
                moves = record.moves.len(),
                "game finished"
            );
            result.add_game(game_result, record);
        }

        result
    }

    /// Play a single game from the standard starting board.
    pub fn play_game(
        &self,
        white: &mut dyn MoveStrategy,
        black: &mut dyn MoveStrategy,
    ) -> GameRecord {
        let mut record = GameRecord::new(white.name(), black.name());
        let mut board = Board::standard().clone();
        white.new_game();
        black.new_game();

        for _ in 0..self.config.max_moves {
            let player = board.current_player();
            let mover = player.alliance();

            if player.is_in_check_mate() {
                record.finish(GameOutcome::win_for(mover.other()), Termination::Checkmate);
                return record;
            }
            if player.is_in_stale_mate() {
                record.finish(GameOutcome::Draw, Termination::Stalemate);
                return record;
            }

            let strategy: &mut dyn MoveStrategy = if mover.is_white() { &mut *white } else { &mut *black };
            let mv = strategy.execute(&board);
            let transition = player.make_move(&mv);
            let status = transition.status();

            let Some(next) = transition.into_board() else {
                warn!(
                    strategy = strategy.name(),
                    %mv,
                    ?status,
                    "strategy offered an unplayable move, forfeiting"
                );
                record.finish(GameOutcome::win_for(mover.other()), Termination::Forfeit);
                return record;
            };

            record.record(&mv);
            board = next;
        }

        record.finish(GameOutcome::Draw, Termination::MoveLimit);
        record
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    strategy1: &mut dyn MoveStrategy,
    strategy2: &mut dyn MoveStrategy,
    num_games: u32,
    max_moves: u32,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        max_moves,
        ..Default::default()
    };
    MatchRunner::new(config).run_match(strategy1, strategy2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
