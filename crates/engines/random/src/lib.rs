//! Random Move Strategy
//!
//! Picks uniformly among the moves the side to move can actually play.
//! Useful as a baseline opponent and for stress testing the rules on long,
//! unpredictable games.

use chess_rules::{Board, Move, MoveStrategy};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{SeedableRng, thread_rng};


/// Plays a random move among those whose transition is `Done`.
#[derive(Debug, Clone, Default)]
pub struct RandomStrategy {
    /// Seeded generator for reproducible games; `thread_rng` otherwise.
    rng: Option<StdRng>,
    boards_evaluated: u64,
}

impl RandomStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Some(StdRng::seed_from_u64(seed)),
            boards_evaluated: 0,
        }
    }
}

impl MoveStrategy for RandomStrategy {
    fn execute(&mut self, board: &Board) -> Move {
        let player = board.current_player();
        let playable: Vec<Move> = player
            .legal_moves()
            .iter()
            .filter(|mv| player.make_move(mv).status().is_done())
            .copied()
            .collect();
        self.boards_evaluated = playable.len() as u64;

        let choice = match self.rng.as_mut() {
            Some(rng) => playable.choose(rng),
            None => playable.choose(&mut thread_rng()),
        };
        choice.copied().unwrap_or(Move::Null)
    }

    fn name(&self) -> &str {
        "Random"
    }

    fn boards_evaluated(&self) -> u64 {
        self.boards_evaluated
    }

    fn new_game(&mut self) {
        self.boards_evaluated = 0;
    }
}
