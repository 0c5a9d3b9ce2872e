pub mod attacks;
pub mod board;
pub mod error;
pub mod fen;
mod movegen;
pub mod moves;
pub mod perft;
pub mod piece;
pub mod player;
pub mod squares;
pub mod time_control;
pub mod transition;
pub mod types;

pub use attacks::is_square_attacked;
pub use board::{Board, BoardConfig};
pub use error::BoardError;
pub use moves::{CastleMove, Move, create_move};
pub use perft::{divide, perft};
pub use piece::Piece;
pub use player::Player;
pub use squares::*;
pub use time_control::{SearchLimits, TimeControl};
pub use transition::{MoveStatus, MoveTransition};
pub use types::{Alliance, PieceKind};

// =============================================================================
// MoveStrategy trait — implemented by every move chooser (minimax, random, ...)
// =============================================================================

/// Something that picks a move for the side to move on a board.
///
/// Implementations are driven off the caller's thread, hence `Send`.
pub trait MoveStrategy: Send {
    /// Choose a move for `board.current_player()`.
    ///
    /// Returns [`Move::Null`] when there is nothing to play. The returned move
    /// still has to go through [`Player::make_move`].
    fn execute(&mut self, board: &Board) -> Move;

    fn name(&self) -> &str;

    /// Boards scored during the most recent [`MoveStrategy::execute`].
    fn boards_evaluated(&self) -> u64 {
        0
    }

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}
}
