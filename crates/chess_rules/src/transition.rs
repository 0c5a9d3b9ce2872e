use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::moves::Move;

/// Outcome of asking a player to make a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveStatus {
    Done,
    IllegalMove,
    LeavesPlayerInCheck,
}

impl MoveStatus {
    pub fn is_done(self) -> bool {
        self == MoveStatus::Done
    }
}

/// Result record of [`crate::Player::make_move`].
///
/// Only a `Done` transition owns a new board. Rejected transitions point back at
/// the board the move was tried on.
#[derive(Debug)]
pub struct MoveTransition<'a> {
    from_board: &'a Board,
    to_board: Option<Board>,
    mv: Move,
    status: MoveStatus,
}

impl<'a> MoveTransition<'a> {
    pub(crate) fn done(from_board: &'a Board, to_board: Board, mv: Move) -> Self {
        Self {
            from_board,
            to_board: Some(to_board),
            mv,
            status: MoveStatus::Done,
        }
    }

    pub(crate) fn rejected(from_board: &'a Board, mv: Move, status: MoveStatus) -> Self {
        Self {
            from_board,
            to_board: None,
            mv,
            status,
        }
    }

    pub fn status(&self) -> MoveStatus {
        self.status
    }

    pub fn mv(&self) -> Move {
        self.mv
    }

    pub fn from_board(&self) -> &'a Board {
        self.from_board
    }

    /// The resulting board: the new one when `Done`, otherwise the origin board.
    pub fn to_board(&self) -> &Board {
        self.to_board.as_ref().unwrap_or(self.from_board)
    }

    /// Take the new board out of a `Done` transition.
    pub fn into_board(self) -> Option<Board> {
        self.to_board
    }
}
