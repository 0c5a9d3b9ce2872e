//! Errors raised while constructing boards.

use crate::types::Alliance;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Every board needs exactly one king per side.
    #[error("not a valid board: no {0:?} king")]
    MissingKing(Alliance),

    #[error("not a valid board: more than one {0:?} king")]
    DuplicateKing(Alliance),

    #[error("invalid square: {0}")]
    InvalidSquare(String),

    /// Malformed text board description.
    #[error("invalid board setup: {0}")]
    InvalidSetup(String),
}
