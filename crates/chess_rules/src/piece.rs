use std::fmt;
use std::hash::{Hash, Hasher};

use crate::board::Board;
use crate::movegen;
use crate::moves::Move;
use crate::squares::Square;
use crate::types::{Alliance, PieceKind};

/// An immutable piece standing on a square.
///
/// Equality and hashing cover kind, alliance, position and the first-move flag.
/// The king-only `castled` flag rides along but does not take part in comparisons.
#[derive(Clone, Copy, Debug)]
pub struct Piece {
    kind: PieceKind,
    alliance: Alliance,
    position: Square,
    first_move: bool,
    castled: bool,
}

impl Piece {
    /// A piece that has not moved yet.
    pub fn new(kind: PieceKind, alliance: Alliance, position: Square) -> Self {
        Self {
            kind,
            alliance,
            position,
            first_move: true,
            castled: false,
        }
    }

    pub fn with_first_move(mut self, first_move: bool) -> Self {
        self.first_move = first_move;
        self
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn alliance(&self) -> Alliance {
        self.alliance
    }

    pub fn position(&self) -> Square {
        self.position
    }

    pub fn is_first_move(&self) -> bool {
        self.first_move
    }

    pub fn value(&self) -> i32 {
        self.kind.value()
    }

    /// True for a king whose last relocation was a castle.
    pub fn is_castled(&self) -> bool {
        self.castled
    }

    pub fn is_king_side_castle_capable(&self) -> bool {
        self.kind.is_king() && self.first_move && !self.castled
    }

    pub fn is_queen_side_castle_capable(&self) -> bool {
        self.kind.is_king() && self.first_move && !self.castled
    }

    /// The same piece relocated to the destination of `mv`.
    pub fn move_to(&self, mv: &Move) -> Piece {
        Piece {
            position: mv.destination(),
            first_move: false,
            castled: self.kind.is_king() && mv.is_castling(),
            ..*self
        }
    }

    /// The piece a pawn turns into on `to`.
    pub fn promoted_to(&self, kind: PieceKind, to: Square) -> Piece {
        Piece::new(kind, self.alliance, to).with_first_move(false)
    }

    /// Every geometrically valid move of this piece on `board`.
    ///
    /// Moves that would leave the own king attacked are included; they are
    /// rejected later by [`crate::Player::make_move`].
    pub fn calculate_legal_moves(&self, board: &Board) -> Vec<Move> {
        let mut out = Vec::with_capacity(16);
        movegen::piece_moves(self, board, &mut out);
        out
    }
}

impl PartialEq for Piece {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.alliance == other.alliance
            && self.position == other.position
            && self.first_move == other.first_move
    }
}

impl Eq for Piece {}

impl Hash for Piece {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.alliance.hash(state);
        self.position.hash(state);
        self.first_move.hash(state);
    }
}

/// Upper case for White, lower case for Black.
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = self.kind.letter();
        match self.alliance {
            Alliance::White => write!(f, "{letter}"),
            Alliance::Black => write!(f, "{}", letter.to_ascii_lowercase()),
        }
    }
}
