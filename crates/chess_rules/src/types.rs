use serde::{Deserialize, Serialize};

use crate::squares::{Square, on_rank};

/// One of the two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alliance {
    White,
    Black,
}

impl Alliance {
    /// Row step a pawn of this side advances by. White moves towards row 0.
    pub fn direction(self) -> i8 {
        match self {
            Alliance::White => -1,
            Alliance::Black => 1,
        }
    }

    pub fn opposite_direction(self) -> i8 {
        -self.direction()
    }

    pub fn other(self) -> Alliance {
        match self {
            Alliance::White => Alliance::Black,
            Alliance::Black => Alliance::White,
        }
    }

    pub fn is_white(self) -> bool {
        self == Alliance::White
    }

    pub fn is_black(self) -> bool {
        self == Alliance::Black
    }

    /// The far rank, where this side's pawns promote.
    pub fn is_pawn_promotion_square(self, sq: Square) -> bool {
        match self {
            Alliance::White => on_rank(sq, 8),
            Alliance::Black => on_rank(sq, 1),
        }
    }

    /// The rank this side's pawns start on.
    pub fn is_pawn_home_square(self, sq: Square) -> bool {
        match self {
            Alliance::White => on_rank(sq, 2),
            Alliance::Black => on_rank(sq, 7),
        }
    }

    /// Pick whichever of the two values represents this side.
    pub fn choose<T>(self, white: T, black: T) -> T {
        match self {
            Alliance::White => white,
            Alliance::Black => black,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Piece kinds a pawn may promote to, in generation order.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    /// Material value in centipawns.
    pub fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 300,
            PieceKind::Bishop => 300,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 10_000,
        }
    }

    /// Upper-case one-letter name.
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Inverse of [`PieceKind::letter`], case-insensitive.
    pub fn from_letter(c: char) -> Option<PieceKind> {
        match c.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    pub fn is_king(self) -> bool {
        self == PieceKind::King
    }

    pub fn is_rook(self) -> bool {
        self == PieceKind::Rook
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
