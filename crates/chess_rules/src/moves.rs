//! Moves as a closed set of variants.
//!
//! A move never holds the board it was generated from; [`Move::execute`] takes the
//! source board and rebuilds a fresh one, so every earlier board stays valid.

use std::fmt;

use crate::board::{Board, BoardConfig};
use crate::error::BoardError;
use crate::piece::Piece;
use crate::squares::{NULL_SQUARE, Square, algebraic};
use crate::types::PieceKind;

/// King and rook relocation of a castle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CastleMove {
    pub king: Piece,
    pub to: Square,
    pub rook: Piece,
    pub rook_to: Square,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    /// Quiet move of a non-pawn piece.
    Major { piece: Piece, to: Square },
    /// Capture by a non-pawn piece.
    MajorAttack {
        piece: Piece,
        to: Square,
        attacked: Piece,
    },
    /// Single pawn step.
    Pawn { piece: Piece, to: Square },
    /// Double pawn step from the home rank; leaves the pawn open to en passant.
    PawnJump { piece: Piece, to: Square },
    PawnAttack {
        piece: Piece,
        to: Square,
        attacked: Piece,
    },
    PawnEnPassantAttack {
        piece: Piece,
        to: Square,
        attacked: Piece,
    },
    /// A pawn step (`attacked == None`) or capture onto the far rank.
    PawnPromotion {
        piece: Piece,
        to: Square,
        attacked: Option<Piece>,
        promotion: PieceKind,
    },
    KingSideCastle(CastleMove),
    QueenSideCastle(CastleMove),
    /// Sentinel for "no move". Executing it is a programming error.
    Null,
}

impl Move {
    pub fn moved_piece(&self) -> Option<Piece> {
        match *self {
            Move::Major { piece, .. }
            | Move::MajorAttack { piece, .. }
            | Move::Pawn { piece, .. }
            | Move::PawnJump { piece, .. }
            | Move::PawnAttack { piece, .. }
            | Move::PawnEnPassantAttack { piece, .. }
            | Move::PawnPromotion { piece, .. } => Some(piece),
            Move::KingSideCastle(castle) | Move::QueenSideCastle(castle) => Some(castle.king),
            Move::Null => None,
        }
    }

    /// Square the moved piece starts on; `None` for the null move.
    pub fn current_coordinate(&self) -> Option<Square> {
        self.moved_piece().map(|piece| piece.position())
    }

    pub fn destination(&self) -> Square {
        match *self {
            Move::Major { to, .. }
            | Move::MajorAttack { to, .. }
            | Move::Pawn { to, .. }
            | Move::PawnJump { to, .. }
            | Move::PawnAttack { to, .. }
            | Move::PawnEnPassantAttack { to, .. }
            | Move::PawnPromotion { to, .. } => to,
            Move::KingSideCastle(castle) | Move::QueenSideCastle(castle) => castle.to,
            Move::Null => NULL_SQUARE,
        }
    }

    pub fn attacked_piece(&self) -> Option<Piece> {
        match *self {
            Move::MajorAttack { attacked, .. }
            | Move::PawnAttack { attacked, .. }
            | Move::PawnEnPassantAttack { attacked, .. } => Some(attacked),
            Move::PawnPromotion { attacked, .. } => attacked,
            _ => None,
        }
    }

    pub fn is_attack(&self) -> bool {
        self.attacked_piece().is_some()
    }

    pub fn is_castling(&self) -> bool {
        matches!(self, Move::KingSideCastle(_) | Move::QueenSideCastle(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Move::Null)
    }

    pub fn promotion(&self) -> Option<PieceKind> {
        match *self {
            Move::PawnPromotion { promotion, .. } => Some(promotion),
            _ => None,
        }
    }

    fn castle(&self) -> Option<CastleMove> {
        match *self {
            Move::KingSideCastle(castle) | Move::QueenSideCastle(castle) => Some(castle),
            _ => None,
        }
    }

    /// Build the board that results from playing this move on `board`.
    ///
    /// Every piece except the mover (and the castling rook, and the captured piece)
    /// is copied unchanged, the relocated pieces are placed, and the move passes to
    /// the other side. Legality is not checked here; see [`crate::Player::make_move`].
    ///
    /// # Panics
    /// Panics when called on [`Move::Null`]. A null move comes out of
    /// [`create_move`] when nothing matched and must be checked by the caller.
    pub fn execute(&self, board: &Board) -> Result<Board, BoardError> {
        let Some(moved) = self.moved_piece() else {
            panic!("cannot execute the null move");
        };
        let mover = moved.alliance();
        let castle = self.castle();
        let captured = self.attacked_piece();

        let mut config = BoardConfig::new(mover.other());
        for piece in board.pieces(mover) {
            if *piece != moved && castle.is_none_or(|c| *piece != c.rook) {
                config.set_piece(*piece);
            }
        }
        for piece in board.pieces(mover.other()) {
            if captured != Some(*piece) {
                config.set_piece(*piece);
            }
        }

        match *self {
            Move::PawnPromotion { to, promotion, .. } => {
                config.set_piece(moved.promoted_to(promotion, to));
            }
            Move::PawnJump { .. } => {
                let jumped = moved.move_to(self);
                config.set_piece(jumped);
                config.en_passant_pawn = Some(jumped);
            }
            _ => {
                config.set_piece(moved.move_to(self));
            }
        }
        if let Some(castle) = castle {
            config.set_piece(
                Piece::new(PieceKind::Rook, mover, castle.rook_to).with_first_move(false),
            );
        }
        config.transition_move = Some(*self);

        config.build()
    }
}

/// Short algebraic-style notation: `Nf3`, `Nxf3`, `e4`, `exd5`, `e8=Q`, `O-O`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Move::Major { piece, to } => write!(f, "{}{}", piece.kind().letter(), algebraic(to)),
            Move::MajorAttack { piece, to, .. } => {
                write!(f, "{}x{}", piece.kind().letter(), algebraic(to))
            }
            Move::Pawn { to, .. } | Move::PawnJump { to, .. } => write!(f, "{}", algebraic(to)),
            Move::PawnAttack { piece, to, .. } | Move::PawnEnPassantAttack { piece, to, .. } => {
                write!(f, "{}x{}", file_letter(piece.position()), algebraic(to))
            }
            Move::PawnPromotion {
                piece,
                to,
                attacked,
                promotion,
            } => {
                if attacked.is_some() {
                    write!(f, "{}x", file_letter(piece.position()))?;
                }
                write!(f, "{}={}", algebraic(to), promotion.letter())
            }
            Move::KingSideCastle(_) => write!(f, "O-O"),
            Move::QueenSideCastle(_) => write!(f, "O-O-O"),
            Move::Null => write!(f, "--"),
        }
    }
}

fn file_letter(sq: Square) -> char {
    algebraic(sq).chars().next().unwrap_or('-')
}

/// Find the legal move of either side going from `from` to `to`.
///
/// Scans the board's legal moves in order and returns the first match, or
/// [`Move::Null`] when nothing matches. Callers must check for the null move.
pub fn create_move(board: &Board, from: Square, to: Square) -> Move {
    board
        .all_legal_moves()
        .find(|mv| mv.current_coordinate() == Some(from) && mv.destination() == to)
        .copied()
        .unwrap_or(Move::Null)
}

#[cfg(test)]
#[path = "moves_tests.rs"]
mod moves_tests;
