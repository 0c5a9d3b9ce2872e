//! Per-side view of a board: legal moves, check status and the move gate.

use tracing::warn;

use crate::board::Board;
use crate::moves::{CastleMove, Move};
use crate::piece::Piece;
use crate::squares::{Square, SquareSet};
use crate::transition::{MoveStatus, MoveTransition};
use crate::types::{Alliance, PieceKind};

/// Data computed for one side when its board is built.
#[derive(Clone, Debug)]
pub(crate) struct PlayerState {
    pub(crate) alliance: Alliance,
    pub(crate) king: Piece,
    pub(crate) legal_moves: Vec<Move>,
    pub(crate) in_check: bool,
}

impl PlayerState {
    /// Placeholder used while the rest of the board is still being derived.
    pub(crate) fn empty(alliance: Alliance, king: Piece) -> Self {
        Self {
            alliance,
            king,
            legal_moves: Vec::new(),
            in_check: false,
        }
    }

    /// Standard moves plus castles, and the check flag, for `alliance` on `board`.
    pub(crate) fn establish(
        board: &Board,
        alliance: Alliance,
        king: Piece,
        mut standard_moves: Vec<Move>,
    ) -> Self {
        let in_check = board.is_attacked(king.position(), alliance.other());
        standard_moves.extend(calculate_king_castles(board, alliance, king, in_check));
        Self {
            alliance,
            king,
            legal_moves: standard_moves,
            in_check,
        }
    }
}

/// Fixed squares for one castle of one side.
struct CastleGeometry {
    king_from: Square,
    king_to: Square,
    rook_from: Square,
    rook_to: Square,
    must_be_empty: SquareSet,
    must_be_safe: SquareSet,
    king_side: bool,
}

const WHITE_CASTLES: [CastleGeometry; 2] = [
    CastleGeometry {
        king_from: 60,
        king_to: 62,
        rook_from: 63,
        rook_to: 61,
        must_be_empty: SquareSet::of(&[61, 62]),
        must_be_safe: SquareSet::of(&[61, 62]),
        king_side: true,
    },
    CastleGeometry {
        king_from: 60,
        king_to: 58,
        rook_from: 56,
        rook_to: 59,
        must_be_empty: SquareSet::of(&[57, 58, 59]),
        must_be_safe: SquareSet::of(&[58, 59]),
        king_side: false,
    },
];

const BLACK_CASTLES: [CastleGeometry; 2] = [
    CastleGeometry {
        king_from: 4,
        king_to: 6,
        rook_from: 7,
        rook_to: 5,
        must_be_empty: SquareSet::of(&[5, 6]),
        must_be_safe: SquareSet::of(&[5, 6]),
        king_side: true,
    },
    CastleGeometry {
        king_from: 4,
        king_to: 2,
        rook_from: 0,
        rook_to: 3,
        must_be_empty: SquareSet::of(&[1, 2, 3]),
        must_be_safe: SquareSet::of(&[2, 3]),
        king_side: false,
    },
];

/// Square in front of the king's home square. An enemy pawn there blocks castling.
///
/// Checked for both wings. Such a pawn already attacks a `must_be_safe` square
/// on either side, so this never removes an otherwise legal castle.
fn king_pawn_trap_square(alliance: Alliance) -> Square {
    alliance.choose(52, 12)
}

fn is_king_pawn_trap(board: &Board, king: &Piece) -> bool {
    board
        .piece(king_pawn_trap_square(king.alliance()))
        .is_some_and(|pc| pc.kind() == PieceKind::Pawn && pc.alliance() != king.alliance())
}

fn calculate_king_castles(board: &Board, alliance: Alliance, king: Piece, in_check: bool) -> Vec<Move> {
    let mut castles = Vec::new();
    if !king.is_first_move() || in_check || is_king_pawn_trap(board, &king) {
        return castles;
    }

    let enemy = alliance.other();
    for geometry in alliance.choose(&WHITE_CASTLES, &BLACK_CASTLES) {
        if king.position() != geometry.king_from {
            continue;
        }
        if geometry.must_be_empty.into_iter().any(|sq| board.piece(sq).is_some()) {
            continue;
        }
        let Some(rook) = board.piece(geometry.rook_from) else {
            continue;
        };
        if !rook.kind().is_rook() || rook.alliance() != alliance || !rook.is_first_move() {
            continue;
        }
        if geometry.must_be_safe.into_iter().any(|sq| board.is_attacked(sq, enemy)) {
            continue;
        }

        let castle = CastleMove {
            king,
            to: geometry.king_to,
            rook,
            rook_to: geometry.rook_to,
        };
        castles.push(if geometry.king_side {
            Move::KingSideCastle(castle)
        } else {
            Move::QueenSideCastle(castle)
        });
    }
    castles
}

/// One side of a board. Cheap to copy; borrows the board it belongs to.
#[derive(Clone, Copy, Debug)]
pub struct Player<'a> {
    board: &'a Board,
    state: &'a PlayerState,
}

impl<'a> Player<'a> {
    pub(crate) fn new(board: &'a Board, state: &'a PlayerState) -> Self {
        Self { board, state }
    }

    pub fn board(&self) -> &'a Board {
        self.board
    }

    pub fn alliance(&self) -> Alliance {
        self.state.alliance
    }

    pub fn king(&self) -> Piece {
        self.state.king
    }

    pub fn active_pieces(&self) -> &'a [Piece] {
        self.board.pieces(self.state.alliance)
    }

    /// Standard moves followed by castles. None of them is checked for king safety.
    pub fn legal_moves(&self) -> &'a [Move] {
        &self.state.legal_moves
    }

    pub fn opponent(&self) -> Player<'a> {
        self.board.player(self.state.alliance.other())
    }

    pub fn is_move_legal(&self, mv: &Move) -> bool {
        self.state.legal_moves.contains(mv)
    }

    pub fn is_in_check(&self) -> bool {
        self.state.in_check
    }

    pub fn is_in_check_mate(&self) -> bool {
        self.state.in_check && !self.has_escape_moves()
    }

    pub fn is_in_stale_mate(&self) -> bool {
        !self.state.in_check && !self.has_escape_moves()
    }

    /// True if at least one legal move survives [`Player::make_move`].
    pub fn has_escape_moves(&self) -> bool {
        self.state
            .legal_moves
            .iter()
            .any(|mv| self.make_move(mv).status().is_done())
    }

    pub fn is_castled(&self) -> bool {
        self.state.king.is_castled()
    }

    pub fn is_king_side_castle_capable(&self) -> bool {
        self.state.king.is_king_side_castle_capable()
    }

    pub fn is_queen_side_castle_capable(&self) -> bool {
        self.state.king.is_queen_side_castle_capable()
    }

    /// Try to play `mv` for this side.
    ///
    /// A move missing from [`Player::legal_moves`] is `IllegalMove`. A move whose
    /// resulting board has this side's king attacked is `LeavesPlayerInCheck`.
    /// Both keep the original board; only `Done` carries a new one.
    pub fn make_move(&self, mv: &Move) -> MoveTransition<'a> {
        if !self.is_move_legal(mv) {
            return MoveTransition::rejected(self.board, *mv, MoveStatus::IllegalMove);
        }
        // Capturing a king only happens on boards that were set up illegally.
        if mv.attacked_piece().is_some_and(|pc| pc.kind().is_king()) {
            return MoveTransition::rejected(self.board, *mv, MoveStatus::IllegalMove);
        }

        let candidate = match mv.execute(self.board) {
            Ok(board) => board,
            Err(err) => {
                warn!(%mv, %err, "move produced an invalid board");
                return MoveTransition::rejected(self.board, *mv, MoveStatus::IllegalMove);
            }
        };

        if candidate.player(self.state.alliance).is_in_check() {
            return MoveTransition::rejected(self.board, *mv, MoveStatus::LeavesPlayerInCheck);
        }
        MoveTransition::done(self.board, candidate, *mv)
    }
}

#[cfg(test)]
#[path = "player_tests.rs"]
mod player_tests;
