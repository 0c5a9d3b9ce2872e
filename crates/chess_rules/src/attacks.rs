//! Geometric attack detection.
//!
//! Answers "could a piece of this side capture on that square right now",
//! independently of the move lists stored on a board. Used for check detection
//! and for the squares a castling king passes over.

use crate::board::Board;
use crate::squares::{Square, file_of, row_of, square};
use crate::types::{Alliance, PieceKind};

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// True if any piece of `by` attacks `target` on `board`.
///
/// Deltas are (file, row) steps with rows counted from the top of the board.
pub fn is_square_attacked(board: &Board, target: Square, by: Alliance) -> bool {
    let tf = file_of(target) as i8;
    let tr = row_of(target) as i8;

    let holds = |sq: Option<Square>, kinds: &[PieceKind]| {
        sq.and_then(|s| board.piece(s))
            .is_some_and(|pc| pc.alliance() == by && kinds.contains(&pc.kind()))
    };

    // A pawn attacks diagonally forward, so the attacker sits one row behind the
    // target from its own point of view.
    let pawn_row = tr - by.direction();
    if holds(square(tf - 1, pawn_row), &[PieceKind::Pawn])
        || holds(square(tf + 1, pawn_row), &[PieceKind::Pawn])
    {
        return true;
    }

    if KNIGHT_DELTAS
        .iter()
        .any(|(df, dr)| holds(square(tf + df, tr + dr), &[PieceKind::Knight]))
    {
        return true;
    }

    if KING_DELTAS
        .iter()
        .any(|(df, dr)| holds(square(tf + df, tr + dr), &[PieceKind::King]))
    {
        return true;
    }

    ray_hits(board, tf, tr, &DIAGONALS, by, &[PieceKind::Bishop, PieceKind::Queen])
        || ray_hits(board, tf, tr, &ORTHOGONALS, by, &[PieceKind::Rook, PieceKind::Queen])
}

fn ray_hits(
    board: &Board,
    tf: i8,
    tr: i8,
    dirs: &[(i8, i8)],
    by: Alliance,
    sliders: &[PieceKind],
) -> bool {
    for (df, dr) in dirs {
        let mut f = tf + df;
        let mut r = tr + dr;
        while let Some(sq) = square(f, r) {
            if let Some(pc) = board.piece(sq) {
                if pc.alliance() == by && sliders.contains(&pc.kind()) {
                    return true;
                }
                break;
            }
            f += df;
            r += dr;
        }
    }
    false
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
