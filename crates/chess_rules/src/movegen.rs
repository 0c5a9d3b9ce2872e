//! Per-piece move generation.
//!
//! Every piece kind walks a fixed list of square offsets. Sliding pieces repeat an
//! offset until they leave the board, hit a friendly piece, or capture; stepping
//! pieces try each offset once. Offsets that would wrap around the a- or h-file are
//! dropped by column guards before the destination is computed.

use crate::board::Board;
use crate::moves::Move;
use crate::piece::Piece;
use crate::squares::{FILE_A, FILE_B, FILE_G, FILE_H, Square, in_file, is_valid_square};
use crate::types::PieceKind;

const KNIGHT_OFFSETS: [i8; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];
const KING_OFFSETS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];
const BISHOP_OFFSETS: [i8; 4] = [-9, -7, 7, 9];
const ROOK_OFFSETS: [i8; 4] = [-8, -1, 1, 8];
const QUEEN_OFFSETS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

/// Push every move of `piece` on `board` into `out`.
pub(crate) fn piece_moves(piece: &Piece, board: &Board, out: &mut Vec<Move>) {
    match piece.kind() {
        PieceKind::Pawn => gen_pawn(piece, board, out),
        PieceKind::Knight => gen_stepper(piece, board, &KNIGHT_OFFSETS, is_knight_exclusion, out),
        PieceKind::Bishop => gen_slider(piece, board, &BISHOP_OFFSETS, out),
        PieceKind::Rook => gen_slider(piece, board, &ROOK_OFFSETS, out),
        PieceKind::Queen => gen_slider(piece, board, &QUEEN_OFFSETS, out),
        PieceKind::King => gen_stepper(piece, board, &KING_OFFSETS, is_edge_exclusion, out),
    }
}

fn offset_square(from: Square, offset: i8) -> Option<Square> {
    let dest = from as i16 + offset as i16;
    is_valid_square(dest).then_some(dest as Square)
}

/// Offsets that step one column left or right wrap around from the a- and h-files.
fn is_edge_exclusion(from: Square, offset: i8) -> bool {
    (in_file(from, FILE_A) && matches!(offset, -9 | -1 | 7))
        || (in_file(from, FILE_H) && matches!(offset, -7 | 1 | 9))
}

fn is_knight_exclusion(from: Square, offset: i8) -> bool {
    (in_file(from, FILE_A) && matches!(offset, -17 | -10 | 6 | 15))
        || (in_file(from, FILE_B) && matches!(offset, -10 | 6))
        || (in_file(from, FILE_G) && matches!(offset, -6 | 10))
        || (in_file(from, FILE_H) && matches!(offset, -15 | -6 | 10 | 17))
}

fn gen_stepper(
    piece: &Piece,
    board: &Board,
    offsets: &[i8],
    excluded: fn(Square, i8) -> bool,
    out: &mut Vec<Move>,
) {
    let from = piece.position();
    for &offset in offsets {
        if excluded(from, offset) {
            continue;
        }
        let Some(to) = offset_square(from, offset) else {
            continue;
        };
        match board.piece(to) {
            None => out.push(Move::Major { piece: *piece, to }),
            Some(occupant) if occupant.alliance() != piece.alliance() => {
                out.push(Move::MajorAttack {
                    piece: *piece,
                    to,
                    attacked: occupant,
                })
            }
            _ => {}
        }
    }
}

fn gen_slider(piece: &Piece, board: &Board, offsets: &[i8], out: &mut Vec<Move>) {
    for &offset in offsets {
        let mut current = piece.position();
        loop {
            if is_edge_exclusion(current, offset) {
                break;
            }
            let Some(to) = offset_square(current, offset) else {
                break;
            };
            match board.piece(to) {
                None => out.push(Move::Major { piece: *piece, to }),
                Some(occupant) => {
                    if occupant.alliance() != piece.alliance() {
                        out.push(Move::MajorAttack {
                            piece: *piece,
                            to,
                            attacked: occupant,
                        });
                    }
                    break;
                }
            }
            current = to;
        }
    }
}

fn push_promotions(pawn: &Piece, to: Square, attacked: Option<Piece>, out: &mut Vec<Move>) {
    for promotion in PieceKind::PROMOTIONS {
        out.push(Move::PawnPromotion {
            piece: *pawn,
            to,
            attacked,
            promotion,
        });
    }
}

fn gen_pawn(pawn: &Piece, board: &Board, out: &mut Vec<Move>) {
    let from = pawn.position();
    let alliance = pawn.alliance();
    let dir = alliance.direction();

    // Single step, and the double step through it.
    if let Some(to) = offset_square(from, 8 * dir)
        && board.piece(to).is_none()
    {
        if alliance.is_pawn_promotion_square(to) {
            push_promotions(pawn, to, None, out);
        } else {
            out.push(Move::Pawn { piece: *pawn, to });
        }

        if pawn.is_first_move()
            && alliance.is_pawn_home_square(from)
            && let Some(to2) = offset_square(from, 16 * dir)
            && board.piece(to2).is_none()
        {
            out.push(Move::PawnJump {
                piece: *pawn,
                to: to2,
            });
        }
    }

    // Diagonals. Offset 7 heads towards the h-file for White and the a-file for
    // Black; offset 9 the other way round. The en-passant victim sits beside the
    // pawn on the same side as the diagonal.
    let diagonals = [
        (7, alliance.choose(FILE_H, FILE_A), alliance.opposite_direction()),
        (9, alliance.choose(FILE_A, FILE_H), alliance.direction()),
    ];
    for (offset, blocked_file, side_step) in diagonals {
        if in_file(from, blocked_file) {
            continue;
        }
        let Some(to) = offset_square(from, offset * dir) else {
            continue;
        };
        match board.piece(to) {
            Some(occupant) if occupant.alliance() != alliance => {
                if alliance.is_pawn_promotion_square(to) {
                    push_promotions(pawn, to, Some(occupant), out);
                } else {
                    out.push(Move::PawnAttack {
                        piece: *pawn,
                        to,
                        attacked: occupant,
                    });
                }
            }
            Some(_) => {}
            None => {
                if let Some(victim) = board.en_passant_pawn()
                    && victim.alliance() != alliance
                    && offset_square(from, side_step) == Some(victim.position())
                {
                    out.push(Move::PawnEnPassantAttack {
                        piece: *pawn,
                        to,
                        attacked: victim,
                    });
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
