//! Forsyth-Edwards text setup, used by tests and for loading arbitrary positions.
//!
//! Only the first four fields matter. Move counters are accepted and ignored.

use crate::board::{Board, BoardConfig};
use crate::error::BoardError;
use crate::piece::Piece;
use crate::squares::{Square, square, square_at};
use crate::types::{Alliance, PieceKind};

/// King home, rook home and FEN letter for each castle right.
const CASTLE_RIGHTS: [(char, Alliance, Square, Square); 4] = [
    ('K', Alliance::White, 60, 63),
    ('Q', Alliance::White, 60, 56),
    ('k', Alliance::Black, 4, 7),
    ('q', Alliance::Black, 4, 0),
];

impl Board {
    /// Build a board from a FEN string.
    ///
    /// Pawns standing on their home rank may still jump. Kings and rooks count as
    /// unmoved only where the castling field grants a right.
    pub fn from_fen(fen: &str) -> Result<Board, BoardError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(BoardError::InvalidSetup(format!(
                "expected at least 4 fields, got {}",
                parts.len()
            )));
        }

        let mover = match parts[1] {
            "w" => Alliance::White,
            "b" => Alliance::Black,
            other => {
                return Err(BoardError::InvalidSetup(format!(
                    "invalid side to move: {other}"
                )));
            }
        };

        let mut config = BoardConfig::new(mover);
        parse_placement(parts[0], &mut config)?;
        apply_castle_rights(parts[2], &mut config)?;

        if parts[3] != "-" {
            let target = square_at(parts[3])
                .ok_or_else(|| BoardError::InvalidSquare(parts[3].to_string()))?;
            // The pawn that just jumped belongs to the side that is not on move.
            let jumper = mover.other();
            let pawn_sq = target as i16 + 8 * jumper.direction() as i16;
            let pawn = config
                .placement
                .get(pawn_sq as usize)
                .copied()
                .flatten()
                .filter(|pc| pc.kind() == PieceKind::Pawn && pc.alliance() == jumper)
                .ok_or_else(|| {
                    BoardError::InvalidSetup(format!("no pawn behind en passant square {}", parts[3]))
                })?;
            config.en_passant_pawn = Some(pawn);
        }

        config.build()
    }
}

fn parse_placement(placement: &str, config: &mut BoardConfig) -> Result<(), BoardError> {
    let rows: Vec<&str> = placement.split('/').collect();
    if rows.len() != 8 {
        return Err(BoardError::InvalidSetup(format!(
            "expected 8 ranks, got {}",
            rows.len()
        )));
    }

    // FEN lists rank 8 first, which is row 0 here.
    for (row, row_str) in rows.iter().enumerate() {
        let mut file: i8 = 0;
        for ch in row_str.chars() {
            if let Some(skip) = ch.to_digit(10) {
                file += skip as i8;
            } else {
                let kind = PieceKind::from_letter(ch)
                    .ok_or_else(|| BoardError::InvalidSetup(format!("invalid piece: {ch}")))?;
                let alliance = if ch.is_ascii_uppercase() {
                    Alliance::White
                } else {
                    Alliance::Black
                };
                let sq = square(file, row as i8).ok_or_else(|| {
                    BoardError::InvalidSetup(format!("too many files in rank {}", 8 - row))
                })?;
                let first_move = kind == PieceKind::Pawn && alliance.is_pawn_home_square(sq);
                config.set_piece(Piece::new(kind, alliance, sq).with_first_move(first_move));
                file += 1;
            }
            if file > 8 {
                return Err(BoardError::InvalidSetup(format!(
                    "too many files in rank {}",
                    8 - row
                )));
            }
        }
        if file != 8 {
            return Err(BoardError::InvalidSetup(format!(
                "not enough files in rank {}",
                8 - row
            )));
        }
    }
    Ok(())
}

fn apply_castle_rights(field: &str, config: &mut BoardConfig) -> Result<(), BoardError> {
    if field == "-" {
        return Ok(());
    }
    for ch in field.chars() {
        let &(_, alliance, king_sq, rook_sq) = CASTLE_RIGHTS
            .iter()
            .find(|(letter, ..)| *letter == ch)
            .ok_or_else(|| BoardError::InvalidSetup(format!("invalid castling right: {ch}")))?;

        // A right without its king or rook in place grants nothing.
        let king = config.placement[king_sq as usize]
            .filter(|pc| pc.kind().is_king() && pc.alliance() == alliance);
        let rook = config.placement[rook_sq as usize]
            .filter(|pc| pc.kind().is_rook() && pc.alliance() == alliance);
        if let (Some(king), Some(rook)) = (king, rook) {
            config.set_piece(king.with_first_move(true));
            config.set_piece(rook.with_first_move(true));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "fen_tests.rs"]
mod fen_tests;
