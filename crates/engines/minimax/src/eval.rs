//! Board scoring used at the leaves of the search.

use chess_rules::{Board, Player};

/// Scores a board from White's point of view: higher is better for White.
///
/// `depth` is the number of plies the search still had left when it stopped at
/// this board, so evaluators can prefer quicker mates.
pub trait BoardEvaluator: Send {
    fn evaluate(&self, board: &Board, depth: u32) -> i32;
}

const CHECK_BONUS: i32 = 50;
const CHECK_MATE_BONUS: i32 = 10_000;
const DEPTH_BONUS: i32 = 100;
const CASTLE_BONUS: i32 = 60;
/// Deeper mates all score alike; keeps the mate term well inside `i32`.
const MAX_BONUS_DEPTH: u32 = 1_000;

/// Material, mobility, check, mate and castling terms per side, White minus Black.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardBoardEvaluator;

impl BoardEvaluator for StandardBoardEvaluator {
    fn evaluate(&self, board: &Board, depth: u32) -> i32 {
        score_player(board.white_player(), depth) - score_player(board.black_player(), depth)
    }
}

fn score_player(player: Player<'_>, depth: u32) -> i32 {
    piece_value(player) + mobility(player) + check(player) + check_mate(player, depth) + castled(player)
}

fn piece_value(player: Player<'_>) -> i32 {
    player.active_pieces().iter().map(|piece| piece.value()).sum()
}

fn mobility(player: Player<'_>) -> i32 {
    player.legal_moves().len() as i32
}

fn check(player: Player<'_>) -> i32 {
    if player.opponent().is_in_check() {
        CHECK_BONUS
    } else {
        0
    }
}

fn check_mate(player: Player<'_>, depth: u32) -> i32 {
    if player.opponent().is_in_check_mate() {
        CHECK_MATE_BONUS * depth_bonus(depth)
    } else {
        0
    }
}

fn depth_bonus(depth: u32) -> i32 {
    if depth == 0 {
        1
    } else {
        DEPTH_BONUS * depth.min(MAX_BONUS_DEPTH) as i32
    }
}

fn castled(player: Player<'_>) -> i32 {
    if player.is_castled() { CASTLE_BONUS } else { 0 }
}

/// Material balance only. Cheap, and enough to spot hanging pieces.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialEvaluator;

impl BoardEvaluator for MaterialEvaluator {
    fn evaluate(&self, board: &Board, _depth: u32) -> i32 {
        piece_value(board.white_player()) - piece_value(board.black_player())
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
