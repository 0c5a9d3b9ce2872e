//! Plain minimax over immutable boards. No pruning.

use chess_rules::{Alliance, Board, Move, TimeControl};
use tracing::trace;

use crate::eval::BoardEvaluator;

/// Result of one root search.
#[derive(Debug, Clone, Copy)]
pub struct SearchOutcome {
    /// [`Move::Null`] when no move could be played or time ran out first.
    pub best_move: Move,
    /// Value of `best_move` from White's point of view.
    pub value: i32,
    pub boards_evaluated: u64,
    /// True if the time control cut the search short.
    pub stopped: bool,
}

struct Searcher<'e, E: BoardEvaluator> {
    evaluator: &'e E,
    time_control: &'e TimeControl,
    boards_evaluated: u64,
}

/// Pick the best move for the side to move on `board`.
///
/// White takes the highest value, Black the lowest. The first move to reach a
/// new best value keeps it; later moves of equal value do not replace it.
/// Moves whose transition is not `Done` are skipped. A depth of 0 searches
/// like a depth of 1.
pub fn pick_best_move<E: BoardEvaluator>(
    board: &Board,
    depth: u32,
    evaluator: &E,
    time_control: &TimeControl,
) -> SearchOutcome {
    let mut searcher = Searcher {
        evaluator,
        time_control,
        boards_evaluated: 0,
    };
    let player = board.current_player();
    let maximizing = player.alliance() == Alliance::White;

    let mut best_move = Move::Null;
    let mut best_value = if maximizing { i32::MIN } else { i32::MAX };
    let mut stopped = false;

    for mv in player.legal_moves() {
        if time_control.check_time() {
            stopped = true;
            break;
        }
        let Some(next) = player.make_move(mv).into_board() else {
            continue;
        };

        let value = if maximizing {
            searcher.min(&next, depth.saturating_sub(1))
        } else {
            searcher.max(&next, depth.saturating_sub(1))
        };
        // A subtree cut short by the clock has no trustworthy value.
        if time_control.is_stopped() {
            stopped = true;
            break;
        }
        trace!(%mv, value, "root move");

        if (maximizing && value > best_value) || (!maximizing && value < best_value) {
            best_value = value;
            best_move = *mv;
        }
    }

    SearchOutcome {
        best_move,
        value: if best_move.is_null() { 0 } else { best_value },
        boards_evaluated: searcher.boards_evaluated,
        stopped,
    }
}

impl<E: BoardEvaluator> Searcher<'_, E> {
    fn evaluate(&mut self, board: &Board, depth: u32) -> i32 {
        self.boards_evaluated += 1;
        self.evaluator.evaluate(board, depth)
    }

    /// Value of `board` with White to choose.
    fn max(&mut self, board: &Board, depth: u32) -> i32 {
        self.walk(board, depth, true)
    }

    /// Value of `board` with Black to choose.
    fn min(&mut self, board: &Board, depth: u32) -> i32 {
        self.walk(board, depth, false)
    }

    fn walk(&mut self, board: &Board, depth: u32, maximizing: bool) -> i32 {
        if depth == 0 {
            return self.evaluate(board, depth);
        }

        let player = board.current_player();
        let mut best: Option<i32> = None;
        for mv in player.legal_moves() {
            if self.time_control.check_time() {
                break;
            }
            let Some(next) = player.make_move(mv).into_board() else {
                continue;
            };
            let value = if maximizing {
                self.min(&next, depth - 1)
            } else {
                self.max(&next, depth - 1)
            };
            best = Some(match best {
                Some(current) if maximizing => current.max(value),
                Some(current) => current.min(value),
                None => value,
            });
        }

        // No move survived: checkmate or stalemate for the side to move.
        match best {
            Some(value) => value,
            None if self.time_control.is_stopped() => 0,
            None => self.evaluate(board, depth),
        }
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
