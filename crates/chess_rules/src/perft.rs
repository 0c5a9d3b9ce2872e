use crate::board::Board;

/// Perft node count.
/// Counts every board reachable from `board` in exactly `depth` moves that the
/// side to move is allowed to make.
pub fn perft(board: &Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let player = board.current_player();
    let mut nodes = 0u64;
    for mv in player.legal_moves() {
        let transition = player.make_move(mv);
        if let Some(next) = transition.into_board() {
            nodes += if depth == 1 { 1 } else { perft(&next, depth - 1) };
        }
    }
    nodes
}

/// Perft split by root move, in notation. Handy when hunting a count mismatch.
pub fn divide(board: &Board, depth: u32) -> Vec<(String, u64)> {
    let player = board.current_player();
    player
        .legal_moves()
        .iter()
        .filter_map(|mv| {
            let next = player.make_move(mv).into_board()?;
            Some((mv.to_string(), perft(&next, depth.saturating_sub(1))))
        })
        .collect()
}
