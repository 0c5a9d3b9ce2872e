use super::*;

#[test]
fn test_start_position_is_balanced() {
    let board = Board::standard();
    assert_eq!(StandardBoardEvaluator.evaluate(board, 0), 0);
    assert_eq!(MaterialEvaluator.evaluate(board, 3), 0);
}

#[test]
fn test_material_counts_for_white() {
    // White has an extra rook.
    let board = Board::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
    assert_eq!(MaterialEvaluator.evaluate(&board, 0), 500);
    assert!(StandardBoardEvaluator.evaluate(&board, 0) > 500);
}

#[test]
fn test_material_counts_for_black() {
    let board = Board::from_fen("3qk3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    assert_eq!(MaterialEvaluator.evaluate(&board, 0), -900);
}

#[test]
fn test_check_bonus() {
    let checking = Board::from_fen("k7/8/8/8/8/8/8/R5K1 b - - 0 1").unwrap();
    let quiet = Board::from_fen("k7/8/8/8/8/8/8/1R4K1 b - - 0 1").unwrap();
    assert_eq!(check(checking.white_player()), CHECK_BONUS);
    assert_eq!(check(checking.black_player()), 0);
    assert_eq!(check(quiet.white_player()), 0);
    assert!(!checking.black_player().is_in_check_mate());
}

#[test]
fn test_check_mate_bonus_grows_with_depth() {
    let mated =
        Board::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3").unwrap();
    let at_leaf = StandardBoardEvaluator.evaluate(&mated, 0);
    let early = StandardBoardEvaluator.evaluate(&mated, 2);
    assert!(at_leaf < -CHECK_MATE_BONUS / 2);
    assert_eq!(at_leaf - early, CHECK_MATE_BONUS * 200 - CHECK_MATE_BONUS);
}

#[test]
fn test_castled_bonus() {
    let board = Board::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1").unwrap();
    let castle = *board
        .white_player()
        .legal_moves()
        .iter()
        .find(|mv| mv.is_castling())
        .unwrap();
    let next = board.white_player().make_move(&castle).into_board().unwrap();
    assert!(next.white_player().is_castled());
    assert_eq!(castled(next.white_player()), CASTLE_BONUS);
    assert_eq!(castled(next.black_player()), 0);
}

#[test]
fn test_depth_bonus() {
    assert_eq!(depth_bonus(0), 1);
    assert_eq!(depth_bonus(1), 100);
    assert_eq!(depth_bonus(3), 300);
}

#[test]
fn test_depth_bonus_is_capped() {
    let cap = depth_bonus(MAX_BONUS_DEPTH);
    assert_eq!(depth_bonus(MAX_BONUS_DEPTH + 1), cap);
    assert_eq!(depth_bonus(u32::MAX), cap);
    // A mate at any depth still leaves room for every other term.
    assert!(CHECK_MATE_BONUS.checked_mul(cap).is_some_and(|v| v < i32::MAX / 2));
}

#[test]
fn test_mated_board_scores_at_huge_depth() {
    // Fool's mate: White is mated.
    let board = Board::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3").unwrap();
    assert!(board.white_player().is_in_check_mate());
    let deep = StandardBoardEvaluator.evaluate(&board, u32::MAX);
    assert_eq!(deep, StandardBoardEvaluator.evaluate(&board, MAX_BONUS_DEPTH));
    assert!(deep < 0);
}
