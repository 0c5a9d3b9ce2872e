use super::*;
use crate::squares::square_at;

fn sq(name: &str) -> Square {
    square_at(name).unwrap()
}

#[test]
fn test_pawn_attacks_from_start() {
    let board = Board::standard();
    // d2 and f2 cover e3, nothing of White reaches e4 yet.
    assert!(is_square_attacked(board, sq("e3"), Alliance::White));
    assert!(!is_square_attacked(board, sq("e4"), Alliance::White));
    assert!(is_square_attacked(board, sq("e6"), Alliance::Black));
    assert!(!is_square_attacked(board, sq("e5"), Alliance::Black));
}

#[test]
fn test_black_pawn_attacks_downwards() {
    let board = Board::from_fen("4k3/8/8/3p4/8/8/8/4K3 w - - 0 1").unwrap();
    assert!(is_square_attacked(&board, sq("c4"), Alliance::Black));
    assert!(is_square_attacked(&board, sq("e4"), Alliance::Black));
    assert!(!is_square_attacked(&board, sq("d4"), Alliance::Black));
    assert!(!is_square_attacked(&board, sq("e6"), Alliance::Black));
}

#[test]
fn test_knight_attacks_do_not_wrap() {
    let board = Board::from_fen("4k3/8/8/8/7N/8/8/4K3 w - - 0 1").unwrap();
    for target in ["g6", "f5", "f3", "g2"] {
        assert!(is_square_attacked(&board, sq(target), Alliance::White), "{target}");
    }
    // Naive index offsets from h4 would land on these.
    assert!(!is_square_attacked(&board, sq("b2"), Alliance::White));
    assert!(!is_square_attacked(&board, sq("b4"), Alliance::White));
}

#[test]
fn test_sliders_stop_at_blockers() {
    let board = Board::from_fen("4k3/8/8/8/R2P3q/8/8/4K3 w - - 0 1").unwrap();
    assert!(is_square_attacked(&board, sq("c4"), Alliance::White));
    assert!(!is_square_attacked(&board, sq("e4"), Alliance::White));
    // Queen h4 sees e1 along the diagonal.
    assert!(is_square_attacked(&board, sq("e1"), Alliance::Black));
    assert!(board.white_player().is_in_check());
    // ...but not through the white pawn on d4.
    assert!(!is_square_attacked(&board, sq("c4"), Alliance::Black));
}

#[test]
fn test_king_attacks_adjacent_squares() {
    let board = Board::standard();
    assert!(is_square_attacked(board, sq("d1"), Alliance::White));
    assert!(!is_square_attacked(board, sq("e3"), Alliance::Black));
}
