use super::*;

#[test]
fn test_corner_names() {
    assert_eq!(algebraic(0), "a8");
    assert_eq!(algebraic(7), "h8");
    assert_eq!(algebraic(56), "a1");
    assert_eq!(algebraic(63), "h1");
    assert_eq!(algebraic(NULL_SQUARE), "--");
}

#[test]
fn test_notation_round_trip() {
    for sq in 0..NUM_SQUARES as Square {
        assert_eq!(square_at(algebraic(sq)), Some(sq));
    }
    assert_eq!(square_at("i1"), None);
    assert_eq!(square_at("a9"), None);
    assert_eq!(square_at(""), None);
}

#[test]
fn test_file_and_rank_tables() {
    for table in FILES.iter().chain(RANKS.iter()) {
        assert_eq!(table.len(), 8);
    }
    assert!(in_file(0, FILE_A));
    assert!(in_file(56, FILE_A));
    assert!(in_file(63, FILE_H));
    assert!(!in_file(63, FILE_G));
    assert!(on_rank(0, 8));
    assert!(on_rank(52, 2));
    assert!(on_rank(63, 1));
    assert!(!on_rank(8, 8));
}

#[test]
fn test_valid_squares() {
    assert!(is_valid_square(0));
    assert!(is_valid_square(63));
    assert!(!is_valid_square(-1));
    assert!(!is_valid_square(64));
    assert!(!is_valid_square(NULL_SQUARE as i16));
}

#[test]
fn test_square_set() {
    let set = SquareSet::of(&[61, 62]);
    assert_eq!(set.len(), 2);
    assert!(set.contains(61));
    assert!(!set.contains(60));
    assert!(!set.contains(NULL_SQUARE));
    let squares: Vec<Square> = set.collect();
    assert_eq!(squares, vec![61, 62]);
    assert!(SquareSet::EMPTY.is_empty());
    assert_eq!((SquareSet::from_square(1) | SquareSet::from_square(3)).len(), 2);
}
