use super::*;
use crate::squares::square_at;
use crate::types::Alliance;

fn sq(name: &str) -> Square {
    square_at(name).unwrap()
}

fn find(board: &Board, from: &str, to: &str) -> Move {
    create_move(board, sq(from), sq(to))
}

#[test]
fn test_create_move_finds_pawn_jump() {
    let board = Board::standard();
    let mv = find(board, "e2", "e4");
    assert!(matches!(mv, Move::PawnJump { .. }));
    assert_eq!(mv.current_coordinate(), Some(sq("e2")));
    assert_eq!(mv.destination(), sq("e4"));
}

#[test]
fn test_create_move_without_match_is_null() {
    let mv = find(Board::standard(), "e2", "e5");
    assert!(mv.is_null());
    assert_eq!(mv.destination(), NULL_SQUARE);
    assert_eq!(mv.current_coordinate(), None);
}

#[test]
#[should_panic]
fn test_executing_null_move_panics() {
    let _ = Move::Null.execute(Board::standard());
}

#[test]
fn test_execute_leaves_source_board_intact() {
    let board = Board::standard();
    let mv = find(board, "e2", "e4");
    let next = mv.execute(board).unwrap();

    assert_eq!(board.piece(sq("e2")).map(|p| p.kind()), Some(PieceKind::Pawn));
    assert!(board.piece(sq("e4")).is_none());

    assert!(next.piece(sq("e2")).is_none());
    let pawn = next.piece(sq("e4")).unwrap();
    assert!(!pawn.is_first_move());
    assert_eq!(next.en_passant_pawn(), Some(pawn));
    assert_eq!(next.current_player().alliance(), Alliance::Black);
    assert_eq!(next.transition_move(), mv);
}

#[test]
fn test_en_passant_pawn_lasts_one_move() {
    let board = Board::standard();
    let after_jump = find(board, "e2", "e4").execute(board).unwrap();
    let after_reply = find(&after_jump, "g8", "f6").execute(&after_jump).unwrap();
    assert!(after_reply.en_passant_pawn().is_none());
}

#[test]
fn test_en_passant_capture() {
    let board = Board::from_fen("4k3/8/8/8/2p5/8/3P4/4K3 w - - 0 1").unwrap();
    let jumped = find(&board, "d2", "d4").execute(&board).unwrap();

    let black = jumped.black_player();
    let en_passant: Vec<&Move> = black
        .legal_moves()
        .iter()
        .filter(|mv| matches!(mv, Move::PawnEnPassantAttack { .. }))
        .collect();
    assert_eq!(en_passant.len(), 1);
    assert_eq!(en_passant[0].destination(), sq("d3"));
    assert_eq!(
        en_passant[0].attacked_piece().map(|p| p.position()),
        Some(sq("d4"))
    );

    let captured = black.make_move(en_passant[0]).into_board().unwrap();
    assert!(captured.piece(sq("d4")).is_none());
    assert_eq!(
        captured.piece(sq("d3")).map(|p| (p.kind(), p.alliance())),
        Some((PieceKind::Pawn, Alliance::Black))
    );
    assert_eq!(captured.white_pieces().len(), 1);
}

#[test]
fn test_no_en_passant_without_jump() {
    // Same pawns, but the white pawn arrived by single steps.
    let board = Board::from_fen("4k3/8/8/8/2pP4/8/8/4K3 b - - 0 1").unwrap();
    assert!(
        !board
            .black_player()
            .legal_moves()
            .iter()
            .any(|mv| matches!(mv, Move::PawnEnPassantAttack { .. }))
    );
}

#[test]
fn test_promotion_replaces_pawn() {
    let board = Board::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let queen = board
        .white_player()
        .legal_moves()
        .iter()
        .find(|mv| mv.promotion() == Some(PieceKind::Queen))
        .copied()
        .unwrap();
    let next = queen.execute(&board).unwrap();
    let promoted = next.piece(sq("a8")).unwrap();
    assert_eq!(promoted.kind(), PieceKind::Queen);
    assert_eq!(promoted.alliance(), Alliance::White);
    assert!(!next.white_pieces().iter().any(|p| p.kind() == PieceKind::Pawn));
    assert!(next.black_player().is_in_check());
}

#[test]
fn test_king_side_castle_execution() {
    let board =
        Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPP1PPP/RNBQK2R w KQkq - 0 1").unwrap();
    let white = board.white_player();
    let castle = white
        .legal_moves()
        .iter()
        .find(|mv| matches!(mv, Move::KingSideCastle(_)))
        .copied()
        .unwrap();
    assert_eq!(castle.destination(), sq("g1"));

    let next = white.make_move(&castle).into_board().unwrap();
    let king = next.piece(sq("g1")).unwrap();
    assert!(king.kind().is_king());
    assert!(king.is_castled());
    assert!(next.piece(sq("f1")).is_some_and(|p| p.kind().is_rook()));
    assert!(next.piece(sq("h1")).is_none());
    assert!(next.piece(sq("e1")).is_none());
    assert_eq!(next.current_player().alliance(), Alliance::Black);
    assert!(next.white_player().is_castled());
    assert!(!next.white_player().is_king_side_castle_capable());
}

#[test]
fn test_notation() {
    let board = Board::standard();
    assert_eq!(find(board, "g1", "f3").to_string(), "Nf3");
    assert_eq!(find(board, "e2", "e4").to_string(), "e4");
    assert_eq!(Move::Null.to_string(), "--");

    let capture = Board::from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1").unwrap();
    assert_eq!(find(&capture, "e4", "d5").to_string(), "exd5");

    let rook = Board::from_fen("r3k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
    assert_eq!(find(&rook, "a1", "a8").to_string(), "Rxa8");

    let promo = Board::from_fen("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let names: Vec<String> = promo
        .white_player()
        .legal_moves()
        .iter()
        .filter(|mv| mv.promotion().is_some())
        .map(|mv| mv.to_string())
        .collect();
    assert!(names.contains(&"a8=Q".to_string()));
    assert!(names.contains(&"axb8=N".to_string()));

    let castles =
        Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let mut castle_names: Vec<String> = castles
        .white_player()
        .legal_moves()
        .iter()
        .filter(|mv| mv.is_castling())
        .map(|mv| mv.to_string())
        .collect();
    castle_names.sort();
    assert_eq!(castle_names, vec!["O-O".to_string(), "O-O-O".to_string()]);
}
