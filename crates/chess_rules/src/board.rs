use std::fmt;
use std::sync::OnceLock;

use crate::attacks::is_square_attacked;
use crate::error::BoardError;
use crate::moves::Move;
use crate::piece::Piece;
use crate::player::{Player, PlayerState};
use crate::squares::{NUM_SQUARES, SQUARES_PER_ROW, Square};
use crate::types::{Alliance, PieceKind};

/// Everything needed to build a [`Board`].
///
/// Fill in the placement and the side to move, then call [`BoardConfig::build`].
#[derive(Clone, Debug)]
pub struct BoardConfig {
    pub placement: [Option<Piece>; NUM_SQUARES],
    pub move_maker: Alliance,
    /// Pawn that just made a double step, if any.
    pub en_passant_pawn: Option<Piece>,
    /// Move that produced the board, if any.
    pub transition_move: Option<Move>,
}

impl BoardConfig {
    pub fn new(move_maker: Alliance) -> Self {
        Self {
            placement: [None; NUM_SQUARES],
            move_maker,
            en_passant_pawn: None,
            transition_move: None,
        }
    }

    /// Put `piece` on its own square, replacing whatever stood there.
    pub fn set_piece(&mut self, piece: Piece) -> &mut Self {
        self.placement[piece.position() as usize] = Some(piece);
        self
    }

    /// Derive active pieces and both players' legal moves.
    pub fn build(self) -> Result<Board, BoardError> {
        let white_pieces = active_pieces(&self.placement, Alliance::White);
        let black_pieces = active_pieces(&self.placement, Alliance::Black);
        let white_king = find_king(&white_pieces, Alliance::White)?;
        let black_king = find_king(&black_pieces, Alliance::Black)?;

        let mut board = Board {
            placement: self.placement,
            white_pieces,
            black_pieces,
            white_player: PlayerState::empty(Alliance::White, white_king),
            black_player: PlayerState::empty(Alliance::Black, black_king),
            move_maker: self.move_maker,
            en_passant_pawn: self.en_passant_pawn,
            transition_move: self.transition_move.unwrap_or(Move::Null),
        };

        let white_standard = board.standard_moves(Alliance::White);
        let black_standard = board.standard_moves(Alliance::Black);
        let white_player = PlayerState::establish(&board, Alliance::White, white_king, white_standard);
        let black_player = PlayerState::establish(&board, Alliance::Black, black_king, black_standard);
        board.white_player = white_player;
        board.black_player = black_player;

        Ok(board)
    }
}

fn active_pieces(placement: &[Option<Piece>; NUM_SQUARES], alliance: Alliance) -> Vec<Piece> {
    placement
        .iter()
        .flatten()
        .filter(|piece| piece.alliance() == alliance)
        .copied()
        .collect()
}

fn find_king(pieces: &[Piece], alliance: Alliance) -> Result<Piece, BoardError> {
    let mut kings = pieces.iter().filter(|piece| piece.kind().is_king());
    match (kings.next(), kings.next()) {
        (Some(king), None) => Ok(*king),
        (None, _) => Err(BoardError::MissingKing(alliance)),
        (Some(_), Some(_)) => Err(BoardError::DuplicateKing(alliance)),
    }
}

/// An immutable position snapshot.
///
/// A board never changes after construction. Playing a move builds a new board
/// and leaves this one intact, which is what lets a search hold on to it.
#[derive(Clone, Debug)]
pub struct Board {
    placement: [Option<Piece>; NUM_SQUARES],
    white_pieces: Vec<Piece>,
    black_pieces: Vec<Piece>,
    white_player: PlayerState,
    black_player: PlayerState,
    move_maker: Alliance,
    en_passant_pawn: Option<Piece>,
    transition_move: Move,
}

static STANDARD_BOARD: OnceLock<Board> = OnceLock::new();

impl Board {
    /// The standard starting position, White to move. Built once per process.
    pub fn standard() -> &'static Board {
        STANDARD_BOARD.get_or_init(|| {
            standard_config()
                .build()
                .expect("standard layout has both kings")
        })
    }

    pub fn piece(&self, sq: Square) -> Option<Piece> {
        self.placement.get(sq as usize).copied().flatten()
    }

    pub fn white_pieces(&self) -> &[Piece] {
        &self.white_pieces
    }

    pub fn black_pieces(&self) -> &[Piece] {
        &self.black_pieces
    }

    /// Active pieces of one side.
    pub fn pieces(&self, alliance: Alliance) -> &[Piece] {
        alliance.choose(self.white_pieces.as_slice(), self.black_pieces.as_slice())
    }

    pub fn all_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.white_pieces.iter().chain(self.black_pieces.iter())
    }

    pub fn white_player(&self) -> Player<'_> {
        Player::new(self, &self.white_player)
    }

    pub fn black_player(&self) -> Player<'_> {
        Player::new(self, &self.black_player)
    }

    pub fn player(&self, alliance: Alliance) -> Player<'_> {
        alliance.choose(self.white_player(), self.black_player())
    }

    /// The side to move.
    pub fn current_player(&self) -> Player<'_> {
        self.player(self.move_maker)
    }

    pub fn en_passant_pawn(&self) -> Option<Piece> {
        self.en_passant_pawn
    }

    /// Move that produced this board; [`Move::Null`] for a freshly set-up board.
    pub fn transition_move(&self) -> Move {
        self.transition_move
    }

    /// Legal moves of White followed by those of Black.
    pub fn all_legal_moves(&self) -> impl Iterator<Item = &Move> {
        self.white_player
            .legal_moves
            .iter()
            .chain(self.black_player.legal_moves.iter())
    }

    /// True if `sq` is attacked by any piece of `by`.
    pub fn is_attacked(&self, sq: Square, by: Alliance) -> bool {
        is_square_attacked(self, sq, by)
    }

    /// The side to move is checkmated or stalemated.
    pub fn is_end_game(&self) -> bool {
        let player = self.current_player();
        player.is_in_check_mate() || player.is_in_stale_mate()
    }

    fn standard_moves(&self, alliance: Alliance) -> Vec<Move> {
        self.pieces(alliance)
            .iter()
            .flat_map(|piece| piece.calculate_legal_moves(self))
            .collect()
    }
}

fn standard_config() -> BoardConfig {
    let back = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];
    let mut config = BoardConfig::new(Alliance::White);
    for (file, &kind) in back.iter().enumerate() {
        let file = file as Square;
        config.set_piece(Piece::new(kind, Alliance::Black, file));
        config.set_piece(Piece::new(PieceKind::Pawn, Alliance::Black, 8 + file));
        config.set_piece(Piece::new(PieceKind::Pawn, Alliance::White, 48 + file));
        config.set_piece(Piece::new(kind, Alliance::White, 56 + file));
    }
    config
}

/// Eight rows of three-character cells: upper case White, lower case Black, `-` empty.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sq in 0..NUM_SQUARES as Square {
            match self.piece(sq) {
                Some(piece) => write!(f, "{:>3}", piece.to_string())?,
                None => write!(f, "{:>3}", "-")?,
            }
            if (sq + 1) % SQUARES_PER_ROW == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
