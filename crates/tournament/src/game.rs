//! Record of a single game: what was played and what was taken.

use chess_rules::{Alliance, Move, PieceKind};
use serde::{Deserialize, Serialize};

/// Winner of a game, from the board's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    WhiteWins,
    BlackWins,
    Draw,
}

impl GameOutcome {
    pub fn win_for(alliance: Alliance) -> Self {
        alliance.choose(GameOutcome::WhiteWins, GameOutcome::BlackWins)
    }

    /// PGN-style result string.
    pub fn as_str(self) -> &'static str {
        match self {
            GameOutcome::WhiteWins => "1-0",
            GameOutcome::BlackWins => "0-1",
            GameOutcome::Draw => "1/2-1/2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    Checkmate,
    Stalemate,
    /// The half-move limit was reached.
    MoveLimit,
    /// A strategy offered a move that could not be played.
    Forfeit,
}

/// Pieces lost by each side, in the order they were captured.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TakenPieces {
    pub white: Vec<PieceKind>,
    pub black: Vec<PieceKind>,
}

impl TakenPieces {
    pub fn of(&self, alliance: Alliance) -> &[PieceKind] {
        alliance.choose(self.white.as_slice(), self.black.as_slice())
    }

    /// Material lost by `alliance`.
    pub fn value(&self, alliance: Alliance) -> i32 {
        self.of(alliance).iter().map(|kind| kind.value()).sum()
    }

    fn push(&mut self, alliance: Alliance, kind: PieceKind) {
        match alliance {
            Alliance::White => self.white.push(kind),
            Alliance::Black => self.black.push(kind),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub white: String,
    pub black: String,
    /// Every played move in notation, White first.
    pub moves: Vec<String>,
    pub taken: TakenPieces,
    pub outcome: GameOutcome,
    pub termination: Termination,
}

impl GameRecord {
    pub fn new(white: &str, black: &str) -> Self {
        Self {
            white: white.to_string(),
            black: black.to_string(),
            moves: Vec::new(),
            taken: TakenPieces::default(),
            outcome: GameOutcome::Draw,
            termination: Termination::MoveLimit,
        }
    }

    /// Log a move that was played.
    pub fn record(&mut self, mv: &Move) {
        self.moves.push(mv.to_string());
        if let Some(taken) = mv.attacked_piece() {
            self.taken.push(taken.alliance(), taken.kind());
        }
    }

    pub fn finish(&mut self, outcome: GameOutcome, termination: Termination) {
        self.outcome = outcome;
        self.termination = termination;
    }

    /// Moves numbered the way a score sheet shows them: `1. e4 e5 2. Nf3`.
    pub fn move_text(&self) -> String {
        self.moves
            .chunks(2)
            .enumerate()
            .map(|(i, pair)| format!("{}. {}", i + 1, pair.join(" ")))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
