//! Square indexing and read-only coordinate tables.
//!
//! Squares are numbered 0..63 row by row starting from the top-left corner as
//! White looks at the board: 0 = a8, 7 = h8, 56 = a1, 63 = h1.
//! Every table here is computed at compile time, so lookups are plain array reads.

use std::ops::BitOr;

/// Index of a square on the board (0..63).
pub type Square = u8;

pub const NUM_SQUARES: usize = 64;
pub const SQUARES_PER_ROW: u8 = 8;

/// Destination of the null move. Deliberately outside the board.
pub const NULL_SQUARE: Square = 65;

pub const FILE_A: u8 = 0;
pub const FILE_B: u8 = 1;
pub const FILE_G: u8 = 6;
pub const FILE_H: u8 = 7;

/// A set of squares packed into a 64-bit mask, bit `i` = square `i`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SquareSet(pub u64);

impl SquareSet {
    pub const EMPTY: SquareSet = SquareSet(0);

    /// Build a set from a list of squares.
    pub const fn of(squares: &[Square]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < squares.len() {
            bits |= 1u64 << squares[i];
            i += 1;
        }
        SquareSet(bits)
    }

    #[inline(always)]
    pub const fn from_square(sq: Square) -> Self {
        SquareSet(1u64 << sq)
    }

    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline(always)]
    pub const fn contains(self, sq: Square) -> bool {
        (sq as usize) < NUM_SQUARES && (self.0 & (1u64 << sq)) != 0
    }

    #[inline(always)]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }
}

impl BitOr for SquareSet {
    type Output = SquareSet;
    fn bitor(self, rhs: SquareSet) -> SquareSet {
        SquareSet(self.0 | rhs.0)
    }
}

/// Iterate over the squares of the set in ascending order.
impl Iterator for SquareSet {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            let sq = self.0.trailing_zeros() as Square;
            self.0 &= self.0 - 1;
            Some(sq)
        }
    }
}

/// `FILES[f]` holds every square of file `f` (0 = a .. 7 = h).
pub static FILES: [SquareSet; 8] = {
    let mut files = [SquareSet::EMPTY; 8];
    let mut sq = 0u8;
    while sq < NUM_SQUARES as u8 {
        files[(sq % SQUARES_PER_ROW) as usize].0 |= 1u64 << sq;
        sq += 1;
    }
    files
};

/// `RANKS[r - 1]` holds every square of rank `r` (1..8). Rank 8 is the top row.
pub static RANKS: [SquareSet; 8] = {
    let mut ranks = [SquareSet::EMPTY; 8];
    let mut sq = 0u8;
    while sq < NUM_SQUARES as u8 {
        let row = sq / SQUARES_PER_ROW;
        ranks[(7 - row) as usize].0 |= 1u64 << sq;
        sq += 1;
    }
    ranks
};

/// Algebraic name of every square, indexed by square.
pub static ALGEBRAIC_NOTATION: [&str; NUM_SQUARES] = [
    "a8", "b8", "c8", "d8", "e8", "f8", "g8", "h8", //
    "a7", "b7", "c7", "d7", "e7", "f7", "g7", "h7", //
    "a6", "b6", "c6", "d6", "e6", "f6", "g6", "h6", //
    "a5", "b5", "c5", "d5", "e5", "f5", "g5", "h5", //
    "a4", "b4", "c4", "d4", "e4", "f4", "g4", "h4", //
    "a3", "b3", "c3", "d3", "e3", "f3", "g3", "h3", //
    "a2", "b2", "c2", "d2", "e2", "f2", "g2", "h2", //
    "a1", "b1", "c1", "d1", "e1", "f1", "g1", "h1", //
];

/// True if `coordinate` names a square on the board.
#[inline(always)]
pub const fn is_valid_square(coordinate: i16) -> bool {
    coordinate >= 0 && coordinate < NUM_SQUARES as i16
}

/// File of a square, 0 = a .. 7 = h.
#[inline(always)]
pub const fn file_of(sq: Square) -> u8 {
    sq % SQUARES_PER_ROW
}

/// Row of a square counted from the top, 0 = rank 8 .. 7 = rank 1.
#[inline(always)]
pub const fn row_of(sq: Square) -> u8 {
    sq / SQUARES_PER_ROW
}

/// Square from a file and a top-based row, if both are on the board.
pub fn square(file: i8, row: i8) -> Option<Square> {
    if (0..8).contains(&file) && (0..8).contains(&row) {
        Some((row as u8) * SQUARES_PER_ROW + file as u8)
    } else {
        None
    }
}

#[inline]
pub fn in_file(sq: Square, file: u8) -> bool {
    FILES[file as usize].contains(sq)
}

/// `rank` is the chess rank, 1..8.
#[inline]
pub fn on_rank(sq: Square, rank: u8) -> bool {
    RANKS[(rank - 1) as usize].contains(sq)
}

/// Algebraic name for a square; off-board squares render as `--`.
pub fn algebraic(sq: Square) -> &'static str {
    ALGEBRAIC_NOTATION.get(sq as usize).copied().unwrap_or("--")
}

/// Parse an algebraic square name such as `"e4"`.
pub fn square_at(name: &str) -> Option<Square> {
    ALGEBRAIC_NOTATION
        .iter()
        .position(|&n| n == name)
        .map(|idx| idx as Square)
}

#[cfg(test)]
#[path = "squares_tests.rs"]
mod squares_tests;
