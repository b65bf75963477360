//! Board coordinates.

use std::fmt;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: u8 = 8;

/// Returns true if both coordinates lie on the board.
#[inline]
pub const fn is_valid_position(row: i32, col: i32) -> bool {
    row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
}

/// A square on the board, addressed by row and column.
///
/// Rows run from 0 (Black's back rank, rank 8) to 7 (White's back rank,
/// rank 1). Columns run from 0 (file a) to 7 (file h). A `Position` is always
/// on the board; out-of-range coordinates are rejected at construction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a position, or `None` if it lies off the board.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Option<Self> {
        if is_valid_position(row, col) {
            Some(Position {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if file < b'a' || file > b'h' || rank < b'1' || rank > b'8' {
            return None;
        }
        let col = (file - b'a') as i32;
        let row = BOARD_SIZE as i32 - (rank - b'0') as i32;
        Position::new(row, col)
    }

    /// Returns the row (0-7).
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (0-7).
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the position shifted by the given deltas, if still on the board.
    #[inline]
    pub const fn offset(self, d_row: i32, d_col: i32) -> Option<Self> {
        match ((self.row as i32).checked_add(d_row), (self.col as i32).checked_add(d_col)) {
            (Some(row), Some(col)) => Position::new(row, col),
            _ => None,
        }
    }

    /// Returns the file letter ('a'-'h').
    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    /// Returns the rank digit ('1'-'8').
    #[inline]
    pub const fn rank_char(self) -> char {
        (b'0' + BOARD_SIZE - self.row) as char
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.file_char(), self.rank_char())
    }

    /// Iterates over every square, row by row from row 0.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position { row, col }))
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({}, {} = {})", self.row, self.col, self.to_algebraic())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
