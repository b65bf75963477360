//! Board representation.

use chess_core::{Kind, Piece, Position, Side, BOARD_SIZE};
use std::fmt;
use thiserror::Error;

const SIZE: usize = BOARD_SIZE as usize;

/// The standard starting arrangement in placement notation.
pub const INITIAL_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Errors that can occur when parsing placement notation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("invalid placement: expected 8 rows, got {0}")]
    RowCount(usize),

    #[error("invalid placement: row {row} covers {width} columns")]
    RowWidth { row: usize, width: usize },

    #[error("invalid placement: unexpected character '{ch}' in row {row}")]
    UnexpectedChar { row: usize, ch: char },
}

/// The result of looking up a square by raw coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupant {
    /// The coordinates lie off the board.
    Invalid,
    /// The square is on the board and holds nothing.
    Empty,
    /// The square holds a piece.
    Piece(Piece),
}

impl Occupant {
    /// Returns the piece, if any.
    #[inline]
    pub fn piece(self) -> Option<Piece> {
        match self {
            Occupant::Piece(piece) => Some(piece),
            Occupant::Invalid | Occupant::Empty => None,
        }
    }

    /// Returns true only for an on-board square with no piece.
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Occupant::Empty
    }
}

impl From<Option<Piece>> for Occupant {
    fn from(cell: Option<Piece>) -> Self {
        match cell {
            Some(piece) => Occupant::Piece(piece),
            None => Occupant::Empty,
        }
    }
}

/// Returns true if both occupants are pieces of the same side.
///
/// Empty and off-board occupants never match anything.
pub fn same_side(a: Occupant, b: Occupant) -> bool {
    match (a, b) {
        (Occupant::Piece(a), Occupant::Piece(b)) => a.is_ally_of(b),
        _ => false,
    }
}

/// An 8x8 grid of cells, each empty or holding a piece.
///
/// A board is a value: every transformation returns a new board and leaves
/// the original untouched.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; SIZE]; SIZE],
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            cells: [[None; SIZE]; SIZE],
        }
    }

    /// Creates the standard starting arrangement.
    pub fn initial() -> Self {
        const BACK_ROW: [Kind; SIZE] = [
            Kind::Rook,
            Kind::Knight,
            Kind::Bishop,
            Kind::Queen,
            Kind::King,
            Kind::Bishop,
            Kind::Knight,
            Kind::Rook,
        ];

        let mut board = Board::empty();
        for (col, &kind) in BACK_ROW.iter().enumerate() {
            board.cells[0][col] = Some(Piece::new(kind, Side::Black));
            board.cells[1][col] = Some(Piece::new(Kind::Pawn, Side::Black));
            board.cells[6][col] = Some(Piece::new(Kind::Pawn, Side::White));
            board.cells[7][col] = Some(Piece::new(kind, Side::White));
        }
        board
    }

    /// Parses placement notation: eight rows separated by `/`, row 0 first,
    /// digits for runs of empty squares.
    pub fn from_placement(placement: &str) -> Result<Self, PlacementError> {
        let rows: Vec<&str> = placement.trim().split('/').collect();
        if rows.len() != SIZE {
            return Err(PlacementError::RowCount(rows.len()));
        }

        let mut board = Board::empty();
        for (row, row_str) in rows.iter().enumerate() {
            let mut col = 0usize;
            for ch in row_str.chars() {
                if let Some(run) = ch.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    col += run as usize;
                } else if let Some(piece) = Piece::from_char(ch) {
                    if col < SIZE {
                        board.cells[row][col] = Some(piece);
                    }
                    col += 1;
                } else {
                    return Err(PlacementError::UnexpectedChar { row, ch });
                }
            }
            if col != SIZE {
                return Err(PlacementError::RowWidth { row, width: col });
            }
        }
        Ok(board)
    }

    /// Renders the board in placement notation.
    pub fn to_placement(&self) -> String {
        let mut out = String::new();
        for (row, cells) in self.cells.iter().enumerate() {
            let mut empty_run = 0;
            for cell in cells {
                match cell {
                    Some(piece) => {
                        if empty_run > 0 {
                            out.push_str(&empty_run.to_string());
                            empty_run = 0;
                        }
                        out.push(piece.to_char());
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                out.push_str(&empty_run.to_string());
            }
            if row + 1 < SIZE {
                out.push('/');
            }
        }
        out
    }

    /// Returns the piece on the given square, if any.
    #[inline]
    pub fn get(&self, pos: Position) -> Option<Piece> {
        self.cells[pos.row() as usize][pos.col() as usize]
    }

    /// Returns the occupant of an on-board square.
    #[inline]
    pub fn occupant(&self, pos: Position) -> Occupant {
        self.get(pos).into()
    }

    /// Looks up raw coordinates, reporting [`Occupant::Invalid`] when they
    /// lie off the board.
    pub fn piece_at(&self, row: i32, col: i32) -> Occupant {
        match Position::new(row, col) {
            Some(pos) => self.occupant(pos),
            None => Occupant::Invalid,
        }
    }

    /// Returns a copy of this board with `piece` placed on `pos`.
    #[must_use]
    pub fn with_piece(mut self, pos: Position, piece: Piece) -> Self {
        self.set(pos, Some(piece));
        self
    }

    /// Returns a copy of this board with `pos` emptied.
    #[must_use]
    pub fn without_piece(mut self, pos: Position) -> Self {
        self.set(pos, None);
        self
    }

    #[inline]
    pub(crate) fn set(&mut self, pos: Position, cell: Option<Piece>) {
        self.cells[pos.row() as usize][pos.col() as usize] = cell;
    }

    /// Iterates over every occupied square.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |pos| self.get(pos).map(|piece| (pos, piece)))
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_placement())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_placement())
    }
}
