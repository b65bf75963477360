//! Move representation.

use crate::Position;
use std::fmt;
use thiserror::Error;

/// Errors that can occur when parsing a move from user text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("no move given")]
    Empty,

    #[error("expected two squares like \"e2 e4\", got \"{0}\"")]
    Malformed(String),

    #[error("invalid square: \"{0}\"")]
    InvalidSquare(String),
}

/// A move from one square to another.
///
/// This is a transient pair; whether it is legal depends on the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(from: Position, to: Position) -> Self {
        Move { from, to }
    }

    /// Returns true if the move does not change squares.
    #[inline]
    pub fn is_null(self) -> bool {
        self.from == self.to
    }

    /// Parses a move from coordinate notation.
    ///
    /// Accepts `e2e4`, `e2 e4` and `e2-e4`, in either case.
    pub fn from_coordinates(s: &str) -> Result<Self, MoveParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MoveParseError::Empty);
        }

        let parts: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == '-')
            .filter(|p| !p.is_empty())
            .collect();

        let (from, to) = match parts.as_slice() {
            [both] if both.len() == 4 && both.is_ascii() => (&both[0..2], &both[2..4]),
            [from, to] => (*from, *to),
            _ => return Err(MoveParseError::Malformed(s.to_string())),
        };

        Ok(Move::new(parse_square(from)?, parse_square(to)?))
    }

    /// Returns the coordinate notation for this move (e.g., "e2e4").
    pub fn to_coordinates(self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

fn parse_square(s: &str) -> Result<Position, MoveParseError> {
    Position::from_algebraic(s).ok_or_else(|| MoveParseError::InvalidSquare(s.to_string()))
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_coordinates())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_coordinates())
    }
}
