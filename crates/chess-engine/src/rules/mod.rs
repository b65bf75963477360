//! Rule set abstraction and terminal-state detection.
//!
//! The [`RuleSet`] trait bundles the operations a turn driver needs. The
//! [`KingCapture`] rule set plays standard piece movement and ends the game
//! when a king leaves the board.

mod king_capture;

pub use king_capture::KingCapture;

use crate::Board;
use chess_core::{Kind, Move, Piece, Side};
use std::fmt;

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Black's king has been captured.
    WhiteWins,
    /// White's king has been captured.
    BlackWins,
}

impl Outcome {
    /// Returns the winning side.
    pub const fn winner(self) -> Side {
        match self {
            Outcome::WhiteWins => Side::White,
            Outcome::BlackWins => Side::Black,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} wins!", self.winner())
    }
}

/// Declares a winner when a king is missing from the board.
///
/// White's king is checked first, so a board with neither king is a win for
/// Black.
pub fn check_winner(board: &Board) -> Option<Outcome> {
    let white_king = Piece::new(Kind::King, Side::White);
    let black_king = Piece::new(Kind::King, Side::Black);

    let (mut white_present, mut black_present) = (false, false);
    for (_, piece) in board.pieces() {
        white_present |= piece == white_king;
        black_present |= piece == black_king;
    }

    if !white_present {
        Some(Outcome::BlackWins)
    } else if !black_present {
        Some(Outcome::WhiteWins)
    } else {
        None
    }
}

/// Trait for a set of game rules over [`Board`] values.
///
/// # Example
///
/// ```
/// use chess_core::Move;
/// use chess_engine::rules::{KingCapture, RuleSet};
///
/// let board = KingCapture.initial_board();
/// let e4 = Move::from_coordinates("e2e4").unwrap();
/// let next = KingCapture.try_apply(&board, e4).unwrap();
/// assert!(KingCapture.outcome(&next).is_none());
/// ```
pub trait RuleSet {
    /// Returns the starting board.
    fn initial_board(&self) -> Board;

    /// Returns true if the move is permitted on the board.
    fn is_legal(&self, board: &Board, m: Move) -> bool;

    /// Returns the board after the move. Legality is not checked.
    fn apply(&self, board: &Board, m: Move) -> Board;

    /// Returns the result if the board is terminal.
    fn outcome(&self, board: &Board) -> Option<Outcome>;

    /// Applies the move if it is legal, otherwise returns `None`.
    fn try_apply(&self, board: &Board, m: Move) -> Option<Board> {
        if self.is_legal(board, m) {
            Some(self.apply(board, m))
        } else {
            None
        }
    }
}
