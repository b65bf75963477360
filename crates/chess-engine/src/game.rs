//! Turn-by-turn game management.
//!
//! The [`Game`] struct holds the current board and whose turn it is, which the
//! board itself does not record. It checks that the mover owns the piece
//! before consulting the rule set, and stops accepting moves once a king has
//! been captured.

use crate::rules::{KingCapture, Outcome, RuleSet};
use crate::Board;
use chess_core::{Move, Position, Side};
use thiserror::Error;

/// Error type for game operations.
///
/// A rejected move leaves the game exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A king has already been captured.
    #[error("game has already ended")]
    GameOver,
    /// There is no piece on the origin square.
    #[error("there is no piece on {0}")]
    EmptySquare(Position),
    /// The origin piece belongs to the side not on move.
    #[error("the piece on {position} does not belong to {side}")]
    WrongSide { position: Position, side: Side },
    /// The piece cannot make this move.
    #[error("illegal move: {0}")]
    IllegalMove(Move),
}

/// A game in progress.
#[derive(Debug, Clone)]
pub struct Game {
    /// Current board.
    board: Board,
    /// The side to move.
    side_to_move: Side,
    /// Result once a king is gone.
    outcome: Option<Outcome>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a game from the standard starting board, White to move.
    pub fn new() -> Self {
        Self::from_board(KingCapture.initial_board(), Side::White)
    }

    /// Creates a game from an arbitrary board.
    pub fn from_board(board: Board, side_to_move: Side) -> Self {
        Game {
            board,
            side_to_move,
            outcome: KingCapture.outcome(&board),
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// Returns the result if the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns true if the game has ended.
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Plays a move for the side to move.
    ///
    /// On success the board is replaced and the outcome, if the move ended the
    /// game, is returned. Otherwise the turn passes to the other side.
    pub fn play(&mut self, m: Move) -> Result<Option<Outcome>, GameError> {
        if self.outcome.is_some() {
            return Err(GameError::GameOver);
        }

        let piece = self
            .board
            .get(m.from)
            .ok_or(GameError::EmptySquare(m.from))?;
        if piece.side != self.side_to_move {
            return Err(GameError::WrongSide {
                position: m.from,
                side: self.side_to_move,
            });
        }

        let next = KingCapture
            .try_apply(&self.board, m)
            .ok_or(GameError::IllegalMove(m))?;
        tracing::debug!(side = %self.side_to_move, mv = %m, "move applied");

        self.board = next;
        self.outcome = KingCapture.outcome(&self.board);
        match self.outcome {
            Some(outcome) => tracing::info!(%outcome, "game over"),
            None => self.side_to_move = self.side_to_move.opposite(),
        }
        Ok(self.outcome)
    }
}
