//! Rules engine for two-player console chess.
//!
//! This crate provides:
//! - [`Board`] - an immutable-per-turn 8x8 grid of pieces
//! - Movement predicates and the [`is_legal_move`] gate
//! - [`apply_move`] with automatic promotion to queen
//! - [`check_winner`] - the game ends when a king is captured
//! - [`RuleSet`] - the operations bundled for a turn driver
//! - [`Game`] - turn tracking on top of the rule set
//!
//! Check, checkmate, castling, en passant and draws are not modelled.
//!
//! # Example
//!
//! ```
//! use chess_core::{Move, Position};
//! use chess_engine::{apply_move, check_winner, is_legal_move, Board};
//!
//! let board = Board::initial();
//! let e2 = Position::from_algebraic("e2").unwrap();
//! let e4 = Position::from_algebraic("e4").unwrap();
//!
//! assert!(is_legal_move(&board, e2, e4));
//! let board = apply_move(&board, Move::new(e2, e4));
//! assert!(board.get(e2).is_none());
//! assert!(check_winner(&board).is_none());
//! ```

mod board;
mod game;
pub mod movegen;
pub mod rules;

pub use board::{same_side, Board, Occupant, PlacementError, INITIAL_PLACEMENT};
pub use game::{Game, GameError};
pub use movegen::{apply_move, is_legal_move, is_path_clear};
pub use rules::{check_winner, KingCapture, Outcome, RuleSet};
