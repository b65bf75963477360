//! Core types for console chess.
//!
//! This crate provides the value types shared by the engine and the console:
//! - [`Side`] for the two players
//! - [`Kind`] and [`Piece`] for piece identities
//! - [`Position`] for board coordinates
//! - [`Move`] and coordinate parsing

mod mov;
mod piece;
mod position;
mod side;

pub use mov::{Move, MoveParseError};
pub use piece::{Kind, Piece};
pub use position::{is_valid_position, Position, BOARD_SIZE};
pub use side::Side;
