//! Per-kind movement predicates.
//!
//! Each predicate answers only whether the piece can reach `to`. The caller is
//! expected to have confirmed that `from` holds the mover and that `to` does
//! not hold one of the mover's own pieces.

use super::path::is_path_clear;
use crate::Board;
use chess_core::{Position, Side};

#[inline]
fn deltas(from: Position, to: Position) -> (i32, i32) {
    (
        to.row() as i32 - from.row() as i32,
        to.col() as i32 - from.col() as i32,
    )
}

/// Pawn movement: straight advances onto empty squares, one-step diagonal
/// captures onto opposing pieces. There is no en passant.
pub fn pawn_can_reach(board: &Board, from: Position, to: Position, side: Side) -> bool {
    let (d_row, d_col) = deltas(from, to);
    let forward = side.forward() as i32;
    let destination = board.occupant(to);

    match d_col {
        0 => {
            if !destination.is_empty() {
                return false;
            }
            if d_row == forward {
                return true;
            }
            d_row == 2 * forward
                && from.row() == side.pawn_row()
                && board
                    .piece_at(from.row() as i32 + forward, from.col() as i32)
                    .is_empty()
        }
        -1 | 1 => {
            d_row == forward && destination.piece().is_some_and(|target| target.side != side)
        }
        _ => false,
    }
}

/// Rook movement: purely horizontal or vertical, with a clear path.
pub fn rook_can_reach(board: &Board, from: Position, to: Position) -> bool {
    let (d_row, d_col) = deltas(from, to);
    ((d_row == 0) != (d_col == 0)) && is_path_clear(board, from, to)
}

/// Bishop movement: strictly diagonal, with a clear path.
pub fn bishop_can_reach(board: &Board, from: Position, to: Position) -> bool {
    let (d_row, d_col) = deltas(from, to);
    d_row != 0 && d_row.abs() == d_col.abs() && is_path_clear(board, from, to)
}

/// Queen movement: anything a rook or a bishop could do from the same square.
pub fn queen_can_reach(board: &Board, from: Position, to: Position) -> bool {
    rook_can_reach(board, from, to) || bishop_can_reach(board, from, to)
}

/// Knight movement: a (2, 1) jump in any orientation. Knights are never blocked.
pub fn knight_can_reach(from: Position, to: Position) -> bool {
    let (d_row, d_col) = deltas(from, to);
    matches!((d_row.abs(), d_col.abs()), (2, 1) | (1, 2))
}

/// King movement: at most one square in each direction.
///
/// A zero displacement passes this predicate; the legality gate rejects null
/// moves before dispatching here.
pub fn king_can_reach(from: Position, to: Position) -> bool {
    let (d_row, d_col) = deltas(from, to);
    d_row.abs() <= 1 && d_col.abs() <= 1
}
