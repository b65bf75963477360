//! Path clearance along ranks, files and diagonals.

use crate::Board;
use chess_core::Position;

/// Returns true if every square strictly between `from` and `to` is empty.
///
/// The walk steps one square at a time by the sign of each coordinate delta;
/// neither endpoint is inspected, so whether `to` may be captured is the
/// caller's concern. Squares that share no row, column or diagonal are never
/// clear: the walk misses `to` and runs off the board.
pub fn is_path_clear(board: &Board, from: Position, to: Position) -> bool {
    let d_row = to.row() as i32 - from.row() as i32;
    let d_col = to.col() as i32 - from.col() as i32;

    let (step_row, step_col) = (d_row.signum(), d_col.signum());
    let mut row = from.row() as i32 + step_row;
    let mut col = from.col() as i32 + step_col;

    while (row, col) != (to.row() as i32, to.col() as i32) {
        if !board.piece_at(row, col).is_empty() {
            return false;
        }
        row += step_row;
        col += step_col;
    }
    true
}
