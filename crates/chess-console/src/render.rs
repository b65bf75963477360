//! Text rendering of the board.

use crate::config::DisplayConfig;
use chess_core::{Position, BOARD_SIZE};
use chess_engine::Board;

const FILES: &str = "  a b c d e f g h";

/// Draws the board as a grid with row 0 (rank 8) at the top.
pub fn render(board: &Board, display: &DisplayConfig) -> String {
    let mut out = String::new();
    if display.coordinates {
        out.push_str(FILES);
        out.push('\n');
    }

    for row in 0..BOARD_SIZE {
        let rank = (BOARD_SIZE - row).to_string();
        let cells: Vec<String> = (0..BOARD_SIZE)
            .filter_map(|col| Position::new(row as i32, col as i32))
            .map(|pos| {
                board
                    .get(pos)
                    .map_or(display.empty, |piece| piece.to_char())
                    .to_string()
            })
            .collect();

        if display.coordinates {
            out.push_str(&format!("{} {} {}\n", rank, cells.join(" "), rank));
        } else {
            out.push_str(&cells.join(" "));
            out.push('\n');
        }
    }

    if display.coordinates {
        out.push_str(FILES);
        out.push('\n');
    }
    out
}
