//! Standard piece movement, won by capturing the opposing king.

use super::{check_winner, Outcome, RuleSet};
use crate::movegen::{apply_move, is_legal_move};
use crate::Board;
use chess_core::Move;

/// Standard movement rules without check, castling or en passant.
///
/// - Pawns advance one square, or two from their starting row
/// - Pawns capture one square diagonally forward
/// - Pawns reaching the far row become queens
/// - The game ends when either king has been captured
#[derive(Debug, Clone, Copy, Default)]
pub struct KingCapture;

impl RuleSet for KingCapture {
    fn initial_board(&self) -> Board {
        Board::initial()
    }

    fn is_legal(&self, board: &Board, m: Move) -> bool {
        is_legal_move(board, m.from, m.to)
    }

    fn apply(&self, board: &Board, m: Move) -> Board {
        apply_move(board, m)
    }

    fn outcome(&self, board: &Board) -> Option<Outcome> {
        check_winner(board)
    }
}
