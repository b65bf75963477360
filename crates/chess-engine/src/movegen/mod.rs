//! Move validation and application.
//!
//! [`is_legal_move`] combines the occupancy checks with the per-kind
//! predicates in [`pieces`]; [`apply_move`] produces the board after a move,
//! promoting pawns that reach the far row.

mod path;
pub mod pieces;

use crate::{same_side, Board};
use chess_core::{Kind, Move, Piece, Position};

pub use path::is_path_clear;
pub use pieces::{
    bishop_can_reach, king_can_reach, knight_can_reach, pawn_can_reach, queen_can_reach,
    rook_can_reach,
};

/// Returns true if the piece on `from` may move to `to`.
///
/// Short-circuits to false when `from` is empty, when `to` holds a piece of
/// the mover's side, or when the move does not change squares. Turn order and
/// king safety are not considered.
pub fn is_legal_move(board: &Board, from: Position, to: Position) -> bool {
    let Some(piece) = board.get(from) else {
        return false;
    };
    if Move::new(from, to).is_null() {
        return false;
    }
    if same_side(board.occupant(from), board.occupant(to)) {
        return false;
    }

    match piece.kind {
        Kind::Pawn => pawn_can_reach(board, from, to, piece.side),
        Kind::Rook => rook_can_reach(board, from, to),
        Kind::Bishop => bishop_can_reach(board, from, to),
        Kind::Queen => queen_can_reach(board, from, to),
        Kind::Knight => knight_can_reach(from, to),
        Kind::King => king_can_reach(from, to),
    }
}

/// Returns the board after moving whatever occupies `m.from` to `m.to`.
///
/// No validation is performed; check [`is_legal_move`] first. A pawn that
/// lands on its side's promotion row becomes a queen of that side.
pub fn apply_move(board: &Board, m: Move) -> Board {
    let mut next = *board;
    let moved = board.get(m.from);

    next.set(m.from, None);
    next.set(m.to, moved.map(|piece| promote(piece, m.to)));
    next
}

fn promote(piece: Piece, to: Position) -> Piece {
    if piece.kind == Kind::Pawn && to.row() == piece.side.promotion_row() {
        Piece::new(Kind::Queen, piece.side)
    } else {
        piece
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::Side;

    fn sq(s: &str) -> Position {
        Position::from_algebraic(s).unwrap()
    }

    fn mv(s: &str) -> Move {
        Move::from_coordinates(s).unwrap()
    }

    #[test]
    fn legal_pawn_moves_from_start() {
        let board = Board::initial();
        assert!(is_legal_move(&board, sq("e2"), sq("e3")));
        assert!(is_legal_move(&board, sq("e2"), sq("e4")));
        assert!(is_legal_move(&board, sq("d7"), sq("d5")));
    }

    #[test]
    fn empty_origin_is_illegal() {
        let board = Board::initial();
        assert!(!is_legal_move(&board, sq("e4"), sq("e3")));
    }

    #[test]
    fn capturing_own_piece_is_illegal() {
        let board = Board::initial();
        assert!(!is_legal_move(&board, sq("a2"), sq("a1")));
        assert!(!is_legal_move(&board, sq("a1"), sq("a2")));
        assert!(!is_legal_move(&board, sq("d1"), sq("e1")));
    }

    #[test]
    fn knight_leaves_back_rank() {
        let board = Board::initial();
        assert!(is_legal_move(&board, sq("g1"), sq("f3")));
        assert!(is_legal_move(&board, sq("b8"), sq("c6")));
        assert!(!is_legal_move(&board, sq("g1"), sq("e2")));
    }

    #[test]
    fn sliders_are_blocked_in_initial_position() {
        let board = Board::initial();
        assert!(!is_legal_move(&board, sq("a1"), sq("a3")));
        assert!(!is_legal_move(&board, sq("c1"), sq("e3")));
        assert!(!is_legal_move(&board, sq("d1"), sq("d3")));
    }

    #[test]
    fn null_moves_are_rejected_for_every_kind() {
        for ch in ['P', 'N', 'B', 'R', 'Q', 'K', 'p', 'k'] {
            let board = Board::empty().with_piece(sq("d4"), Piece::from_char(ch).unwrap());
            assert!(!is_legal_move(&board, sq("d4"), sq("d4")), "{ch}");
        }
    }

    #[test]
    fn capture_of_opposing_piece_is_allowed() {
        let board = Board::from_placement("8/8/8/3p4/8/8/8/3R4").unwrap();
        assert!(is_legal_move(&board, sq("d1"), sq("d5")));
        assert!(!is_legal_move(&board, sq("d1"), sq("d6")));
    }

    #[test]
    fn king_can_capture_adjacent_enemy() {
        let board = Board::from_placement("8/8/8/8/8/8/4q3/4K3").unwrap();
        assert!(is_legal_move(&board, sq("e1"), sq("e2")));
    }

    #[test]
    fn apply_relocates_piece() {
        let board = Board::empty().with_piece(sq("e2"), Piece::from_char('P').unwrap());
        let next = apply_move(&board, mv("e2e3"));
        assert_eq!(next.get(sq("e2")), None);
        assert_eq!(next.get(sq("e3")), Piece::from_char('P'));
        assert_eq!(board.get(sq("e2")), Piece::from_char('P'));
    }

    #[test]
    fn apply_captures_by_overwriting() {
        let board = Board::from_placement("8/8/8/3p4/8/8/8/3R4").unwrap();
        let next = apply_move(&board, mv("d1d5"));
        assert_eq!(next.get(sq("d5")), Piece::from_char('R'));
        assert_eq!(next.pieces().count(), 1);
    }

    #[test]
    fn white_pawn_promotes_on_row_zero() {
        let board = Board::empty().with_piece(sq("e7"), Piece::from_char('P').unwrap());
        let next = apply_move(&board, mv("e7e8"));
        assert_eq!(next.get(sq("e8")), Some(Piece::new(Kind::Queen, Side::White)));
        assert_eq!(next.get(sq("e7")), None);
    }

    #[test]
    fn black_pawn_promotes_on_row_seven() {
        let board = Board::empty().with_piece(sq("e2"), Piece::from_char('p').unwrap());
        let next = apply_move(&board, mv("e2e1"));
        assert_eq!(next.get(sq("e1")), Some(Piece::new(Kind::Queen, Side::Black)));
        assert_eq!(next.get(sq("e2")), None);
    }

    #[test]
    fn promotion_by_capture() {
        let board = Board::from_placement("3r4/4P3/8/8/8/8/8/8").unwrap();
        assert!(is_legal_move(&board, sq("e7"), sq("d8")));
        let next = apply_move(&board, mv("e7d8"));
        assert_eq!(next.get(sq("d8")), Some(Piece::new(Kind::Queen, Side::White)));
    }

    #[test]
    fn non_pawns_do_not_promote() {
        let board = Board::empty().with_piece(sq("a7"), Piece::from_char('R').unwrap());
        let next = apply_move(&board, mv("a7a8"));
        assert_eq!(next.get(sq("a8")), Piece::from_char('R'));
    }

    #[test]
    fn apply_without_validation_moves_emptiness() {
        let board = Board::from_placement("8/8/8/8/8/8/8/R7").unwrap();
        let next = apply_move(&board, mv("h8a1"));
        assert_eq!(next, Board::empty());
    }
}
