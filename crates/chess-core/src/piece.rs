//! Chess piece representation.

use crate::Side;
use std::fmt;

/// The six kinds of chess pieces, independent of side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Kind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl Kind {
    /// All kinds in order.
    pub const ALL: [Kind; 6] = [
        Kind::Pawn,
        Kind::Knight,
        Kind::Bishop,
        Kind::Rook,
        Kind::Queen,
        Kind::King,
    ];

    /// Returns the lowercase letter for this kind.
    pub const fn letter(self) -> char {
        match self {
            Kind::Pawn => 'p',
            Kind::Knight => 'n',
            Kind::Bishop => 'b',
            Kind::Rook => 'r',
            Kind::Queen => 'q',
            Kind::King => 'k',
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Pawn => "Pawn",
            Kind::Knight => "Knight",
            Kind::Bishop => "Bishop",
            Kind::Rook => "Rook",
            Kind::Queen => "Queen",
            Kind::King => "King",
        };
        write!(f, "{}", name)
    }
}

/// A piece on the board: a kind owned by a side.
///
/// Pieces carry no move history, so there are no castling or en passant flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: Kind,
    pub side: Side,
}

impl Piece {
    /// Creates a piece.
    #[inline]
    pub const fn new(kind: Kind, side: Side) -> Self {
        Piece { kind, side }
    }

    /// Returns the display character: uppercase for White, lowercase for Black.
    pub const fn to_char(self) -> char {
        let c = self.kind.letter();
        match self.side {
            Side::White => c.to_ascii_uppercase(),
            Side::Black => c,
        }
    }

    /// Parses a piece character.
    ///
    /// Accepts the FEN letters as well as `H`/`h` for the knight.
    pub const fn from_char(c: char) -> Option<Self> {
        let side = if c.is_ascii_uppercase() {
            Side::White
        } else {
            Side::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => Kind::Pawn,
            'n' | 'h' => Kind::Knight,
            'b' => Kind::Bishop,
            'r' => Kind::Rook,
            'q' => Kind::Queen,
            'k' => Kind::King,
            _ => return None,
        };
        Some(Piece { kind, side })
    }

    /// Returns true if both pieces belong to the same side.
    #[inline]
    pub fn is_ally_of(self, other: Piece) -> bool {
        self.side == other.side
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.side, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_to_char() {
        assert_eq!(Piece::new(Kind::Pawn, Side::White).to_char(), 'P');
        assert_eq!(Piece::new(Kind::Pawn, Side::Black).to_char(), 'p');
        assert_eq!(Piece::new(Kind::King, Side::White).to_char(), 'K');
        assert_eq!(Piece::new(Kind::Knight, Side::Black).to_char(), 'n');
    }

    #[test]
    fn piece_from_char() {
        assert_eq!(
            Piece::from_char('P'),
            Some(Piece::new(Kind::Pawn, Side::White))
        );
        assert_eq!(
            Piece::from_char('q'),
            Some(Piece::new(Kind::Queen, Side::Black))
        );
        assert_eq!(Piece::from_char('x'), None);
        assert_eq!(Piece::from_char(' '), None);
    }

    #[test]
    fn knight_horse_alias() {
        assert_eq!(
            Piece::from_char('H'),
            Some(Piece::new(Kind::Knight, Side::White))
        );
        assert_eq!(
            Piece::from_char('h'),
            Some(Piece::new(Kind::Knight, Side::Black))
        );
    }

    #[test]
    fn ally_detection() {
        let white_rook = Piece::new(Kind::Rook, Side::White);
        let white_pawn = Piece::new(Kind::Pawn, Side::White);
        let black_rook = Piece::new(Kind::Rook, Side::Black);
        assert!(white_rook.is_ally_of(white_pawn));
        assert!(!white_rook.is_ally_of(black_rook));
    }

    #[test]
    fn display() {
        assert_eq!(
            format!("{}", Piece::new(Kind::Queen, Side::Black)),
            "Black Queen"
        );
    }
}
