//! Player side representation.

/// The two competing players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Side {
    White = 0,
    Black = 1,
}

impl Side {
    /// Both sides, white first.
    pub const ALL: [Side; 2] = [Side::White, Side::Black];

    /// Returns the opposing side.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Returns the row delta of a forward pawn step (-1 for White, +1 for Black).
    ///
    /// Row 0 is Black's back rank, so White advances toward lower rows.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }

    /// Returns the row pawns start on (6 for White, 1 for Black).
    #[inline]
    pub const fn pawn_row(self) -> u8 {
        match self {
            Side::White => 6,
            Side::Black => 1,
        }
    }

    /// Returns the row on which a pawn promotes (0 for White, 7 for Black).
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Side::White => 0,
            Side::Black => 7,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}
