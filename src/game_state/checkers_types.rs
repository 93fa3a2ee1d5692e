//! Core value types shared by every layer of the checkers engine.
//! Piece codes are plain integers so boards stay trivially copyable; the
//! `Side` enum carries the color/king pairing that rules and turns rely on.

/// Raw board cell value.
pub type PieceCode = u8;

pub const EMPTY: PieceCode = 0;
pub const RED: PieceCode = 1;
pub const BLACK: PieceCode = 2;
pub const RED_KING: PieceCode = 3;
pub const BLACK_KING: PieceCode = 4;

/// Edge length of the standard board.
pub const STANDARD_BOARD_SIZE: usize = 8;

/// Rows of men each side starts with on the standard board.
pub const STANDARD_STARTING_ROWS: usize = 3;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Red,
    Black,
}

impl Side {
    #[inline]
    pub const fn color(self) -> PieceCode {
        match self {
            Side::Red => RED,
            Side::Black => BLACK,
        }
    }

    #[inline]
    pub const fn king_color(self) -> PieceCode {
        match self {
            Side::Red => RED_KING,
            Side::Black => BLACK_KING,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Red => Side::Black,
            Side::Black => Side::Red,
        }
    }

    /// Row delta of a regular piece's forward step.
    #[inline]
    pub const fn forward(self) -> i32 {
        match self {
            Side::Red => -1,
            Side::Black => 1,
        }
    }

    /// Row on which a regular piece of this side is crowned, for a board of `size` rows.
    #[inline]
    pub const fn promotion_row(self, size: usize) -> i32 {
        match self {
            Side::Red => 0,
            Side::Black => size as i32 - 1,
        }
    }

    /// Owning side of a piece code, `None` for empty or unrecognized codes.
    #[inline]
    pub const fn of(code: PieceCode) -> Option<Side> {
        match code {
            RED | RED_KING => Some(Side::Red),
            BLACK | BLACK_KING => Some(Side::Black),
            _ => None,
        }
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Side::Red => "Red",
            Side::Black => "Black",
        }
    }
}

/// Matched `(color, king_color)` pair of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnState {
    pub color: PieceCode,
    pub king_color: PieceCode,
}

impl TurnState {
    #[inline]
    pub const fn for_side(side: Side) -> Self {
        Self {
            color: side.color(),
            king_color: side.king_color(),
        }
    }

    /// Side owning this pair. Unrecognized pairs fall back to black.
    #[inline]
    pub const fn side(self) -> Side {
        match self.color {
            RED | RED_KING => Side::Red,
            _ => Side::Black,
        }
    }

    #[inline]
    pub const fn opponent(self) -> Self {
        Self::for_side(self.side().opposite())
    }

    #[inline]
    pub const fn owns(self, code: PieceCode) -> bool {
        code != EMPTY && (code == self.color || code == self.king_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_pairs_match_their_king_codes() {
        assert_eq!(Side::Red.king_color(), RED_KING);
        assert_eq!(Side::Black.king_color(), BLACK_KING);
        assert_eq!(Side::of(RED_KING), Some(Side::Red));
        assert_eq!(Side::of(BLACK), Some(Side::Black));
        assert_eq!(Side::of(EMPTY), None);
        assert_eq!(Side::of(42), None);
    }

    #[test]
    fn promotion_rows_are_opposite_edges() {
        assert_eq!(Side::Red.promotion_row(8), 0);
        assert_eq!(Side::Black.promotion_row(8), 7);
        assert_eq!(Side::Black.promotion_row(10), 9);
    }

    #[test]
    fn turn_state_opponent_is_the_other_pair() {
        let red = TurnState::for_side(Side::Red);
        assert_eq!(red.opponent(), TurnState::for_side(Side::Black));
        assert_eq!(red.opponent().opponent(), red);
        assert!(red.owns(RED) && red.owns(RED_KING));
        assert!(!red.owns(BLACK) && !red.owns(EMPTY));
    }
}
