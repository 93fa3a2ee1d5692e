//! Move description value type.

use std::fmt;

/// Kind of a move. `QueenTake` is a king's sliding capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveType {
    Move,
    Take,
    QueenTake,
}

impl MoveType {
    #[inline]
    pub const fn is_capture(self) -> bool {
        matches!(self, MoveType::Take | MoveType::QueenTake)
    }
}

/// One candidate move: origin, destination, and kind. Equal iff all five
/// fields are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decision {
    pub from_row: i32,
    pub from_col: i32,
    pub to_row: i32,
    pub to_col: i32,
    pub move_type: MoveType,
}

impl Decision {
    #[inline]
    pub const fn new(from_row: i32, from_col: i32, to_row: i32, to_col: i32, move_type: MoveType) -> Self {
        Self {
            from_row,
            from_col,
            to_row,
            to_col,
            move_type,
        }
    }

    #[inline]
    pub const fn step(from_row: i32, from_col: i32, to_row: i32, to_col: i32) -> Self {
        Self::new(from_row, from_col, to_row, to_col, MoveType::Move)
    }

    #[inline]
    pub const fn take(from_row: i32, from_col: i32, to_row: i32, to_col: i32) -> Self {
        Self::new(from_row, from_col, to_row, to_col, MoveType::Take)
    }

    #[inline]
    pub const fn queen_take(from_row: i32, from_col: i32, to_row: i32, to_col: i32) -> Self {
        Self::new(from_row, from_col, to_row, to_col, MoveType::QueenTake)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.move_type.is_capture() { 'x' } else { '-' };
        write!(
            f,
            "({},{}){}({},{})",
            self.from_row, self.from_col, sep, self.to_row, self.to_col
        )
    }
}
