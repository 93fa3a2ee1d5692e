//! Stateless predicates over raw piece codes.
//!
//! Every valid code satisfies exactly one of `is_red`, `is_black`,
//! `is_red_king`, `is_black_king`, `is_empty`. Codes outside the five-way
//! partition satisfy none of them.

use crate::game_state::checkers_types::*;

#[inline]
pub const fn is_red(code: PieceCode) -> bool {
    code == RED
}

#[inline]
pub const fn is_black(code: PieceCode) -> bool {
    code == BLACK
}

#[inline]
pub const fn is_red_king(code: PieceCode) -> bool {
    code == RED_KING
}

#[inline]
pub const fn is_black_king(code: PieceCode) -> bool {
    code == BLACK_KING
}

#[inline]
pub const fn is_king(code: PieceCode) -> bool {
    is_red_king(code) || is_black_king(code)
}

#[inline]
pub const fn is_empty(code: PieceCode) -> bool {
    code == EMPTY
}

/// True when `target` belongs to the side opposing `mover`.
/// Empty squares and unrecognized codes are never opponents.
#[inline]
pub fn is_opponent(mover: PieceCode, target: PieceCode) -> bool {
    match (Side::of(mover), Side::of(target)) {
        (Some(a), Some(b)) => a != b,
        _ => false,
    }
}
