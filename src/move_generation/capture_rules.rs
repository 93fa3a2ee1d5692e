//! Capture legality and the board-wide mandatory-capture rule.
//!
//! Regular pieces hop forward over an adjacent enemy. Kings slide along a
//! diagonal over empty squares, jump the first piece they meet if it is an
//! enemy, and land on the square directly beyond it.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::*;
use crate::game_state::piece_classification::*;
use crate::move_generation::move_rules::regular_side;
use crate::move_generation::validators::{is_not_on_same_diagonal, is_path_clear_between, DIAGONALS};

/// True if the piece on `(row, col)` has any capture available.
pub fn can_capture(row: i32, col: i32, board: &Board) -> bool {
    match board.piece_at(row, col) {
        Some(code) if is_king(code) => can_king_capture(row, col, code, board),
        Some(code) if regular_side(code).is_some() => {
            can_regular_piece_capture(row, col, code, board)
        }
        _ => false,
    }
}

/// True if a regular `color` piece on `(row, col)` can hop either forward
/// diagonal: the adjacent square holds an enemy and the square beyond is empty.
pub fn can_regular_piece_capture(row: i32, col: i32, color: PieceCode, board: &Board) -> bool {
    let Some(side) = regular_side(color) else {
        return false;
    };
    let forward = side.forward();
    [-1, 1].into_iter().any(|dc| {
        let over = board.piece_at(row + forward, col + dc);
        let land = board.piece_at(row + 2 * forward, col + 2 * dc);
        land.is_some_and(is_empty) && over.is_some_and(|x| is_opponent(color, x))
    })
}

/// True if a `color` king on `(row, col)` can capture along any diagonal.
pub fn can_king_capture(row: i32, col: i32, color: PieceCode, board: &Board) -> bool {
    DIAGONALS
        .iter()
        .any(|dir| king_capture_landing(row, col, color, *dir, board).is_some())
}

/// Landing square of a king capture in direction `dir`, if one exists.
///
/// Scans outward to the first occupied square; it must be an enemy, and the
/// square right behind it must be on the board and empty.
pub fn king_capture_landing(
    row: i32,
    col: i32,
    color: PieceCode,
    dir: (i32, i32),
    board: &Board,
) -> Option<(i32, i32)> {
    let (dr, dc) = dir;
    let mut r = row + dr;
    let mut c = col + dc;
    loop {
        let code = board.piece_at(r, c)?;
        if is_empty(code) {
            r += dr;
            c += dc;
            continue;
        }
        if !is_opponent(color, code) {
            return None;
        }
        let (land_row, land_col) = (r + dr, c + dc);
        return board
            .piece_at(land_row, land_col)
            .filter(|x| is_empty(*x))
            .map(|_| (land_row, land_col));
    }
}

/// Single hop legality: empty destination two diagonal squares away with an
/// enemy on the midpoint.
pub fn is_legal_capture(
    from_row: i32,
    from_col: i32,
    to_row: i32,
    to_col: i32,
    color: PieceCode,
    board: &Board,
) -> bool {
    if !board.piece_at(to_row, to_col).is_some_and(is_empty) {
        return false;
    }
    if is_not_on_same_diagonal(from_row, from_col, to_row, to_col) || (to_row - from_row).abs() != 2 {
        return false;
    }
    let mid_row = (from_row + to_row) / 2;
    let mid_col = (from_col + to_col) / 2;
    board
        .piece_at(mid_row, mid_col)
        .is_some_and(|x| is_opponent(color, x))
}

/// Sliding hop legality for a king: the square right before the landing
/// square holds an enemy, and everything between the king and that enemy is
/// empty.
pub fn is_legal_king_capture(
    from_row: i32,
    from_col: i32,
    to_row: i32,
    to_col: i32,
    color: PieceCode,
    board: &Board,
) -> bool {
    if !board.piece_at(to_row, to_col).is_some_and(is_empty) {
        return false;
    }
    if is_not_on_same_diagonal(from_row, from_col, to_row, to_col) || (to_row - from_row).abs() < 2 {
        return false;
    }
    let over_row = to_row - (to_row - from_row).signum();
    let over_col = to_col - (to_col - from_col).signum();
    board
        .piece_at(over_row, over_col)
        .is_some_and(|x| is_opponent(color, x))
        && is_path_clear_between(from_row, from_col, over_row, over_col, board)
}

/// Mandatory-capture rule: true if any `color`/`king_color` piece can capture.
pub fn check_all_pieces_possible_captures(
    color: PieceCode,
    king_color: PieceCode,
    board: &Board,
) -> bool {
    board.squares().any(|(row, col, code)| {
        !is_empty(code) && (code == color || code == king_color) && can_capture(row, col, board)
    })
}
