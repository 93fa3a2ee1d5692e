//! Bounds, diagonal alignment, and obstruction scanning.

use crate::game_state::board::Board;
use crate::game_state::piece_classification::is_empty;

/// Diagonal unit vectors in scan order: up-left, up-right, down-left, down-right.
pub const DIAGONALS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

#[inline]
pub fn is_valid_position(row: i32, col: i32, board: &Board) -> bool {
    board.contains(row, col)
}

/// False when both points share a diagonal (`|drow| == |dcol|`), including
/// the degenerate same-point case.
#[inline]
pub fn is_not_on_same_diagonal(row_a: i32, col_a: i32, row_b: i32, col_b: i32) -> bool {
    (row_a - row_b).abs() != (col_a - col_b).abs()
}

/// True if any square strictly between the endpoints is occupied or off the
/// board. Spans without an intermediate square are trivially clear.
pub fn has_obstacles_between(
    from_row: i32,
    from_col: i32,
    to_row: i32,
    to_col: i32,
    board: &Board,
) -> bool {
    let distance = (to_row - from_row).abs();
    if distance <= 1 {
        return false;
    }

    let step_row = (to_row - from_row).signum();
    let step_col = (to_col - from_col).signum();
    (1..distance).any(|i| {
        let row = from_row + i * step_row;
        let col = from_col + i * step_col;
        match board.piece_at(row, col) {
            Some(code) => !is_empty(code),
            None => true,
        }
    })
}

#[inline]
pub fn is_path_clear_between(
    from_row: i32,
    from_col: i32,
    to_row: i32,
    to_col: i32,
    board: &Board,
) -> bool {
    !has_obstacles_between(from_row, from_col, to_row, to_col, board)
}
