//! Non-capturing move legality.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::*;
use crate::game_state::piece_classification::*;
use crate::move_generation::validators::{is_not_on_same_diagonal, is_path_clear_between};

/// True if the piece on `(row, col)` has somewhere to step.
///
/// Kings always answer true; obstruction is resolved during generation.
/// Regular pieces need an empty forward-diagonal neighbor.
pub fn can_move(row: i32, col: i32, board: &Board) -> bool {
    let Some(code) = board.piece_at(row, col) else {
        return false;
    };
    if is_king(code) {
        return true;
    }
    let Some(side) = regular_side(code) else {
        return false;
    };

    let next_row = row + side.forward();
    [col - 1, col + 1]
        .into_iter()
        .any(|next_col| board.piece_at(next_row, next_col).is_some_and(is_empty))
}

/// Legality of a plain move of a `color` piece from `from` to `to`.
pub fn is_legal_move(
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

    if is_king(color) {
        return !is_not_on_same_diagonal(from_row, from_col, to_row, to_col)
            && is_path_clear_between(from_row, from_col, to_row, to_col, board);
    }

    match regular_side(color) {
        Some(side) => to_row - from_row == side.forward() && (to_col - from_col).abs() == 1,
        None => false,
    }
}

/// Side of a non-king piece code.
#[inline]
pub(crate) fn regular_side(code: PieceCode) -> Option<Side> {
    if is_red(code) {
        Some(Side::Red)
    } else if is_black(code) {
        Some(Side::Black)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(pieces: &[(i32, i32, PieceCode)]) -> Board {
        let mut board = Board::new(8);
        for (row, col, code) in pieces {
            board.set_piece(*row, *col, *code).expect("in bounds");
        }
        board
    }

    #[test]
    fn regular_pieces_need_an_empty_forward_neighbor() {
        let board = board_with(&[(5, 2, RED), (4, 1, BLACK), (4, 3, BLACK)]);
        assert!(!can_move(5, 2, &board));

        let board = board_with(&[(5, 2, RED), (4, 1, BLACK)]);
        assert!(can_move(5, 2, &board));

        let board = board_with(&[(7, 0, BLACK)]);
        assert!(!can_move(7, 0, &board));
    }

    #[test]
    fn kings_can_always_move_and_empty_squares_cannot() {
        let board = board_with(&[(0, 1, RED_KING), (1, 0, BLACK), (1, 2, BLACK)]);
        assert!(can_move(0, 1, &board));
        assert!(!can_move(3, 3, &board));
        assert!(!can_move(9, 9, &board));
    }

    #[test]
    fn regular_moves_are_single_forward_steps() {
        let board = board_with(&[(5, 2, RED), (2, 3, BLACK)]);
        assert!(is_legal_move(5, 2, 4, 1, RED, &board));
        assert!(is_legal_move(5, 2, 4, 3, RED, &board));
        assert!(!is_legal_move(5, 2, 6, 1, RED, &board));
        assert!(!is_legal_move(5, 2, 3, 4, RED, &board));
        assert!(is_legal_move(2, 3, 3, 4, BLACK, &board));
        assert!(!is_legal_move(2, 3, 1, 4, BLACK, &board));
    }

    #[test]
    fn occupied_destination_is_never_legal() {
        let board = board_with(&[(5, 2, RED), (4, 1, RED)]);
        assert!(!is_legal_move(5, 2, 4, 1, RED, &board));
    }

    #[test]
    fn kings_slide_both_ways_until_blocked() {
        let board = board_with(&[(4, 3, RED_KING), (1, 0, BLACK)]);
        assert!(is_legal_move(4, 3, 7, 6, RED_KING, &board));
        assert!(is_legal_move(4, 3, 2, 1, RED_KING, &board));
        assert!(!is_legal_move(4, 3, 4, 5, RED_KING, &board));

        let board = board_with(&[(4, 3, RED_KING), (2, 1, BLACK)]);
        assert!(!is_legal_move(4, 3, 1, 0, RED_KING, &board));
    }

    #[test]
    fn unknown_codes_never_move() {
        let board = board_with(&[]);
        assert!(!is_legal_move(5, 2, 4, 1, 9, &board));
        assert!(!is_legal_move(5, 2, 4, 1, EMPTY, &board));
    }
}
