//! Capture enumeration for regular pieces and kings.

use crate::game_state::board::Board;
use crate::game_state::piece_classification::is_king;
use crate::move_generation::capture_rules::{is_legal_capture, is_legal_king_capture};
use crate::move_generation::decision::Decision;
use crate::move_generation::move_rules::regular_side;
use crate::move_generation::validators::{is_valid_position, DIAGONALS};

/// Forward two-square hops of the regular piece on `(row, col)`.
pub fn find_regular_captures(row: i32, col: i32, board: &Board, out: &mut Vec<Decision>) {
    let Some(color) = board.piece_at(row, col) else {
        return;
    };
    let Some(side) = regular_side(color) else {
        return;
    };

    let to_row = row + 2 * side.forward();
    for to_col in [col - 2, col + 2] {
        if is_valid_position(to_row, to_col, board)
            && is_legal_capture(row, col, to_row, to_col, color, board)
        {
            out.push(Decision::take(row, col, to_row, to_col));
        }
    }
}

/// Sliding captures of the king on `(row, col)`. Each direction is scanned
/// until it runs off the board.
pub fn find_king_captures(row: i32, col: i32, board: &Board, out: &mut Vec<Decision>) {
    let Some(color) = board.piece_at(row, col).filter(|x| is_king(*x)) else {
        return;
    };

    for (dr, dc) in DIAGONALS {
        let mut distance = 1;
        loop {
            let to_row = row + distance * dr;
            let to_col = col + distance * dc;
            if !is_valid_position(to_row, to_col, board) {
                break;
            }
            if is_legal_king_capture(row, col, to_row, to_col, color, board) {
                out.push(Decision::queen_take(row, col, to_row, to_col));
            }
            distance += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::checkers_types::*;

    #[test]
    fn regular_captures_jump_forward_only() {
        let mut board = Board::new(8);
        board.set_piece(5, 2, RED).expect("in bounds");
        board.set_piece(4, 1, BLACK).expect("in bounds");
        board.set_piece(4, 3, BLACK_KING).expect("in bounds");
        board.set_piece(6, 3, BLACK).expect("in bounds");
        let mut out = Vec::new();
        find_regular_captures(5, 2, &board, &mut out);
        assert_eq!(out, vec![Decision::take(5, 2, 3, 0), Decision::take(5, 2, 3, 4)]);
    }

    #[test]
    fn king_capture_lands_directly_behind_distant_enemy() {
        let mut board = Board::new(8);
        board.set_piece(0, 1, BLACK_KING).expect("in bounds");
        board.set_piece(3, 4, RED).expect("in bounds");
        let mut out = Vec::new();
        find_king_captures(0, 1, &board, &mut out);
        assert_eq!(out, vec![Decision::queen_take(0, 1, 4, 5)]);
    }

    #[test]
    fn king_captures_in_several_directions_follow_scan_order() {
        let mut board = Board::new(8);
        board.set_piece(4, 3, RED_KING).expect("in bounds");
        board.set_piece(2, 1, BLACK).expect("in bounds");
        board.set_piece(6, 5, BLACK).expect("in bounds");
        let mut out = Vec::new();
        find_king_captures(4, 3, &board, &mut out);
        assert_eq!(
            out,
            vec![Decision::queen_take(4, 3, 1, 0), Decision::queen_take(4, 3, 7, 6)]
        );
    }

    #[test]
    fn two_enemies_in_a_row_cannot_be_jumped() {
        let mut board = Board::new(8);
        board.set_piece(0, 1, RED_KING).expect("in bounds");
        board.set_piece(2, 3, BLACK).expect("in bounds");
        board.set_piece(3, 4, BLACK).expect("in bounds");
        let mut out = Vec::new();
        find_king_captures(0, 1, &board, &mut out);
        assert!(out.is_empty());
    }
}
