use crate::game_state::board::Board;
use crate::game_state::piece_classification::is_king;
use crate::move_generation::decision::Decision;
use crate::move_generation::move_rules::is_legal_move;
use crate::move_generation::validators::{is_valid_position, DIAGONALS};

/// Sliding moves of the king on `(row, col)`: every square reachable along an
/// unobstructed diagonal, in up-left, up-right, down-left, down-right order.
pub fn generate_king_moves(row: i32, col: i32, board: &Board, out: &mut Vec<Decision>) {
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
            if is_legal_move(row, col, to_row, to_col, color, board) {
                out.push(Decision::step(row, col, to_row, to_col));
            }
            distance += 1;
        }
    }
}
