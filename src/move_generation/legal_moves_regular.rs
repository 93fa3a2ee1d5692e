use crate::game_state::board::Board;
use crate::move_generation::decision::Decision;
use crate::move_generation::move_rules::{is_legal_move, regular_side};
use crate::move_generation::validators::is_valid_position;

/// Forward single-step moves of the regular piece on `(row, col)`.
pub fn generate_regular_moves(row: i32, col: i32, board: &Board, out: &mut Vec<Decision>) {
    let Some(color) = board.piece_at(row, col) else {
        return;
    };
    let Some(side) = regular_side(color) else {
        return;
    };

    let to_row = row + side.forward();
    for to_col in [col - 1, col + 1] {
        if is_valid_position(to_row, to_col, board)
            && is_legal_move(row, col, to_row, to_col, color, board)
        {
            out.push(Decision::step(row, col, to_row, to_col));
        }
    }
}
