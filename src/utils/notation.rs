//! Numeric square notation (`11-15`, `15x22`).
//!
//! Playable squares are numbered 1.. row by row from row 0, so on the
//! standard board black starts on 1-12 and red on 21-32.

use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::board::Board;
use crate::game_state::checkers_types::TurnState;
use crate::move_generation::decision::Decision;
use crate::move_generation::legal_move_generator::get_possible_moves;

/// Number of a playable square, `None` for light squares or off-board input.
pub fn square_number(row: i32, col: i32, size: usize) -> Option<u32> {
    let size = size as i32;
    if row < 0 || col < 0 || row >= size || col >= size || (row + col) % 2 == 0 {
        return None;
    }
    Some((row * (size / 2) + col / 2 + 1) as u32)
}

pub fn square_from_number(number: u32, size: usize) -> Option<(i32, i32)> {
    let half = (size / 2) as u32;
    if number == 0 || half == 0 || number > half * size as u32 {
        return None;
    }
    let index = number - 1;
    let row = (index / half) as i32;
    let k = (index % half) as i32;
    let col = if row % 2 == 0 { 2 * k + 1 } else { 2 * k };
    if col >= size as i32 {
        return None;
    }
    Some((row, col))
}

pub fn decision_to_notation(decision: &Decision, size: usize) -> CheckersResult<String> {
    let from = square_number(decision.from_row, decision.from_col, size);
    let to = square_number(decision.to_row, decision.to_col, size);
    match (from, to) {
        (Some(from), Some(to)) => {
            let sep = if decision.move_type.is_capture() { 'x' } else { '-' };
            Ok(format!("{from}{sep}{to}"))
        }
        _ => Err(CheckersError::InvalidArgument(format!(
            "{decision} is not on playable squares"
        ))),
    }
}

/// Parse `a-b` / `axb` against the legal moves of `turn` on `board`.
pub fn notation_to_decision(text: &str, board: &Board, turn: TurnState) -> CheckersResult<Decision> {
    let invalid = || CheckersError::InvalidArgument(text.to_owned());
    let (from, to, capture) = if let Some((a, b)) = text.trim().split_once('x') {
        (a, b, true)
    } else if let Some((a, b)) = text.trim().split_once('-') {
        (a, b, false)
    } else {
        return Err(invalid());
    };

    let from = from.trim().parse::<u32>().map_err(|_| invalid())?;
    let to = to.trim().parse::<u32>().map_err(|_| invalid())?;
    let (from_row, from_col) = square_from_number(from, board.size()).ok_or_else(invalid)?;
    let (to_row, to_col) = square_from_number(to, board.size()).ok_or_else(invalid)?;

    get_possible_moves(board, turn)
        .into_iter()
        .find(|d| {
            d.from_row == from_row
                && d.from_col == from_col
                && d.to_row == to_row
                && d.to_col == to_col
                && d.move_type.is_capture() == capture
        })
        .ok_or_else(invalid)
}
