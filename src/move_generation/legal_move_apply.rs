//! Board mutation for a single decision.
//!
//! Every square a decision touches is bounds-checked before the first write,
//! so a malformed decision fails without leaving the board half-updated.

use crate::errors::CheckersResult;
use crate::game_state::board::Board;
use crate::game_state::checkers_types::*;
use crate::move_generation::decision::{Decision, MoveType};
use crate::move_generation::promotion::promote_if_needed;

/// Realize `decision` on `board` for the mover described by `turn`.
///
/// - `Move`: the piece on `from` is carried to `to`.
/// - `Take`: the mover's regular color lands on `to`; the midpoint is cleared.
/// - `QueenTake`: the mover's king lands on `to`; the square right before
///   `to` along the direction of travel is cleared.
pub fn apply_move_to_board(decision: &Decision, board: &mut Board, turn: TurnState) -> CheckersResult<()> {
    let Decision {
        from_row,
        from_col,
        to_row,
        to_col,
        move_type,
    } = *decision;

    let moving = board.get_piece(from_row, from_col)?;
    board.get_piece(to_row, to_col)?;

    match move_type {
        MoveType::Move => {
            board.set_piece(from_row, from_col, EMPTY)?;
            board.set_piece(to_row, to_col, moving)?;
        }
        MoveType::Take => {
            let (over_row, over_col) = ((from_row + to_row) / 2, (from_col + to_col) / 2);
            board.get_piece(over_row, over_col)?;
            board.set_piece(from_row, from_col, EMPTY)?;
            board.set_piece(to_row, to_col, turn.color)?;
            board.set_piece(over_row, over_col, EMPTY)?;
        }
        MoveType::QueenTake => {
            let (over_row, over_col) = captured_square(decision);
            board.get_piece(over_row, over_col)?;
            board.set_piece(from_row, from_col, EMPTY)?;
            board.set_piece(to_row, to_col, turn.king_color)?;
            board.set_piece(over_row, over_col, EMPTY)?;
        }
    }
    Ok(())
}

/// Apply `decision` and crown the landing piece if it reached its promotion
/// row. Returns whether a promotion happened.
pub fn execute_decision(decision: &Decision, board: &mut Board, turn: TurnState) -> CheckersResult<bool> {
    let pre_move_color = board.get_piece(decision.from_row, decision.from_col)?;
    apply_move_to_board(decision, board, turn)?;
    promote_if_needed(board, decision.to_row, decision.to_col, pre_move_color)
}

/// Square whose piece a capture removes; `None` for plain moves.
pub fn captured_square_of(decision: &Decision) -> Option<(i32, i32)> {
    match decision.move_type {
        MoveType::Move => None,
        MoveType::Take => Some((
            (decision.from_row + decision.to_row) / 2,
            (decision.from_col + decision.to_col) / 2,
        )),
        MoveType::QueenTake => Some(captured_square(decision)),
    }
}

#[inline]
fn captured_square(decision: &Decision) -> (i32, i32) {
    (
        decision.to_row - (decision.to_row - decision.from_row).signum(),
        decision.to_col - (decision.to_col - decision.from_col).signum(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CheckersError;

    #[test]
    fn plain_move_carries_the_piece() {
        let mut board = Board::new(8);
        board.set_piece(2, 3, BLACK_KING).expect("in bounds");
        apply_move_to_board(
            &Decision::step(2, 3, 5, 6),
            &mut board,
            TurnState::for_side(Side::Black),
        )
        .expect("move applies");
        assert_eq!(board.get_piece(2, 3), Ok(EMPTY));
        assert_eq!(board.get_piece(5, 6), Ok(BLACK_KING));
    }

    #[test]
    fn take_clears_the_midpoint() {
        let mut board = Board::new(8);
        board.set_piece(1, 0, BLACK).expect("in bounds");
        board.set_piece(2, 1, RED).expect("in bounds");
        apply_move_to_board(
            &Decision::take(1, 0, 3, 2),
            &mut board,
            TurnState::for_side(Side::Black),
        )
        .expect("take applies");
        assert_eq!(board.get_piece(1, 0), Ok(EMPTY));
        assert_eq!(board.get_piece(2, 1), Ok(EMPTY));
        assert_eq!(board.get_piece(3, 2), Ok(BLACK));
    }

    #[test]
    fn queen_take_clears_the_square_before_landing_not_the_midpoint() {
        let mut board = Board::new(8);
        board.set_piece(0, 1, RED_KING).expect("in bounds");
        board.set_piece(3, 4, BLACK).expect("in bounds");
        board.set_piece(2, 3, BLACK).expect("in bounds");
        apply_move_to_board(
            &Decision::queen_take(0, 1, 4, 5),
            &mut board,
            TurnState::for_side(Side::Red),
        )
        .expect("queen take applies");
        assert_eq!(board.get_piece(0, 1), Ok(EMPTY));
        assert_eq!(board.get_piece(3, 4), Ok(EMPTY));
        assert_eq!(board.get_piece(2, 3), Ok(BLACK));
        assert_eq!(board.get_piece(4, 5), Ok(RED_KING));
    }

    #[test]
    fn malformed_decision_fails_without_mutation() {
        let mut board = Board::standard();
        let before = board.copy();
        let result = apply_move_to_board(
            &Decision::step(5, 0, 9, 9),
            &mut board,
            TurnState::for_side(Side::Red),
        );
        assert_eq!(result, Err(CheckersError::OutOfBounds { row: 9, col: 9 }));
        assert_eq!(board, before);
    }

    #[test]
    fn execute_decision_crowns_on_arrival() {
        let mut board = Board::new(8);
        board.set_piece(1, 2, RED).expect("in bounds");
        let promoted = execute_decision(
            &Decision::step(1, 2, 0, 1),
            &mut board,
            TurnState::for_side(Side::Red),
        )
        .expect("move applies");
        assert!(promoted);
        assert_eq!(board.get_piece(0, 1), Ok(RED_KING));

        let promoted = execute_decision(
            &Decision::step(0, 1, 1, 0),
            &mut board,
            TurnState::for_side(Side::Red),
        )
        .expect("move applies");
        assert!(!promoted);
        assert_eq!(board.get_piece(1, 0), Ok(RED_KING));
    }

    #[test]
    fn captured_square_matches_the_executor() {
        assert_eq!(captured_square_of(&Decision::take(1, 0, 3, 2)), Some((2, 1)));
        assert_eq!(captured_square_of(&Decision::queen_take(0, 1, 4, 5)), Some((3, 4)));
        assert_eq!(captured_square_of(&Decision::queen_take(7, 6, 2, 1)), Some((3, 2)));
        assert_eq!(captured_square_of(&Decision::step(5, 0, 4, 1)), None);
    }
}
