//! Legality queries for an input layer turning clicks into moves.
//!
//! A human may only play what the generator would offer the bot, so every
//! query is answered from the generated decision list.

use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::board::Board;
use crate::game_state::checkers_types::TurnState;
use crate::move_generation::capture_rules::check_all_pieces_possible_captures;
use crate::move_generation::decision::Decision;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default)]
pub struct MoveService<G = LegalMoveGenerator> {
    move_generator: G,
}

impl<G: MoveGenerator> MoveService<G> {
    pub fn new(move_generator: G) -> Self {
        Self { move_generator }
    }

    /// True when the side to move must capture this turn.
    pub fn must_take(&self, board: &Board, turn: TurnState) -> bool {
        check_all_pieces_possible_captures(turn.color, turn.king_color, board)
    }

    pub fn get_possible_moves(&self, board: &Board, turn: TurnState) -> Vec<Decision> {
        self.move_generator.generate_legal_moves(board, turn)
    }

    /// True if the piece on `(row, col)` belongs to the mover and has at least
    /// one legal decision.
    pub fn can_select_piece(&self, row: i32, col: i32, board: &Board, turn: TurnState) -> bool {
        if !board.piece_at(row, col).is_some_and(|x| turn.owns(x)) {
            return false;
        }
        self.get_possible_moves(board, turn)
            .iter()
            .any(|d| d.from_row == row && d.from_col == col)
    }

    /// Decisions available to the piece on `(row, col)`, for highlighting.
    pub fn moves_from(&self, row: i32, col: i32, board: &Board, turn: TurnState) -> Vec<Decision> {
        self.get_possible_moves(board, turn)
            .into_iter()
            .filter(|d| d.from_row == row && d.from_col == col)
            .collect()
    }

    pub fn is_legal_move(&self, decision: &Decision, board: &Board, turn: TurnState) -> bool {
        self.get_possible_moves(board, turn).contains(decision)
    }

    /// Resolve a clicked `from -> to` pair into the legal decision it names.
    pub fn resolve_click(
        &self,
        from: (i32, i32),
        to: (i32, i32),
        board: &Board,
        turn: TurnState,
    ) -> CheckersResult<Decision> {
        self.get_possible_moves(board, turn)
            .into_iter()
            .find(|d| (d.from_row, d.from_col) == from && (d.to_row, d.to_col) == to)
            .ok_or_else(|| {
                CheckersError::InvalidArgument(format!(
                    "no legal move from {from:?} to {to:?}"
                ))
            })
    }

    pub fn validate_player_move(&self, decision: &Decision, board: &Board, turn: TurnState) -> CheckersResult<()> {
        if self.is_legal_move(decision, board, turn) {
            Ok(())
        } else {
            Err(CheckersError::IllegalMove(*decision))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::checkers_types::*;

    fn service() -> MoveService {
        MoveService::new(LegalMoveGenerator)
    }

    #[test]
    fn only_front_men_are_selectable_at_the_start() {
        let board = Board::standard();
        let red = TurnState::for_side(Side::Red);
        assert!(service().can_select_piece(5, 0, &board, red));
        assert!(!service().can_select_piece(6, 1, &board, red));
        assert!(!service().can_select_piece(2, 1, &board, red));
        assert!(!service().can_select_piece(4, 1, &board, red));
    }

    #[test]
    fn under_mandatory_capture_only_capturers_are_selectable() {
        let mut board = Board::new(8);
        board.set_piece(5, 2, RED).expect("in bounds");
        board.set_piece(4, 3, BLACK).expect("in bounds");
        board.set_piece(6, 7, RED).expect("in bounds");
        let red = TurnState::for_side(Side::Red);
        assert!(service().must_take(&board, red));
        assert!(service().can_select_piece(5, 2, &board, red));
        assert!(!service().can_select_piece(6, 7, &board, red));
        assert_eq!(
            service().validate_player_move(&Decision::step(6, 7, 5, 6), &board, red),
            Err(CheckersError::IllegalMove(Decision::step(6, 7, 5, 6)))
        );
        assert_eq!(
            service().resolve_click((5, 2), (3, 4), &board, red),
            Ok(Decision::take(5, 2, 3, 4))
        );
    }

    #[test]
    fn moves_from_lists_one_pieces_options() {
        let board = Board::standard();
        let black = TurnState::for_side(Side::Black);
        assert_eq!(
            service().moves_from(2, 3, &board, black),
            vec![Decision::step(2, 3, 3, 2), Decision::step(2, 3, 3, 4)]
        );
        assert!(service().resolve_click((2, 3), (4, 5), &board, black).is_err());
    }
}
