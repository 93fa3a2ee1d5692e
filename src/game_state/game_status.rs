//! End-of-game detection.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::*;
use crate::move_generation::legal_move_generator::get_possible_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Side),
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }

    /// PDN result token.
    pub fn result_token(self) -> &'static str {
        match self {
            GameStatus::InProgress => "*",
            GameStatus::Won(Side::Red) => "1-0",
            GameStatus::Won(Side::Black) => "0-1",
        }
    }
}

/// Winner by elimination only: the side with pieces left when the other has
/// none.
pub fn winner_by_elimination(board: &Board) -> Option<Side> {
    match (board.has_pieces_of(Side::Red), board.has_pieces_of(Side::Black)) {
        (true, false) => Some(Side::Red),
        (false, true) => Some(Side::Black),
        _ => None,
    }
}

/// Full status with `turn` to move: elimination first, then a side to move
/// with no legal decision loses.
pub fn game_status(board: &Board, turn: TurnState) -> GameStatus {
    if let Some(side) = winner_by_elimination(board) {
        return GameStatus::Won(side);
    }
    if get_possible_moves(board, turn).is_empty() {
        return GameStatus::Won(turn.side().opposite());
    }
    GameStatus::InProgress
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_position_is_in_progress() {
        let board = Board::standard();
        assert_eq!(winner_by_elimination(&board), None);
        assert_eq!(
            game_status(&board, TurnState::for_side(Side::Red)),
            GameStatus::InProgress
        );
    }

    #[test]
    fn side_without_pieces_loses() {
        let mut board = Board::new(8);
        board.set_piece(3, 2, BLACK_KING).expect("in bounds");
        assert_eq!(winner_by_elimination(&board), Some(Side::Black));
        assert_eq!(
            game_status(&board, TurnState::for_side(Side::Red)),
            GameStatus::Won(Side::Black)
        );
    }

    #[test]
    fn blocked_side_to_move_loses() {
        let mut board = Board::new(8);
        board.set_piece(7, 0, BLACK).expect("in bounds");
        board.set_piece(5, 4, RED).expect("in bounds");
        assert_eq!(
            game_status(&board, TurnState::for_side(Side::Black)),
            GameStatus::Won(Side::Red)
        );
        assert_eq!(
            game_status(&board, TurnState::for_side(Side::Red)),
            GameStatus::InProgress
        );
        assert_eq!(GameStatus::Won(Side::Red).result_token(), "1-0");
    }
}
