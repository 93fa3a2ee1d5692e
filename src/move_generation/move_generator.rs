use crate::game_state::board::Board;
use crate::game_state::checkers_types::TurnState;
use crate::move_generation::decision::Decision;

/// Produces every legal decision for the side described by `turn`.
///
/// The production implementation is `LegalMoveGenerator`; tests substitute
/// fixed candidate lists through this trait.
pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, board: &Board, turn: TurnState) -> Vec<Decision>;
}

/// Generator that never yields a move. Handy for exercising "no legal move"
/// paths.
pub struct NullMoveGenerator;

impl MoveGenerator for NullMoveGenerator {
    fn generate_legal_moves(&self, _board: &Board, _turn: TurnState) -> Vec<Decision> {
        Vec::new()
    }
}

/// Generator that always returns the same candidates, whatever the board.
#[derive(Debug, Clone, Default)]
pub struct FixedMoveGenerator {
    pub decisions: Vec<Decision>,
}

impl MoveGenerator for FixedMoveGenerator {
    fn generate_legal_moves(&self, _board: &Board, _turn: TurnState) -> Vec<Decision> {
        self.decisions.clone()
    }
}
