//! Greedy single-ply computer opponent.
//!
//! Generates every legal decision for the side to move (mandatory capture
//! included), scores each one on its own board copy, and keeps the best
//! with the last-wins tie-break.

use tracing::debug;

use crate::engines::engine_trait::Engine;
use crate::errors::CheckersResult;
use crate::game_state::board::Board;
use crate::game_state::checkers_types::TurnState;
use crate::move_generation::decision::Decision;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::search::best_move_selector::{choose_best_move, choose_best_move_parallel};
use crate::search::move_evaluator::{CandidateScorer, MoveEvaluator};

pub struct BotAi<G = LegalMoveGenerator, S = MoveEvaluator> {
    move_generator: G,
    scorer: S,
    scoring_threads: usize,
}

impl BotAi {
    pub fn new() -> Self {
        Self::with_parts(LegalMoveGenerator, MoveEvaluator::new())
    }
}

impl Default for BotAi {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: MoveGenerator, S: CandidateScorer> BotAi<G, S> {
    pub fn with_parts(move_generator: G, scorer: S) -> Self {
        Self {
            move_generator,
            scorer,
            scoring_threads: 1,
        }
    }

    /// Score candidates on up to `threads` workers. The choice is unchanged.
    pub fn with_scoring_threads(mut self, threads: usize) -> Self {
        self.scoring_threads = threads.max(1);
        self
    }

    pub fn make_move(&self, board: &Board, turn: TurnState) -> CheckersResult<Decision> {
        let candidates = self.move_generator.generate_legal_moves(board, turn);
        debug!(
            side = turn.side().name(),
            candidates = candidates.len(),
            "bot choosing move"
        );
        if self.scoring_threads > 1 {
            choose_best_move_parallel(&self.scorer, &candidates, board, turn, self.scoring_threads)
        } else {
            choose_best_move(&self.scorer, &candidates, board, turn)
        }
    }
}

impl<G: MoveGenerator, S: CandidateScorer> Engine for BotAi<G, S> {
    fn name(&self) -> &str {
        "PlumCheckers Greedy"
    }

    fn choose_move(&mut self, board: &Board, turn: TurnState) -> CheckersResult<Decision> {
        self.make_move(board, turn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CheckersError;
    use crate::game_state::checkers_types::*;
    use crate::move_generation::decision::MoveType;
    use crate::move_generation::move_generator::{FixedMoveGenerator, NullMoveGenerator};

    #[test]
    fn picks_a_legal_opening_move() {
        let board = Board::standard();
        let turn = TurnState::for_side(Side::Red);
        let decision = BotAi::new().make_move(&board, turn).expect("has moves");
        assert!(LegalMoveGenerator.generate_legal_moves(&board, turn).contains(&decision));
    }

    #[test]
    fn takes_when_a_capture_is_mandatory() {
        let mut board = Board::new(8);
        board.set_piece(5, 2, RED).expect("in bounds");
        board.set_piece(4, 3, BLACK).expect("in bounds");
        board.set_piece(6, 7, RED).expect("in bounds");
        let decision = BotAi::new()
            .make_move(&board, TurnState::for_side(Side::Red))
            .expect("has moves");
        assert_eq!(decision.move_type, MoveType::Take);
    }

    #[test]
    fn avoids_stepping_into_a_capture() {
        // (5,2)->(4,3) can be jumped by (3,4); (5,2)->(4,1) cannot be jumped.
        let mut board = Board::new(8);
        board.set_piece(5, 2, RED).expect("in bounds");
        board.set_piece(3, 4, BLACK).expect("in bounds");
        board.set_piece(2, 5, BLACK).expect("in bounds");
        let decision = BotAi::with_parts(
            FixedMoveGenerator {
                decisions: vec![Decision::step(5, 2, 4, 1), Decision::step(5, 2, 4, 3)],
            },
            MoveEvaluator::new(),
        )
        .make_move(&board, TurnState::for_side(Side::Red))
        .expect("has moves");
        assert_eq!(decision, Decision::step(5, 2, 4, 1));
    }

    #[test]
    fn no_candidates_surfaces_the_selector_error() {
        let result = BotAi::with_parts(NullMoveGenerator, MoveEvaluator::new())
            .make_move(&Board::standard(), TurnState::for_side(Side::Red));
        assert_eq!(result, Err(CheckersError::EmptyCandidates));
    }

    #[test]
    fn threaded_scoring_makes_the_same_choice() {
        let board = Board::standard();
        let turn = TurnState::for_side(Side::Black);
        let single = BotAi::new().make_move(&board, turn).expect("has moves");
        let threaded = BotAi::new()
            .with_scoring_threads(4)
            .make_move(&board, turn)
            .expect("has moves");
        assert_eq!(single, threaded);
    }
}
