//! Single-ply static evaluation of a candidate decision.
//!
//! Scoring plays the candidate onto a scratch board the caller already
//! copied, then sums the heuristic evaluators over the resulting position.

use tracing::debug;

use crate::errors::CheckersResult;
use crate::game_state::board::Board;
use crate::game_state::checkers_types::TurnState;
use crate::move_generation::decision::Decision;
use crate::move_generation::legal_move_apply::apply_move_to_board;
use crate::search::heuristics::{
    CaptureEvaluator, HeuristicEvaluator, PromotionEvaluator, ThreatEvaluator,
};

/// Scores one candidate on a board it owns exclusively.
pub trait CandidateScorer: Send + Sync {
    fn score_candidate(&self, decision: &Decision, scratch: Board, turn: TurnState) -> CheckersResult<i32>;
}

pub struct MoveEvaluator {
    heuristics: Vec<Box<dyn HeuristicEvaluator>>,
}

impl Default for MoveEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveEvaluator {
    /// Threat + capture-opportunity + promotion-chance.
    pub fn new() -> Self {
        Self::with_heuristics(vec![
            Box::new(ThreatEvaluator),
            Box::new(CaptureEvaluator),
            Box::new(PromotionEvaluator),
        ])
    }

    pub fn with_heuristics(heuristics: Vec<Box<dyn HeuristicEvaluator>>) -> Self {
        Self { heuristics }
    }

    pub fn evaluate_move(&self, decision: &Decision, mut scratch: Board, turn: TurnState) -> CheckersResult<i32> {
        apply_move_to_board(decision, &mut scratch, turn)?;
        let score = self
            .heuristics
            .iter()
            .map(|h| h.evaluate(decision, &scratch, turn))
            .sum();
        debug!(%decision, score, "evaluated candidate");
        Ok(score)
    }
}

impl CandidateScorer for MoveEvaluator {
    fn score_candidate(&self, decision: &Decision, scratch: Board, turn: TurnState) -> CheckersResult<i32> {
        self.evaluate_move(decision, scratch, turn)
    }
}
