//! Static heuristics scored on the board *after* a candidate move.
//!
//! Each evaluator is a pure function of `(decision, board, turn)`; the board
//! handed in is the caller's scratch copy and is never mutated here.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::TurnState;
use crate::game_state::piece_classification::is_king;
use crate::move_generation::capture_rules::check_all_pieces_possible_captures;
use crate::move_generation::decision::Decision;

pub const REGULAR_THREAT_PENALTY: i32 = 5;
pub const KING_THREAT_PENALTY: i32 = 10;
pub const CAPTURE_OPPORTUNITY_BONUS: i32 = 4;
pub const PROMOTION_CHANCE_BONUS: i32 = 2;

pub trait HeuristicEvaluator: Send + Sync {
    fn evaluate(&self, decision: &Decision, board: &Board, turn: TurnState) -> i32;
}

/// Penalizes leaving the opponent a capture, more so when the moved piece is
/// a king.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreatEvaluator;

impl HeuristicEvaluator for ThreatEvaluator {
    fn evaluate(&self, decision: &Decision, board: &Board, turn: TurnState) -> i32 {
        let opponent = turn.opponent();
        if !check_all_pieces_possible_captures(opponent.color, opponent.king_color, board) {
            return 0;
        }
        match board.piece_at(decision.to_row, decision.to_col) {
            Some(code) if is_king(code) => -KING_THREAT_PENALTY,
            _ => -REGULAR_THREAT_PENALTY,
        }
    }
}

/// Rewards positions where the mover still has a capture lined up.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaptureEvaluator;

impl HeuristicEvaluator for CaptureEvaluator {
    fn evaluate(&self, _decision: &Decision, board: &Board, turn: TurnState) -> i32 {
        if check_all_pieces_possible_captures(turn.color, turn.king_color, board) {
            CAPTURE_OPPORTUNITY_BONUS
        } else {
            0
        }
    }
}

/// Rewards regular-piece moves while the mover has men on its promotion row.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromotionEvaluator;

impl HeuristicEvaluator for PromotionEvaluator {
    fn evaluate(&self, decision: &Decision, board: &Board, turn: TurnState) -> i32 {
        let moved_is_king = board
            .piece_at(decision.to_row, decision.to_col)
            .is_some_and(is_king);
        if moved_is_king {
            return 0;
        }

        let promotion_row = turn.side().promotion_row(board.size());
        let row_has_man = board
            .squares()
            .any(|(row, _, code)| row == promotion_row && code == turn.color);
        if row_has_man {
            PROMOTION_CHANCE_BONUS
        } else {
            0
        }
    }
}
