//! Minimal head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other with no UI and no
//! thinking delay, until one side wins or the ply limit is reached.

use tracing::{debug, info};

use crate::engines::engine_trait::Engine;
use crate::errors::CheckersResult;
use crate::game_state::board::Board;
use crate::game_state::checkers_types::Side;
use crate::game_state::game_status::{game_status, GameStatus};
use crate::game_state::turn_manager::TurnManager;
use crate::move_generation::legal_move_apply::execute_decision;
use crate::utils::game_record::GameRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    RedWin,
    BlackWin,
    DrawMaxPlies,
}

impl MatchOutcome {
    pub fn status(self) -> GameStatus {
        match self {
            MatchOutcome::RedWin => GameStatus::Won(Side::Red),
            MatchOutcome::BlackWin => GameStatus::Won(Side::Black),
            MatchOutcome::DrawMaxPlies => GameStatus::InProgress,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub first_to_move: Side,
    pub initial_board: Board,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            first_to_move: Side::Red,
            initial_board: Board::standard(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub record: GameRecord,
    pub final_board: Board,
}

pub fn play_match(
    red: &mut dyn Engine,
    black: &mut dyn Engine,
    config: &MatchConfig,
) -> CheckersResult<MatchResult> {
    red.new_game();
    black.new_game();

    let mut board = config.initial_board.copy();
    let mut turns = TurnManager::new(config.first_to_move);
    let mut record = GameRecord::new(&board).with_players(red.name(), black.name());

    let mut outcome = MatchOutcome::DrawMaxPlies;
    for _ in 0..config.max_plies {
        let turn = turns.current();
        if let GameStatus::Won(winner) = game_status(&board, turn) {
            outcome = match winner {
                Side::Red => MatchOutcome::RedWin,
                Side::Black => MatchOutcome::BlackWin,
            };
            break;
        }

        let engine: &mut dyn Engine = match turn.side() {
            Side::Red => &mut *red,
            Side::Black => &mut *black,
        };
        let decision = engine.choose_move(&board, turn)?;
        let promoted = execute_decision(&decision, &mut board, turn)?;
        debug!(side = turn.side().name(), %decision, promoted, "match move");
        record.push(turn.side(), decision, promoted);
        turns.switch_turn();
    }

    if outcome == MatchOutcome::DrawMaxPlies {
        if let GameStatus::Won(winner) = game_status(&board, turns.current()) {
            outcome = match winner {
                Side::Red => MatchOutcome::RedWin,
                Side::Black => MatchOutcome::BlackWin,
            };
        }
    }

    info!(?outcome, plies = record.len(), "match finished");
    Ok(MatchResult {
        outcome,
        record,
        final_board: board,
    })
}

/// Tally of a series, from the first engine's point of view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeriesSummary {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl SeriesSummary {
    pub fn add(&mut self, outcome: MatchOutcome, first_engine_side: Side) {
        match (outcome, first_engine_side) {
            (MatchOutcome::DrawMaxPlies, _) => self.draws += 1,
            (MatchOutcome::RedWin, Side::Red) | (MatchOutcome::BlackWin, Side::Black) => {
                self.wins += 1
            }
            _ => self.losses += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::bot_ai::BotAi;
    use crate::engines::engine_random::RandomEngine;
    use crate::game_state::checkers_types::*;

    #[test]
    fn match_ends_with_a_result_and_a_legal_record() {
        let mut red = BotAi::new();
        let mut black = RandomEngine::seeded(11);
        let result = play_match(&mut red, &mut black, &MatchConfig::default()).expect("match runs");

        assert!(result.record.len() <= 200);
        assert!(result.record.to_pdn(result.outcome.status()).is_ok());
        match result.outcome {
            MatchOutcome::RedWin => assert!(!result.final_board.has_pieces_of(Side::Black)
                || game_status(&result.final_board, TurnState::for_side(Side::Black)).is_over()),
            MatchOutcome::BlackWin => assert!(!result.final_board.has_pieces_of(Side::Red)
                || game_status(&result.final_board, TurnState::for_side(Side::Red)).is_over()),
            MatchOutcome::DrawMaxPlies => assert_eq!(result.record.len(), 200),
        }
    }

    #[test]
    fn decided_position_finishes_immediately() {
        let mut board = Board::new(8);
        board.set_piece(4, 3, RED).expect("in bounds");
        let config = MatchConfig {
            initial_board: board,
            ..MatchConfig::default()
        };
        let result = play_match(&mut BotAi::new(), &mut BotAi::new(), &config).expect("match runs");
        assert_eq!(result.outcome, MatchOutcome::RedWin);
        assert!(result.record.is_empty());
    }

    #[test]
    fn series_summary_counts_from_first_engine_view() {
        let mut summary = SeriesSummary::default();
        summary.add(MatchOutcome::RedWin, Side::Red);
        summary.add(MatchOutcome::RedWin, Side::Black);
        summary.add(MatchOutcome::DrawMaxPlies, Side::Red);
        assert_eq!(
            summary,
            SeriesSummary {
                wins: 1,
                losses: 1,
                draws: 1
            }
        );
    }
}
