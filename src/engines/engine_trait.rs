//! Engine abstraction used by the controller and the match harness.
//!
//! Different move-choice strategies sit behind this single trait so the
//! turn flow can run any of them for the computer player.

use crate::errors::CheckersResult;
use crate::game_state::board::Board;
use crate::game_state::checkers_types::TurnState;
use crate::move_generation::decision::Decision;

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Pick a decision for the side described by `turn`.
    fn choose_move(&mut self, board: &Board, turn: TurnState) -> CheckersResult<Decision>;
}
