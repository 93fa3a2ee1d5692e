//! Random-move engine.
//!
//! Selects uniformly from the legal decisions and is mainly used for
//! diagnostics, match-harness opponents, and low-strength play.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::Engine;
use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::board::Board;
use crate::game_state::checkers_types::TurnState;
use crate::move_generation::decision::Decision;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;

pub struct RandomEngine {
    move_generator: LegalMoveGenerator,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible move choice for tests and seeded match series.
    pub fn seeded(seed: u64) -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "PlumCheckers Random"
    }

    fn choose_move(&mut self, board: &Board, turn: TurnState) -> CheckersResult<Decision> {
        let legal_moves = self.move_generator.generate_legal_moves(board, turn);
        legal_moves
            .as_slice()
            .choose(&mut self.rng)
            .copied()
            .ok_or(CheckersError::EmptyCandidates)
    }
}
