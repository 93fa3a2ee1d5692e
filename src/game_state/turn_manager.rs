//! Tracks whose move it is.
//!
//! There are exactly two sides, so switching is a toggle between the two
//! fixed `(color, king_color)` pairs rather than a rotation.

use crate::game_state::checkers_types::*;
use crate::game_state::player_config::PlayerConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnManager {
    current: TurnState,
}

impl Default for TurnManager {
    fn default() -> Self {
        Self::new(Side::Red)
    }
}

impl TurnManager {
    pub const fn new(first: Side) -> Self {
        Self {
            current: TurnState::for_side(first),
        }
    }

    #[inline]
    pub const fn current(&self) -> TurnState {
        self.current
    }

    #[inline]
    pub const fn current_color(&self) -> PieceCode {
        self.current.color
    }

    #[inline]
    pub const fn current_king_color(&self) -> PieceCode {
        self.current.king_color
    }

    #[inline]
    pub const fn current_side(&self) -> Side {
        self.current.side()
    }

    pub fn switch_turn(&mut self) {
        self.current = self.current.opponent();
    }

    pub fn is_current_player_bot(&self, config: &PlayerConfig) -> bool {
        self.current.color == config.bot_color
    }
}
