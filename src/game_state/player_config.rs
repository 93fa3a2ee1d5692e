use crate::game_state::checkers_types::*;

/// Which piece codes belong to the human and which to the computer.
/// Read-only from the engine's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerConfig {
    pub human_color: PieceCode,
    pub human_king_color: PieceCode,
    pub bot_color: PieceCode,
    pub bot_king_color: PieceCode,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self::with_bot_side(Side::Black)
    }
}

impl PlayerConfig {
    pub const fn with_bot_side(bot: Side) -> Self {
        let human = bot.opposite();
        Self {
            human_color: human.color(),
            human_king_color: human.king_color(),
            bot_color: bot.color(),
            bot_king_color: bot.king_color(),
        }
    }

    #[inline]
    pub fn bot_side(&self) -> Option<Side> {
        Side::of(self.bot_color)
    }

    #[inline]
    pub fn human_side(&self) -> Option<Side> {
        Side::of(self.human_color)
    }
}
