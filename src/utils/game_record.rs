//! Timestamped move history and PDN export.

use std::collections::BTreeMap;

use chrono::{DateTime, Local};

use crate::errors::CheckersResult;
use crate::game_state::board::Board;
use crate::game_state::checkers_types::Side;
use crate::game_state::game_status::GameStatus;
use crate::move_generation::decision::Decision;
use crate::utils::notation::decision_to_notation;

#[derive(Debug, Clone)]
pub struct RecordedMove {
    pub ply: usize,
    pub side: Side,
    pub decision: Decision,
    pub promoted: bool,
    pub played_at: DateTime<Local>,
}

#[derive(Debug, Clone)]
pub struct GameRecord {
    pub started_at: DateTime<Local>,
    pub initial_board: Board,
    pub moves: Vec<RecordedMove>,
    pub red_name: String,
    pub black_name: String,
}

impl GameRecord {
    pub fn new(initial_board: &Board) -> Self {
        Self {
            started_at: Local::now(),
            initial_board: initial_board.copy(),
            moves: Vec::new(),
            red_name: Side::Red.name().to_owned(),
            black_name: Side::Black.name().to_owned(),
        }
    }

    pub fn with_players(mut self, red_name: &str, black_name: &str) -> Self {
        self.red_name = red_name.to_owned();
        self.black_name = black_name.to_owned();
        self
    }

    pub fn push(&mut self, side: Side, decision: Decision, promoted: bool) {
        self.moves.push(RecordedMove {
            ply: self.moves.len() + 1,
            side,
            decision,
            promoted,
            played_at: Local::now(),
        });
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn last(&self) -> Option<&RecordedMove> {
        self.moves.last()
    }

    pub fn captures(&self) -> usize {
        self.moves
            .iter()
            .filter(|m| m.decision.move_type.is_capture())
            .count()
    }

    /// Time between the first recorded move and the last one.
    pub fn duration(&self) -> chrono::Duration {
        match (self.moves.first(), self.moves.last()) {
            (Some(first), Some(last)) => last.played_at - first.played_at,
            _ => chrono::Duration::zero(),
        }
    }

    /// Portable Draughts Notation text of the game so far.
    pub fn to_pdn(&self, status: GameStatus) -> CheckersResult<String> {
        let mut headers = BTreeMap::<&str, String>::new();
        headers.insert("Event", "Plum Checkers Game".to_owned());
        headers.insert("Date", self.started_at.format("%Y.%m.%d").to_string());
        headers.insert("Red", self.red_name.clone());
        headers.insert("Black", self.black_name.clone());
        headers.insert("Result", status.result_token().to_owned());

        let mut out = String::new();
        for (key, value) in &headers {
            out.push_str(&format!("[{} \"{}\"]\n", key, value.replace('"', "'")));
        }
        out.push('\n');

        let size = self.initial_board.size();
        let mut parts = Vec::<String>::with_capacity(self.moves.len() + 1);
        for recorded in &self.moves {
            let text = decision_to_notation(&recorded.decision, size)?;
            if (recorded.ply - 1) % 2 == 0 {
                parts.push(format!("{}. {}", (recorded.ply - 1) / 2 + 1, text));
            } else {
                parts.push(text);
            }
        }
        parts.push(status.result_token().to_owned());
        out.push_str(&parts.join(" "));
        out.push('\n');
        Ok(out)
    }
}
