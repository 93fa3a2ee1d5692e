//! Full legal move generation pipeline.
//!
//! Decides whether the mover is under the mandatory-capture rule, then walks
//! the board in row-major order and dispatches each owned square to the
//! matching capture or move generator. Output order is therefore stable for
//! an unchanged board.

use tracing::debug;

use crate::game_state::board::Board;
use crate::game_state::checkers_types::TurnState;
use crate::game_state::piece_classification::is_king;
use crate::move_generation::capture_rules::{can_capture, check_all_pieces_possible_captures};
use crate::move_generation::decision::Decision;
use crate::move_generation::legal_captures::{find_king_captures, find_regular_captures};
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_regular::generate_regular_moves;
use crate::move_generation::move_generator::MoveGenerator;
use crate::move_generation::move_rules::can_move;

#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, board: &Board, turn: TurnState) -> Vec<Decision> {
        get_possible_moves(board, turn)
    }
}

/// Every legal decision for `turn` on `board`, honoring mandatory capture.
pub fn get_possible_moves(board: &Board, turn: TurnState) -> Vec<Decision> {
    let must_take = check_all_pieces_possible_captures(turn.color, turn.king_color, board);
    let mut out = Vec::with_capacity(16);

    for (row, col, code) in board.squares() {
        if !turn.owns(code) {
            continue;
        }
        if must_take {
            if !can_capture(row, col, board) {
                continue;
            }
            if is_king(code) {
                find_king_captures(row, col, board, &mut out);
            } else {
                find_regular_captures(row, col, board, &mut out);
            }
        } else {
            if !can_move(row, col, board) {
                continue;
            }
            if is_king(code) {
                generate_king_moves(row, col, board, &mut out);
            } else {
                generate_regular_moves(row, col, board, &mut out);
            }
        }
    }

    debug!(
        side = turn.side().name(),
        must_take,
        count = out.len(),
        "generated legal moves"
    );
    out
}
