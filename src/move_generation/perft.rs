//! Node counting over the generator + executor, for regression checks and
//! benchmarks.

use std::sync::Arc;
use std::thread;

use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::board::Board;
use crate::game_state::checkers_types::TurnState;
use crate::move_generation::decision::MoveType;
use crate::move_generation::legal_move_apply::execute_decision;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub king_captures: usize,
    pub promotions: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.king_captures += rhs.king_captures;
        self.promotions += rhs.promotions;
    }
}

pub fn perft<G: MoveGenerator>(
    generator: &G,
    board: &Board,
    turn: TurnState,
    depth: u8,
) -> CheckersResult<PerftCounts> {
    let mut total = PerftCounts::default();
    perft_recurse(generator, board, turn, depth, &mut total)?;
    Ok(total)
}

/// Same counts as `perft`, with each root move explored on its own thread.
pub fn perft_multi_threaded(
    generator: Arc<dyn MoveGenerator>,
    board: &Board,
    turn: TurnState,
    depth: u8,
) -> CheckersResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let root_moves = generator.generate_legal_moves(board, turn);
    let mut handles = Vec::with_capacity(root_moves.len());

    for decision in root_moves {
        let generator_ref = Arc::clone(&generator);
        let mut next = board.copy();
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            let result = execute_decision(&decision, &mut next, turn).and_then(|promoted| {
                tally(&mut local, decision.move_type, promoted, depth == 1);
                perft_recurse(generator_ref.as_ref(), &next, turn.opponent(), depth - 1, &mut local)
            });
            (result, local)
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let (result, local) = handle.join().map_err(|_| CheckersError::WorkerPanicked)?;
        result?;
        total.merge(local);
    }

    Ok(total)
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    board: &Board,
    turn: TurnState,
    depth: u8,
    counts: &mut PerftCounts,
) -> CheckersResult<()> {
    if depth == 0 {
        counts.nodes += 1;
        return Ok(());
    }

    for decision in generator.generate_legal_moves(board, turn) {
        let mut next = board.copy();
        let promoted = execute_decision(&decision, &mut next, turn)?;
        tally(counts, decision.move_type, promoted, depth == 1);
        perft_recurse(generator, &next, turn.opponent(), depth - 1, counts)?;
    }
    Ok(())
}

/// Leaf statistics are only recorded for moves made at the last ply.
fn tally(counts: &mut PerftCounts, move_type: MoveType, promoted: bool, is_leaf_move: bool) {
    if !is_leaf_move {
        return;
    }
    match move_type {
        MoveType::Take => counts.captures += 1,
        MoveType::QueenTake => {
            counts.captures += 1;
            counts.king_captures += 1;
        }
        MoveType::Move => {}
    }
    if promoted {
        counts.promotions += 1;
    }
}
