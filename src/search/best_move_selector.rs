//! Argmax over scored candidates.
//!
//! A candidate replaces the current best when its score is greater than *or
//! equal to* the best so far, so among tied top scores the last one in
//! candidate order wins. There is no baseline score: the first candidate
//! always takes the slot.

use std::thread;

use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::board::Board;
use crate::game_state::checkers_types::TurnState;
use crate::move_generation::decision::Decision;
use crate::search::move_evaluator::CandidateScorer;

/// Best candidate scored on one fresh board copy each.
pub fn choose_best_move<S: CandidateScorer + ?Sized>(
    scorer: &S,
    candidates: &[Decision],
    board: &Board,
    turn: TurnState,
) -> CheckersResult<Decision> {
    if candidates.is_empty() {
        return Err(CheckersError::EmptyCandidates);
    }

    let mut best: Option<(i32, Decision)> = None;
    for decision in candidates {
        let score = scorer.score_candidate(decision, board.copy(), turn)?;
        best = pick(best, score, *decision);
    }
    best.map(|(_, decision)| decision)
        .ok_or(CheckersError::EmptyCandidates)
}

/// Same result as `choose_best_move`, scoring candidates on scoped worker
/// threads. Each worker owns its own board copies.
pub fn choose_best_move_parallel<S: CandidateScorer + ?Sized>(
    scorer: &S,
    candidates: &[Decision],
    board: &Board,
    turn: TurnState,
    threads: usize,
) -> CheckersResult<Decision> {
    if candidates.is_empty() {
        return Err(CheckersError::EmptyCandidates);
    }

    let chunk_len = candidates.len().div_ceil(threads.max(1));
    let scores = thread::scope(|scope| {
        let handles: Vec<_> = candidates
            .chunks(chunk_len)
            .map(|chunk| {
                scope.spawn(move || {
                    chunk
                        .iter()
                        .map(|decision| scorer.score_candidate(decision, board.copy(), turn))
                        .collect::<CheckersResult<Vec<i32>>>()
                })
            })
            .collect();

        let mut scores = Vec::with_capacity(candidates.len());
        for handle in handles {
            let chunk_scores = handle.join().map_err(|_| CheckersError::WorkerPanicked)??;
            scores.extend(chunk_scores);
        }
        Ok::<_, CheckersError>(scores)
    })?;

    let mut best: Option<(i32, Decision)> = None;
    for (score, decision) in scores.into_iter().zip(candidates) {
        best = pick(best, score, *decision);
    }
    best.map(|(_, decision)| decision)
        .ok_or(CheckersError::EmptyCandidates)
}

#[inline]
fn pick(best: Option<(i32, Decision)>, score: i32, decision: Decision) -> Option<(i32, Decision)> {
    match best {
        Some((best_score, _)) if score < best_score => best,
        _ => Some((score, decision)),
    }
}
