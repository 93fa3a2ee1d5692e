//! Errors used throughout the checkers engine.
//!
//! `CheckersError` is the single error type returned by board access, move
//! execution, candidate selection and the turn-flow controller. Unrecognized
//! piece codes and move kinds are not errors: rule predicates
//! answer `false` for them and the executor leaves the board untouched.

use thiserror::Error;

use crate::game_state::game_status::GameStatus;
use crate::move_generation::decision::Decision;

/// Unified error type for the checkers engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckersError {
    /// A board read or write addressed a square outside the grid.
    #[error("square ({row}, {col}) is outside the board")]
    OutOfBounds { row: i32, col: i32 },

    /// `choose_best_move` was handed no candidates.
    #[error("cannot choose a best move from an empty candidate list")]
    EmptyCandidates,

    /// A required collaborator was never wired in.
    #[error("missing collaborator: {0}")]
    MissingCollaborator(&'static str),

    /// A player tried a move that is not in the legal move list.
    #[error("illegal move: {0}")]
    IllegalMove(Decision),

    /// A turn was requested after the game finished.
    #[error("game is already over: {0:?}")]
    GameOver(GameStatus),

    /// A bot worker thread panicked before reporting.
    #[error("bot worker thread panicked")]
    WorkerPanicked,

    /// Bad user supplied argument (CLI, notation parsing).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias for checkers engine operations.
pub type CheckersResult<T> = Result<T, CheckersError>;
