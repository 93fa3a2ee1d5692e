//! Crate root module declarations for the Plum Checkers project.
//!
//! This file exposes all top-level subsystems (board state, move generation,
//! greedy scoring, engines, the turn controller, and utility helpers) so
//! binaries, tests, and benches can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod checkers_types;
    pub mod game_status;
    pub mod piece_classification;
    pub mod player_config;
    pub mod turn_manager;
}

pub mod move_generation {
    pub mod capture_rules;
    pub mod decision;
    pub mod legal_captures;
    pub mod legal_move_apply;
    pub mod legal_move_generator;
    pub mod legal_moves_king;
    pub mod legal_moves_regular;
    pub mod move_generator;
    pub mod move_rules;
    pub mod perft;
    pub mod promotion;
    pub mod validators;
}

pub mod search {
    pub mod best_move_selector;
    pub mod heuristics;
    pub mod move_evaluator;
}

pub mod engines {
    pub mod bot_ai;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod controller {
    pub mod move_service;
    pub mod turn_flow;
}

pub mod utils {
    pub mod game_record;
    pub mod match_harness;
    pub mod notation;
}
