//! Engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release -- [games] [seed] [--verbose]`
//! `RUST_LOG=plum_checkers=debug cargo run --release -- 4`

use plum_checkers::engines::bot_ai::BotAi;
use plum_checkers::engines::engine_random::RandomEngine;
use plum_checkers::engines::engine_trait::Engine;
use plum_checkers::errors::CheckersError;
use plum_checkers::game_state::checkers_types::Side;
use plum_checkers::utils::match_harness::{play_match, MatchConfig, SeriesSummary};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), CheckersError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut verbose = false;
    let mut positional = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--verbose" || arg == "-v" {
            verbose = true;
        } else {
            positional.push(arg);
        }
    }
    let games = parse_arg(positional.first(), 10u32)?;
    let base_seed = parse_arg(positional.get(1), 1234u64)?;

    let config = MatchConfig::default();
    let mut summary = SeriesSummary::default();
    for game in 0..games {
        let mut greedy = BotAi::new();
        let mut random = RandomEngine::seeded(base_seed.wrapping_add(game as u64));

        // Alternate colours so neither engine always moves first.
        let greedy_side = if game % 2 == 0 { Side::Red } else { Side::Black };
        let result = match greedy_side {
            Side::Red => play_match(&mut greedy, &mut random, &config)?,
            Side::Black => play_match(&mut random, &mut greedy, &config)?,
        };
        summary.add(result.outcome, greedy_side);
        info!(
            game = game + 1,
            greedy = greedy_side.name(),
            outcome = ?result.outcome,
            plies = result.record.len(),
            "game complete"
        );
        if verbose {
            println!("{}", result.record.to_pdn(result.outcome.status())?);
        }
    }

    println!(
        "{} vs {}: {} wins, {} losses, {} draws",
        BotAi::new().name(),
        RandomEngine::seeded(base_seed).name(),
        summary.wins,
        summary.losses,
        summary.draws
    );
    Ok(())
}

fn parse_arg<T: std::str::FromStr>(arg: Option<&String>, default: T) -> Result<T, CheckersError> {
    match arg {
        None => Ok(default),
        Some(text) => text
            .parse()
            .map_err(|_| CheckersError::InvalidArgument(format!("cannot parse '{text}'"))),
    }
}
