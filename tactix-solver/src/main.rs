//! Tac Tix Solver
//!
//! Builds and solves the game for one grid size and reports the result.
//!
//! ```text
//! solver [--size N] [--rounds]
//! ```

use std::env;
use std::process::ExitCode;

use log::{error, info};

use tactix_core::Board;
use tactix_solver::Engine;

const DEFAULT_SIZE: u8 = 4;

fn parse_size(args: &[String]) -> Result<u8, String> {
    match args.iter().position(|arg| arg == "--size") {
        None => Ok(DEFAULT_SIZE),
        Some(i) => {
            let value = args.get(i + 1).ok_or("--size requires a value")?;
            value
                .parse()
                .map_err(|_| format!("invalid size: {}", value))
        }
    }
}

fn main() -> ExitCode {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let show_rounds = args.iter().any(|arg| arg == "--rounds");
    let size = match parse_size(&args) {
        Ok(size) => size,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("Tac Tix Solver");
    info!("==============");

    let engine = match Engine::new(size) {
        Ok(engine) => engine,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if show_rounds {
        engine.stats().log_rounds();
    }

    let start = Board::full(size);
    let favourable: Vec<String> = start
        .legal_moves()
        .iter()
        .filter(|(_, result)| engine.is_losing(result))
        .map(|(mov, _)| mov.notation())
        .collect();

    if engine.is_losing(&start) {
        info!("The second player wins with optimal play.");
    } else {
        info!("The first player wins with optimal play.");
        info!("Winning openings: {}", favourable.join(", "));
    }

    ExitCode::SUCCESS
}
