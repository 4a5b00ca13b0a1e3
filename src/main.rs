//! lifted_tictactoe - terminal driver
//!
//! Plays, replays and evaluates games through the library's engine.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use lifted_tictactoe::{
    Board, EngineConfig, GameState, SessionEnd, StateReport, calculate_outcome, run_session,
    status_line, winning_line,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => EngineConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play => run_play(&config),
        Command::Outcome { board, json } => run_outcome(&board, json, &config),
        Command::Replay { moves, json } => run_replay(&moves, json, &config),
    }
}

/// Run an interactive game on stdin/stdout
fn run_play(config: &EngineConfig) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let end = run_session(stdin.lock(), stdout.lock(), config.display())
        .context("Terminal I/O failed")?;

    if let SessionEnd::Abandoned(state) = end {
        info!(moves = state.move_count(), "Game abandoned");
    }
    Ok(())
}

/// Evaluate a board given as text
#[instrument(skip(config))]
fn run_outcome(board: &str, json: bool, config: &EngineConfig) -> Result<()> {
    let board: Board = board
        .parse()
        .with_context(|| format!("Invalid board {:?}", board))?;
    let outcome = calculate_outcome(&board);
    let line = winning_line(&board).map(|(_, line)| line);

    if json {
        let report = serde_json::json!({
            "board": board,
            "outcome": outcome,
            "winner": outcome.winner(),
            "draw": outcome.is_draw(),
            "line": line,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", board.render(*config.display().show_indices()));
        println!("{}", outcome);
    }
    Ok(())
}

/// Replay moves and print where they lead
#[instrument(skip(config))]
fn run_replay(moves: &[usize], json: bool, config: &EngineConfig) -> Result<()> {
    let state = GameState::replay(moves).context("Replay failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&StateReport::from(&state))?);
    } else {
        println!("{}", state.board().render(*config.display().show_indices()));
        println!("{}", status_line(&state));
    }
    Ok(())
}
