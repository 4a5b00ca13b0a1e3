//! Command-line interface for lifted_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe in the terminal, driven by a pure game engine
#[derive(Parser, Debug)]
#[command(name = "lifted_tictactoe")]
#[command(about = "Play and evaluate tic-tac-toe games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a two-player game on stdin/stdout
    Play,

    /// Evaluate a board, e.g. "XXX|OO.|..."
    Outcome {
        /// Nine cells: X, O, and . - _ or a digit for empty
        board: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Replay cell indices from an empty board
    Replay {
        /// Cell indices (0-8) in move order
        moves: Vec<usize>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replay() {
        let cli = Cli::parse_from(["lifted_tictactoe", "replay", "4", "0", "8", "--json"]);
        match cli.command {
            Command::Replay { moves, json } => {
                assert_eq!(moves, vec![4, 0, 8]);
                assert!(json);
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli = Cli::parse_from(["lifted_tictactoe", "play", "--config", "engine.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("engine.toml")));
        assert!(matches!(cli.command, Command::Play));
    }

    #[test]
    fn test_parse_outcome() {
        let cli = Cli::parse_from(["lifted_tictactoe", "outcome", "XXX......"]);
        assert!(matches!(
            cli.command,
            Command::Outcome { ref board, json: false } if board == "XXX......"
        ));
    }
}
