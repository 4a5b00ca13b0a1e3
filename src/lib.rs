//! Lifted tic-tac-toe - game state and win detection as plain values
//!
//! The engine never owns a game. Callers hold a [`GameState`], ask it for
//! its [`Outcome`], and get a fresh state back from every accepted move.
//!
//! # Example
//!
//! ```
//! use lifted_tictactoe::{GameState, Mark, MoveError, Outcome, status_line};
//!
//! let state = GameState::new();
//! let next = state.apply_move(4)?;
//! assert_eq!(next.turn(), Mark::O);
//! assert_eq!(status_line(&next), "Next player: O");
//!
//! // The earlier state is untouched.
//! assert_eq!(state, GameState::new());
//! assert_eq!(next.apply_move(4), Err(MoveError::CellOccupied(lifted_tictactoe::Position::Center)));
//! assert_eq!(next.outcome(), Outcome::InProgress);
//! # Ok::<(), MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod play;

// Crate-level exports - Configuration
pub use config::{ConfigError, DisplayConfig, EngineConfig};

// Crate-level exports - Interactive loop
pub use play::{SessionEnd, run_session};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    AlternatingTurnInvariant, BalancedMarksInvariant, Board, BoardParseError, CELL_COUNT, Cell,
    CellIsEmpty, Contract, GameNotOver, GameState, GameStateInvariants, IndexInRange, Invariant,
    InvariantSet, InvariantViolation, LINES, LegalMove, Mark, MonotonicBoardInvariant, Move,
    MoveContract, MoveError, Outcome, Position, ReplayError, SingleWinnerInvariant, StateReport,
    Transition,
    apply_move, calculate_outcome, check_winner, is_full, status_line, winning_line,
};
