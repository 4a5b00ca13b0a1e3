mod action;
mod contracts;
mod invariants;
mod outcome;
mod position;
mod rules;
mod state;
mod types;
mod view;

pub use action::{Move, MoveError};
pub use contracts::{CellIsEmpty, Contract, GameNotOver, IndexInRange, LegalMove, MoveContract};
pub use invariants::{
    AlternatingTurnInvariant, BalancedMarksInvariant, GameStateInvariants, Invariant,
    InvariantSet, InvariantViolation, MonotonicBoardInvariant, SingleWinnerInvariant, Transition,
};
pub use outcome::Outcome;
pub use position::Position;
pub use rules::{LINES, calculate_outcome, check_winner, is_full, winning_line};
pub use state::{GameState, ReplayError, apply_move};
pub use types::{Board, BoardParseError, CELL_COUNT, Cell, Mark};
pub use view::{StateReport, status_line};
