//! Moves and move rejection.

use super::outcome::Outcome;
use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// An accepted move: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The mark placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Why a move was rejected.
///
/// `InvalidIndex` is a caller bug. `CellOccupied` and `GameOver` are
/// ordinary user-facing conditions; the state is left unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Cell index outside 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    InvalidIndex(usize),

    /// The cell at the position is already occupied.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),

    /// The game is already decided.
    #[display("Game is already over ({})", _0)]
    GameOver(Outcome),
}

impl MoveError {
    /// Returns true for errors that indicate a bug in the caller rather than
    /// a user action to ignore.
    pub fn is_caller_bug(&self) -> bool {
        matches!(self, MoveError::InvalidIndex(_))
    }
}

impl std::error::Error for MoveError {}
