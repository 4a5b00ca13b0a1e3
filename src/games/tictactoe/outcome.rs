//! Derived game outcome.

use super::types::Mark;
use serde::{Deserialize, Serialize};

/// Result of evaluating a board.
///
/// Never stored on the game state; always recomputed from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line completed and at least one empty cell.
    InProgress,
    /// A mark completed a line.
    Winner(Mark),
    /// Board full with no completed line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Winner(mark) => Some(*mark),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Returns true once the game is decided.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Winner(mark) => write!(f, "Player {} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winner() {
        assert_eq!(Outcome::Winner(Mark::O).winner(), Some(Mark::O));
        assert_eq!(Outcome::Draw.winner(), None);
        assert_eq!(Outcome::InProgress.winner(), None);
    }

    #[test]
    fn test_is_draw() {
        assert!(Outcome::Draw.is_draw());
        assert!(!Outcome::Winner(Mark::X).is_draw());
        assert!(!Outcome::InProgress.is_draw());
    }

    #[test]
    fn test_terminal_is_win_or_draw() {
        for outcome in [Outcome::InProgress, Outcome::Winner(Mark::X), Outcome::Draw] {
            assert_eq!(
                outcome.is_terminal(),
                outcome.winner().is_some() || outcome.is_draw()
            );
        }
    }
}
