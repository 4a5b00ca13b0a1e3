//! Monotonic board invariant: cells never change once set.

use super::super::{Board, Cell, GameState, Mark, Position};
use super::Invariant;

/// A single move's before and after boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Board before the move.
    pub before: Board,
    /// Board after the move.
    pub after: Board,
    /// Mark that moved.
    pub mover: Mark,
}

impl Transition {
    /// Captures the step from `before` to `after`.
    pub fn between(before: &GameState, after: &GameState) -> Self {
        Self {
            before: *before.board(),
            after: *after.board(),
            mover: before.turn(),
        }
    }
}

/// Invariant: a move fills exactly one empty cell with the mover's mark.
///
/// Occupied cells are never overwritten and never cleared.
pub struct MonotonicBoardInvariant;

impl Invariant<Transition> for MonotonicBoardInvariant {
    fn holds(step: &Transition) -> bool {
        let mut filled = 0;
        for pos in Position::ALL {
            match (step.before.get(pos), step.after.get(pos)) {
                (a, b) if a == b => {}
                (Cell::Empty, Cell::Occupied(mark)) if mark == step.mover => filled += 1,
                _ => return false,
            }
        }
        filled == 1
    }

    fn description() -> &'static str {
        "A move fills exactly one empty cell and overwrites nothing"
    }
}
