//! Balanced marks invariant: X leads O by zero or one.

use super::super::{GameState, Mark};
use super::Invariant;

/// Invariant: the board could have come from alternating play.
///
/// X moves first, so X has either as many marks as O or exactly one more.
pub struct BalancedMarksInvariant;

impl Invariant<GameState> for BalancedMarksInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Mark::X);
        let o = state.board().count(Mark::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O, or one more"
    }
}
