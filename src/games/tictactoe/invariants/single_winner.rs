//! Single winner invariant: the board's lines agree with who moved last.

use super::super::{Cell, GameState, LINES, Mark};
use super::Invariant;

/// Invariant: at most one mark holds a line, and it made the last move.
///
/// Play stops at the first completed line, so an X win leaves X one mark
/// ahead and an O win leaves the counts equal. One move may complete two
/// lines for the same mark; both marks holding lines is never reachable.
pub struct SingleWinnerInvariant;

impl SingleWinnerInvariant {
    fn holds_line(state: &GameState, mark: Mark) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|pos| state.board().get(*pos) == Cell::Occupied(mark)))
    }
}

impl Invariant<GameState> for SingleWinnerInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Mark::X);
        let o = state.board().count(Mark::O);
        match (Self::holds_line(state, Mark::X), Self::holds_line(state, Mark::O)) {
            (true, true) => false,
            (true, false) => x == o + 1,
            (false, true) => x == o,
            (false, false) => true,
        }
    }

    fn description() -> &'static str {
        "At most one mark holds a line, and only after its own move"
    }
}
