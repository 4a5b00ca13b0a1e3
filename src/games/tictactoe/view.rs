//! Derived presentation for whatever renders the game.
//!
//! Everything here is recomputed from a [`GameState`] on demand.

use super::outcome::Outcome;
use super::{Board, GameState, Mark, Position};
use serde::Serialize;

/// Status text for the current state.
///
/// "Next player: X" while in progress, "Winner: O" once won, "Draw" once drawn.
pub fn status_line(state: &GameState) -> String {
    let outcome = state.outcome();
    if let Some(mark) = outcome.winner() {
        format!("Winner: {}", mark)
    } else if outcome.is_draw() {
        "Draw".to_string()
    } else {
        format!("Next player: {}", state.turn())
    }
}

impl Board {
    /// Formats the board as a 3x3 grid.
    ///
    /// Empty cells show their index when `show_indices` is set, `.` otherwise.
    pub fn render(&self, show_indices: bool) -> String {
        let mut result = String::new();
        for (pos, cell) in Position::ALL.iter().zip(self.cells()) {
            let symbol = match cell.mark() {
                Some(Mark::X) => 'X',
                Some(Mark::O) => 'O',
                None if show_indices => char::from(b'0' + pos.to_index() as u8),
                None => '.',
            };
            result.push(symbol);
            match (pos.row(), pos.column()) {
                (2, 2) => {}
                (_, 2) => result.push_str("\n-+-+-\n"),
                _ => result.push('|'),
            }
        }
        result
    }
}

/// Snapshot of a state for machine-readable output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateReport {
    /// Board cells.
    pub board: Board,
    /// Mark to move next.
    pub turn: Mark,
    /// Derived outcome.
    pub outcome: Outcome,
    /// Winning mark, if any.
    pub winner: Option<Mark>,
    /// Human-readable status line.
    pub status: String,
}

impl From<&GameState> for StateReport {
    fn from(state: &GameState) -> Self {
        Self {
            board: *state.board(),
            turn: state.turn(),
            outcome: state.outcome(),
            winner: state.outcome().winner(),
            status: status_line(state),
        }
    }
}
