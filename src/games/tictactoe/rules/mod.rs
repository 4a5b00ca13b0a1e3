//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board. Nothing here looks at whose turn it is:
//! the outcome is a function of the board alone.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, winning_line};

use super::outcome::Outcome;
use super::types::Board;
use tracing::{instrument, trace};

/// Evaluates a board.
///
/// The first completed line in [`LINES`] order decides the winner. A full
/// board with no completed line is a draw; anything else is in progress.
#[instrument(skip(board))]
pub fn calculate_outcome(board: &Board) -> Outcome {
    let outcome = if let Some(winner) = check_winner(board) {
        Outcome::Winner(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    };
    trace!(?outcome, "Board evaluated");
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(calculate_outcome(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_top_row_wins() {
        let board: Board = "XXX......".parse().unwrap();
        assert_eq!(calculate_outcome(&board), Outcome::Winner(super::super::Mark::X));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board: Board = "XOX OXO OXO".parse().unwrap();
        assert_eq!(calculate_outcome(&board), Outcome::Draw);
    }

    #[test]
    fn test_win_on_full_board_is_not_draw() {
        let board: Board = "XXX OOX OXO".parse().unwrap();
        assert_eq!(calculate_outcome(&board), Outcome::Winner(super::super::Mark::X));
    }
}
