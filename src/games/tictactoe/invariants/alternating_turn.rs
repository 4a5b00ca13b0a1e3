//! Alternating turn invariant: X moves on even move counts, O on odd.

use super::super::{GameState, Mark};
use super::Invariant;

/// Invariant: the mark to move is determined by how many moves were played.
///
/// X starts, so after N moves it is X's turn exactly when N is even.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let expected = if state.move_count() % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        };
        state.turn() == expected
    }

    fn description() -> &'static str {
        "Marks alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Board;

    #[test]
    fn test_new_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_sequence_holds() {
        let mut state = GameState::new();
        for index in [0, 4, 2, 6, 8] {
            state = state.apply_move(index).unwrap();
            assert!(AlternatingTurnInvariant::holds(&state));
        }
        assert_eq!(state.turn(), Mark::O);
    }

    #[test]
    fn test_wrong_turn_violates() {
        let board: Board = "X.. ... ...".parse().unwrap();
        let state = GameState::with_parts(board, Mark::X);
        assert!(!AlternatingTurnInvariant::holds(&state));
    }
}
