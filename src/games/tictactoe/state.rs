//! Game state and the move transition.
//!
//! `GameState` is a plain value. Applying a move never mutates the state it
//! was called on; it returns the successor, so earlier states stay
//! inspectable by whoever keeps them.

use super::action::MoveError;
use super::contracts::{Contract, MoveContract};
use super::invariants::{GameStateInvariants, InvariantSet, InvariantViolation};
use super::outcome::Outcome;
use super::rules::calculate_outcome;
use super::{Board, Cell, Mark, Position};
use derive_more::{Display, Error};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Board plus the mark that moves next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GameState {
    board: Board,
    turn: Mark,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
        }
    }

    /// Rebuilds a state from a board, deriving whose turn it is.
    ///
    /// Fails when the board could not have come from alternating play: the
    /// mark counts are off, or a completed line disagrees with who moved last.
    #[instrument]
    pub fn from_board(board: Board) -> Result<Self, Vec<InvariantViolation>> {
        let turn = if board.occupied() % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        };
        let state = Self { board, turn };
        GameStateInvariants::check_all(&state)?;
        Ok(state)
    }

    /// Builds a state without any checks.
    #[cfg(test)]
    pub(crate) fn with_parts(board: Board, turn: Mark) -> Self {
        Self { board, turn }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that moves next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Evaluates the board.
    pub fn outcome(&self) -> Outcome {
        calculate_outcome(&self.board)
    }

    /// Number of moves applied so far.
    pub fn move_count(&self) -> usize {
        self.board.occupied()
    }

    /// Returns the positions a move may still be played at.
    ///
    /// Empty once the game is decided.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.outcome().is_terminal() {
            return Vec::new();
        }
        Position::empty_on(&self.board)
    }

    /// Places the current mark at cell `index` and passes the turn.
    ///
    /// # Errors
    ///
    /// - [`MoveError::InvalidIndex`] if `index` is outside 0-8
    /// - [`MoveError::GameOver`] if the board already has a winner or is drawn
    /// - [`MoveError::CellOccupied`] if the cell is taken
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn apply_move(&self, index: usize) -> Result<GameState, MoveError> {
        let position = MoveContract::pre(self, &index).inspect_err(|e| {
            warn!(error = %e, "Move rejected");
        })?;

        let mut next = *self;
        next.board.set(position, Cell::Occupied(self.turn));
        next.turn = self.turn.opponent();
        debug!(%position, mark = %self.turn, "Move applied");

        #[cfg(debug_assertions)]
        {
            let checked = MoveContract::post(self, &next);
            debug_assert!(checked.is_ok(), "Move postcondition failed: {:?}", checked);
        }

        let outcome = next.outcome();
        if outcome.is_terminal() {
            info!(%outcome, moves = next.move_count(), "Game decided");
        }

        Ok(next)
    }

    /// Places the current mark at a named position.
    pub fn apply_position(&self, position: Position) -> Result<GameState, MoveError> {
        self.apply_move(position.to_index())
    }

    /// Plays `indices` in order from a new game.
    ///
    /// Stops at the first rejected move.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Result<GameState, ReplayError> {
        indices
            .iter()
            .enumerate()
            .try_fold(GameState::new(), |state, (i, &index)| {
                state.apply_move(index).map_err(|source| ReplayError {
                    move_number: i + 1,
                    index,
                    source,
                })
            })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// A replayed move was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Move {} (cell {}) rejected: {}", move_number, index, source)]
pub struct ReplayError {
    /// 1-based number of the rejected move.
    pub move_number: usize,
    /// Cell index the move targeted.
    pub index: usize,
    /// Why it was rejected.
    pub source: MoveError,
}

/// Places the current mark at cell `index`, returning the successor state.
///
/// Free-function form of [`GameState::apply_move`].
pub fn apply_move(state: &GameState, index: usize) -> Result<GameState, MoveError> {
    state.apply_move(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let state = GameState::new();
        assert_eq!(state.turn(), Mark::X);
        assert_eq!(state.outcome(), Outcome::InProgress);
        assert_eq!(state.move_count(), 0);
        assert_eq!(state.valid_moves().len(), 9);
    }

    #[test]
    fn test_apply_move_places_mark_and_flips_turn() {
        let state = GameState::new();
        let next = state.apply_move(4).unwrap();
        assert_eq!(next.board().get(Position::Center), Cell::Occupied(Mark::X));
        assert_eq!(next.turn(), Mark::O);

        let next = next.apply_move(0).unwrap();
        assert_eq!(next.board().get(Position::TopLeft), Cell::Occupied(Mark::O));
        assert_eq!(next.turn(), Mark::X);
    }

    #[test]
    fn test_apply_move_leaves_input_untouched() {
        let state = GameState::new();
        let _ = state.apply_move(4).unwrap();
        assert_eq!(state, GameState::new());
    }

    #[test]
    fn test_invalid_index() {
        let state = GameState::new();
        assert_eq!(state.apply_move(9), Err(MoveError::InvalidIndex(9)));
    }

    #[test]
    fn test_occupied_cell() {
        let state = GameState::new().apply_move(4).unwrap();
        assert_eq!(
            state.apply_move(4),
            Err(MoveError::CellOccupied(Position::Center))
        );
    }

    #[test]
    fn test_game_over_checked_before_occupied() {
        // X wins the top row.
        let state = GameState::replay(&[0, 3, 1, 4, 2]).unwrap();
        assert_eq!(state.outcome(), Outcome::Winner(Mark::X));
        assert_eq!(
            state.apply_move(0),
            Err(MoveError::GameOver(Outcome::Winner(Mark::X)))
        );
        assert_eq!(
            state.apply_move(8),
            Err(MoveError::GameOver(Outcome::Winner(Mark::X)))
        );
        assert!(state.valid_moves().is_empty());
    }

    #[test]
    fn test_replay_reports_move_number() {
        let err = GameState::replay(&[4, 0, 4]).unwrap_err();
        assert_eq!(err.move_number, 3);
        assert_eq!(err.index, 4);
        assert_eq!(err.source, MoveError::CellOccupied(Position::Center));
    }

    #[test]
    fn test_from_board_derives_turn() {
        let board: Board = "X.. .O. ..X".parse().unwrap();
        let state = GameState::from_board(board).unwrap();
        assert_eq!(state.turn(), Mark::O);
    }

    #[test]
    fn test_from_board_rejects_play_after_win() {
        let both_won: Board = "XXX OOO ...".parse().unwrap();
        let violations = GameState::from_board(both_won).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].description,
            "At most one mark holds a line, and only after its own move"
        );

        let o_after_x_won: Board = "XXX OO. O..".parse().unwrap();
        assert!(GameState::from_board(o_after_x_won).is_err());
    }

    #[test]
    fn test_from_board_accepts_reachable_win() {
        let board: Board = "XXX OO. OX.".parse().unwrap();
        let state = GameState::from_board(board).unwrap();
        assert_eq!(state, GameState::replay(&[7, 3, 0, 4, 1, 6, 2]).unwrap());
        assert_eq!(state.outcome(), Outcome::Winner(Mark::X));
    }

    #[test]
    fn test_from_board_rejects_unbalanced() {
        let board: Board = "OO. ... ...".parse().unwrap();
        assert!(GameState::from_board(board).is_err());
    }

    #[test]
    fn test_free_function_matches_method() {
        let state = GameState::new();
        assert_eq!(apply_move(&state, 2), state.apply_move(2));
    }
}
