//! Contract-based validation for tic-tac-toe moves.
//!
//! A contract pairs the preconditions a move must meet with the
//! postconditions the resulting state must satisfy: {P} move {Q}.

use super::action::MoveError;
use super::invariants::{
    GameStateInvariants, Invariant, InvariantSet, InvariantViolation, MonotonicBoardInvariant,
    Transition,
};
use super::{GameState, Position};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// What a passing precondition check yields.
    type Checked;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Checked, MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the index names a cell.
pub struct IndexInRange;

impl IndexInRange {
    /// Resolves the index to a position.
    pub fn check(index: usize) -> Result<Position, MoveError> {
        Position::from_index(index).ok_or(MoveError::InvalidIndex(index))
    }
}

/// Precondition: the game is not yet decided.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with the decided outcome.
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        let outcome = state.outcome();
        if outcome.is_terminal() {
            Err(MoveError::GameOver(outcome))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with the occupied position.
    pub fn check(position: Position, state: &GameState) -> Result<(), MoveError> {
        if state.board().is_empty(position) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(position))
        }
    }
}

/// Composite precondition, checked in order: index in range, game not
/// over, cell empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move at `index`.
    #[instrument(skip(state))]
    pub fn check(index: usize, state: &GameState) -> Result<Position, MoveError> {
        let position = IndexInRange::check(index)?;
        GameNotOver::check(state)?;
        CellIsEmpty::check(position, state)?;
        Ok(position)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placing a mark by cell index.
///
/// Postconditions:
/// - the board changed monotonically by exactly one cell
/// - every [`GameStateInvariants`] member holds on the new state
pub struct MoveContract;

impl Contract<GameState, usize> for MoveContract {
    type Checked = Position;

    fn pre(state: &GameState, index: &usize) -> Result<Position, MoveError> {
        LegalMove::check(*index, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !MonotonicBoardInvariant::holds(&Transition::between(before, after)) {
            violations.push(InvariantViolation::new(
                MonotonicBoardInvariant::description(),
            ));
        }
        if let Err(mut found) = GameStateInvariants::check_all(after) {
            violations.append(&mut found);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}
