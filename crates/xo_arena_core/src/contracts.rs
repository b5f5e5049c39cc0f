//! Contract-based validation for board moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}. Preconditions decide whether a move is accepted;
//! postconditions re-check the board invariants after it was applied.

use super::action::Rejection;
use super::invariants::{
    BoardInvariants, InvariantSet, InvariantViolation, MonotonicCellsInvariant,
    TransitionInvariant,
};
use super::{Board, Position};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the cell index names one of the nine cells.
pub struct CellInRange;

impl CellInRange {
    /// Resolves the index to a position.
    pub fn check(index: usize) -> Result<Position, Rejection> {
        Position::from_index(index).ok_or(Rejection::OutOfRange { index })
    }
}

/// Precondition: the board is neither won nor drawn.
pub struct BoardInProgress;

impl BoardInProgress {
    /// Checks the board's terminal status.
    pub fn check(board: &Board) -> Result<(), Rejection> {
        if board.is_finished() {
            Err(Rejection::BoardFinished)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Checks the cell at `position`.
    pub fn check(board: &Board, position: Position) -> Result<(), Rejection> {
        if board.is_empty(position) {
            Ok(())
        } else {
            Err(Rejection::Occupied { position })
        }
    }
}

/// Composite precondition: in range, board in progress, cell empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions and returns the target position.
    #[instrument(skip(board))]
    pub fn check(board: &Board, index: usize) -> Result<Position, Rejection> {
        let position = CellInRange::check(index)?;
        BoardInProgress::check(board)?;
        CellIsEmpty::check(board, position)?;
        Ok(position)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placing the next mark at a cell index.
///
/// Preconditions: see [`LegalMove`].
///
/// Postconditions:
/// - cells stay monotonic
/// - marks stay balanced
/// - terminal status and winning flags match the cells
pub struct MoveContract;

impl Contract<Board, usize> for MoveContract {
    fn pre(board: &Board, index: &usize) -> Result<(), Rejection> {
        LegalMove::check(board, *index).map(|_| ())
    }

    fn post(before: &Board, after: &Board) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = BoardInvariants::check_all(after).err().unwrap_or_default();
        if !MonotonicCellsInvariant::holds(before, after) {
            violations.push(InvariantViolation::new(
                MonotonicCellsInvariant::description(),
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            warn!(count = violations.len(), "Move postcondition failed");
            Err(violations)
        }
    }
}
