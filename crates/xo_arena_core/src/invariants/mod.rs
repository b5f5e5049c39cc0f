//! First-class invariants for boards.
//!
//! Invariants are logical properties that must hold for every board the
//! engine hands out. They are checked after each accepted move in debug
//! builds and can be tested independently.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// A property relating a state to the state that replaced it.
pub trait TransitionInvariant<S> {
    /// Checks if the invariant holds across the transition.
    fn holds(before: &S, after: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod mark_balance;
pub mod monotonic_cells;
pub mod terminal_consistent;
pub mod winning_flags;

pub use mark_balance::MarkBalanceInvariant;
pub use monotonic_cells::MonotonicCellsInvariant;
pub use terminal_consistent::TerminalConsistentInvariant;
pub use winning_flags::WinningFlagsInvariant;

/// All single-state board invariants as a composable set.
pub type BoardInvariants = (
    MarkBalanceInvariant,
    TerminalConsistentInvariant,
    WinningFlagsInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Mark, Terminal};

    fn play(indices: &[usize]) -> Board {
        indices
            .iter()
            .fold(Board::new(), |board, i| board.apply_move(*i).into_state())
    }

    #[test]
    fn test_invariant_set_holds_for_empty_board() {
        assert!(BoardInvariants::check_all(&Board::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        assert!(BoardInvariants::check_all(&play(&[0, 4, 2])).is_ok());
        assert!(BoardInvariants::check_all(&play(&[0, 1, 3, 4, 6])).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut board = play(&[4]);
        // One violation per invariant.
        board.cells[0].occupy(Mark::X);
        board.terminal = Terminal::Draw;
        board.cells[8].flag_winning();

        let violations = BoardInvariants::check_all(&board).unwrap_err();
        assert_eq!(violations.len(), 3);
    }
}
