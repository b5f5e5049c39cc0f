//! Monotonic cells invariant: marks are never overwritten or removed.

use super::super::Board;
use super::TransitionInvariant;

/// Invariant: a move changes exactly one cell, from empty to occupied.
///
/// Every cell that held a mark before the move holds the same mark after.
/// Resets are not moves and are not checked against this.
pub struct MonotonicCellsInvariant;

impl TransitionInvariant<Board> for MonotonicCellsInvariant {
    fn holds(before: &Board, after: &Board) -> bool {
        let mut changed = 0;
        for (old, new) in before.cells().iter().zip(after.cells()) {
            if old.square() == new.square() {
                continue;
            }
            if !old.is_empty() || new.is_empty() {
                return false;
            }
            changed += 1;
        }
        changed == 1
    }

    fn description() -> &'static str {
        "Cells are monotonic (a move fills exactly one empty cell)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    #[test]
    fn test_single_move_holds() {
        let before = Board::new();
        let after = before.clone().apply_move(4).into_state();
        assert!(MonotonicCellsInvariant::holds(&before, &after));
    }

    #[test]
    fn test_overwrite_violates() {
        let before = Board::new().apply_move(4).into_state();
        let mut after = before.clone();
        after.cells[4] = Default::default();
        after.cells[4].occupy(Mark::O);
        assert!(!MonotonicCellsInvariant::holds(&before, &after));
    }

    #[test]
    fn test_two_new_marks_violate() {
        let before = Board::new();
        let mut after = before.clone();
        after.cells[0].occupy(Mark::X);
        after.cells[1].occupy(Mark::O);
        assert!(!MonotonicCellsInvariant::holds(&before, &after));
    }

    #[test]
    fn test_unchanged_board_violates() {
        let board = Board::new().apply_move(4).into_state();
        assert!(!MonotonicCellsInvariant::holds(&board, &board));
    }
}
