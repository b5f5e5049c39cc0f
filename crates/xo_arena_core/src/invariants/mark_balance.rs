//! Mark balance invariant: X and O alternate, starting with X.

use super::super::{Board, Mark};
use super::Invariant;

/// Invariant: X has placed as many marks as O, or one more, and the
/// next mark follows from that count.
pub struct MarkBalanceInvariant;

impl Invariant<Board> for MarkBalanceInvariant {
    fn holds(board: &Board) -> bool {
        let count = |mark: Mark| board.cells().iter().filter(|c| c.mark() == Some(mark)).count();
        let (xs, os) = (count(Mark::X), count(Mark::O));

        let expected_next = if xs == os { Mark::X } else { Mark::O };
        (xs == os || xs == os + 1) && board.next_mark() == expected_next
    }

    fn description() -> &'static str {
        "Marks alternate starting with X and next mark matches the count"
    }
}
