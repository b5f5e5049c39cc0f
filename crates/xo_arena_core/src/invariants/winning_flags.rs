//! Winning flag invariant: only the winning line is highlighted.

use super::super::{Board, Position};
use super::Invariant;

/// Invariant: exactly the three cells of the winning line carry the
/// winning flag, and no cell is flagged on a board that was not won.
pub struct WinningFlagsInvariant;

impl Invariant<Board> for WinningFlagsInvariant {
    fn holds(board: &Board) -> bool {
        let line = board.terminal().winning_line();
        Position::ALL.iter().all(|pos| {
            let flagged = board.cells()[pos.to_index()].is_winning();
            let expected = line.is_some_and(|l| l.contains(*pos));
            flagged == expected
        })
    }

    fn description() -> &'static str {
        "Only cells on the winning line are flagged"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_match_line() {
        let board = [0, 1, 3, 4, 6]
            .into_iter()
            .fold(Board::new(), |b, i| b.apply_move(i).into_state());
        assert!(WinningFlagsInvariant::holds(&board));
        let flagged: Vec<usize> = (0..9).filter(|i| board.cells()[*i].is_winning()).collect();
        assert_eq!(flagged, vec![0, 3, 6]);
    }

    #[test]
    fn test_stray_flag_violates() {
        let mut board = Board::new().apply_move(4).into_state();
        board.cells[4].flag_winning();
        assert!(!WinningFlagsInvariant::holds(&board));
    }
}
