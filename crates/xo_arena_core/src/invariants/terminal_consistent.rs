//! Terminal consistency invariant: the stored status agrees with the cells.

use super::super::rules::{find_winning_line, is_full};
use super::super::{Board, Terminal};
use super::Invariant;

/// Invariant: the authoritative terminal field matches what the cells show.
///
/// - `Won` names the first completed line and the mark holding it.
/// - `Draw` means the board is full with no completed line.
/// - `InProgress` means the board is neither won nor full.
pub struct TerminalConsistentInvariant;

impl Invariant<Board> for TerminalConsistentInvariant {
    fn holds(board: &Board) -> bool {
        let derived = find_winning_line(board);
        match board.terminal() {
            Terminal::Won { mark, line } => derived == Some((*mark, *line)),
            Terminal::Draw => derived.is_none() && is_full(board),
            Terminal::InProgress => derived.is_none() && !is_full(board),
        }
    }

    fn description() -> &'static str {
        "Terminal status matches the board contents"
    }
}
