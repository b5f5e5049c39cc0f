//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position, WinningLine};
use tracing::instrument;

/// The eight winning lines in check order: rows, columns, main diagonal,
/// anti-diagonal.
pub const LINES: [WinningLine; 8] = [
    // Rows
    WinningLine::new([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    WinningLine::new([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    WinningLine::new([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    WinningLine::new([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    WinningLine::new([Position::TopCenter, Position::Center, Position::BottomCenter]),
    WinningLine::new([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    WinningLine::new([Position::TopLeft, Position::Center, Position::BottomRight]),
    WinningLine::new([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Finds the first line (in [`LINES`] order) held entirely by one mark.
#[instrument(skip(board))]
pub fn find_winning_line(board: &Board) -> Option<(Mark, WinningLine)> {
    LINES.iter().find_map(|line| {
        let [a, b, c] = line.positions();
        let mark = board.square(a).mark()?;
        (board.square(b).mark() == Some(mark) && board.square(c).mark() == Some(mark))
            .then_some((mark, *line))
    })
}
