//! First-class move types.
//!
//! A move names a board and a cell. It carries no mark: the addressed
//! board decides which mark is placed, so turn order cannot be forged.

use super::Position;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A move: place the next mark of `board` at `position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// Zero-based board index.
    pub board: usize,
    /// Target cell.
    pub position: Position,
}

impl Move {
    /// Returns the zero-based board index.
    pub fn board(&self) -> usize {
        self.board
    }

    /// Returns the target cell.
    pub fn position(&self) -> Position {
        self.position
    }
}

/// Displays in move notation: one-based board number, then the cell index.
impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.board + 1, self.position.to_index())
    }
}

/// Error parsing move notation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseMoveError {
    /// The board part is not a number of at least 1.
    #[display("Invalid board number {text:?} (boards are numbered from 1)")]
    InvalidBoard {
        /// The offending text.
        text: String,
    },
    /// The cell part is neither an index 0-8 nor a position label.
    #[display("Invalid cell {text:?} (use 0-8 or a label such as \"center\")")]
    InvalidCell {
        /// The offending text.
        text: String,
    },
}

impl FromStr for Move {
    type Err = ParseMoveError;

    /// Parses `"<board>:<cell>"` or a bare `"<cell>"` (board 1).
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (board, cell) = match s.split_once(':') {
            Some((board, cell)) => {
                let number = board
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .filter(|n| *n >= 1)
                    .ok_or_else(|| ParseMoveError::InvalidBoard {
                        text: board.to_string(),
                    })?;
                (number - 1, cell)
            }
            None => (0, s),
        };

        let position =
            Position::from_label_or_number(cell).ok_or_else(|| ParseMoveError::InvalidCell {
                text: cell.to_string(),
            })?;

        Ok(Move::new(board, position))
    }
}

/// Why a move was not applied.
///
/// Rejection is a normal outcome, not a fault: the arena is left as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The board index is not in the arena.
    #[display("No board {board} (arena has {count})")]
    NoSuchBoard {
        /// Requested board index.
        board: usize,
        /// Number of boards in the arena.
        count: usize,
    },
    /// The cell index is outside 0-8.
    #[display("Cell {index} is out of range (must be 0-8)")]
    OutOfRange {
        /// Requested cell index.
        index: usize,
    },
    /// The cell already holds a mark.
    #[display("Square {position} is already occupied")]
    Occupied {
        /// The occupied cell.
        position: Position,
    },
    /// The board is already won or drawn.
    #[display("Board is already finished")]
    BoardFinished,
}

impl std::error::Error for Rejection {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_notation() {
        let mv: Move = "3:4".parse().unwrap();
        assert_eq!(mv, Move::new(2, Position::Center));
    }

    #[test]
    fn test_parse_label_and_bare_cell() {
        assert_eq!("2:top-right".parse::<Move>().unwrap(), Move::new(1, Position::TopRight));
        assert_eq!("8".parse::<Move>().unwrap(), Move::new(0, Position::BottomRight));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "0:4".parse::<Move>(),
            Err(ParseMoveError::InvalidBoard { .. })
        ));
        assert!(matches!(
            "x:4".parse::<Move>(),
            Err(ParseMoveError::InvalidBoard { .. })
        ));
        assert!(matches!(
            "1:9".parse::<Move>(),
            Err(ParseMoveError::InvalidCell { .. })
        ));
        for ambiguous in ["1:o", "1:left", "1:bottom"] {
            assert!(matches!(
                ambiguous.parse::<Move>(),
                Err(ParseMoveError::InvalidCell { .. })
            ));
        }
    }

    #[test]
    fn test_display_is_parseable() {
        let mv = Move::new(5, Position::BottomLeft);
        assert_eq!(mv.to_string(), "6:6");
        assert_eq!(mv.to_string().parse::<Move>().unwrap(), mv);
    }
}
