//! Terminal status of a board.

use super::position::Position;
use super::types::Mark;
use serde::{Deserialize, Serialize};

/// Three positions forming a row, column or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine([Position; 3]);

impl WinningLine {
    pub(crate) const fn new(positions: [Position; 3]) -> Self {
        Self(positions)
    }

    /// The three positions of the line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The three board indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Returns true if `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

impl std::fmt::Display for WinningLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.indices();
        write!(f, "{{{}, {}, {}}}", a, b, c)
    }
}

/// Whether a board is still being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Terminal {
    /// Moves are still accepted.
    #[default]
    InProgress,
    /// A mark completed a line.
    Won {
        /// The mark that completed the line.
        mark: Mark,
        /// The completed line.
        line: WinningLine,
    },
    /// All nine cells are occupied and nobody won.
    Draw,
}

impl Terminal {
    /// Returns true for `Won` and `Draw`.
    pub fn is_finished(&self) -> bool {
        !matches!(self, Terminal::InProgress)
    }

    /// Returns the winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Terminal::Won { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Returns the winning line, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self {
            Terminal::Won { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Returns true if the board ended in a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Terminal::Draw)
    }
}

impl std::fmt::Display for Terminal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Terminal::InProgress => write!(f, "In progress"),
            Terminal::Won { mark, line } => write!(f, "{} wins on {}", mark, line),
            Terminal::Draw => write!(f, "Draw"),
        }
    }
}
