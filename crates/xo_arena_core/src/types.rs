//! Core domain types for a single tic-tac-toe board.

use super::position::Position;
use super::status::Terminal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Mark placed by a move.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// Contents of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// One cell of a board: its square plus the winning-line flag.
///
/// Hover or cursor state is a presentation concern and never lives here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    square: Square,
    winning: bool,
}

impl Cell {
    /// An empty, unflagged cell.
    pub const EMPTY: Cell = Cell {
        square: Square::Empty,
        winning: false,
    };

    /// Returns the square.
    pub fn square(&self) -> Square {
        self.square
    }

    /// Returns the mark in this cell, if any.
    pub fn mark(&self) -> Option<Mark> {
        self.square.mark()
    }

    /// Returns true if the cell holds no mark.
    pub fn is_empty(&self) -> bool {
        self.square == Square::Empty
    }

    /// Returns true if the cell is part of the line that won the board.
    pub fn is_winning(&self) -> bool {
        self.winning
    }

    pub(crate) fn occupy(&mut self, mark: Mark) {
        self.square = Square::Occupied(mark);
    }

    pub(crate) fn flag_winning(&mut self) {
        self.winning = true;
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// A 3x3 board with its own turn and terminal state.
///
/// Each board owns its nine cells outright, so cloning or resetting
/// a board never shares cell storage with another board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    pub(crate) cells: [Cell; 9],
    /// Mark placed by the next accepted move.
    pub(crate) next_mark: Mark,
    /// Authoritative terminal status, set by the accepting move.
    pub(crate) terminal: Terminal,
}

impl Board {
    /// Creates a new empty board with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            cells: [Cell::EMPTY; 9],
            next_mark: Mark::X,
            terminal: Terminal::InProgress,
        }
    }

    /// Gets the cell at the given index (0-8).
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Gets the square at the given position.
    pub fn square(&self, pos: Position) -> Square {
        self.cells[pos.to_index()].square
    }

    /// Checks if the square at `pos` is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.square(pos) == Square::Empty
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns the mark that the next accepted move will place.
    pub fn next_mark(&self) -> Mark {
        self.next_mark
    }

    /// Returns the terminal status.
    pub fn terminal(&self) -> &Terminal {
        &self.terminal
    }

    /// Returns true once the board is won or drawn.
    pub fn is_finished(&self) -> bool {
        self.terminal.is_finished()
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Positions that are still empty, in index order.
    ///
    /// Empty on a finished board: no move would be accepted there.
    #[instrument(skip(self))]
    pub fn open_positions(&self) -> Vec<Position> {
        if self.is_finished() {
            return Vec::new();
        }
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.cells[pos].square {
                    Square::Empty => write!(f, "{}", pos)?,
                    Square::Occupied(mark) => write!(f, "{}", mark)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
