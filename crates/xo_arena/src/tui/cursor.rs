//! Cursor movement for keyboard navigation.
//!
//! The cursor is the terminal's stand-in for mouse hover: it belongs to the
//! front-end, keyed by (board, cell), and the engine never sees it.

use crossterm::event::KeyCode;
use xo_arena_core::Position;

/// Selected board and cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    board: usize,
    position: Position,
}

impl Cursor {
    /// Creates a cursor.
    pub fn new(board: usize, position: Position) -> Self {
        Self { board, position }
    }

    /// Selected board index.
    pub fn board(&self) -> usize {
        self.board
    }

    /// Selected cell.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Moves within the current board. Arrow keys stop at the edges.
    pub fn step(self, key: KeyCode) -> Self {
        let (row, col) = (self.position.row(), self.position.col());
        let (row, col) = match key {
            KeyCode::Left => (row, col.saturating_sub(1)),
            KeyCode::Right => (row, (col + 1).min(2)),
            KeyCode::Up => (row.saturating_sub(1), col),
            KeyCode::Down => ((row + 1).min(2), col),
            _ => (row, col),
        };
        self.at(row * 3 + col)
    }

    /// Jumps to a cell on the current board. Out-of-range indices are ignored.
    pub fn at(self, index: usize) -> Self {
        match Position::from_index(index) {
            Some(position) => Self { position, ..self },
            None => self,
        }
    }

    /// Selects the next board, wrapping around. Keeps the cell.
    pub fn next_board(self, count: usize) -> Self {
        if count == 0 {
            return self;
        }
        Self {
            board: (self.board + 1) % count,
            ..self
        }
    }

    /// Selects the previous board, wrapping around. Keeps the cell.
    pub fn prev_board(self, count: usize) -> Self {
        if count == 0 {
            return self;
        }
        Self {
            board: (self.board + count - 1) % count,
            ..self
        }
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new(0, Position::Center)
    }
}
