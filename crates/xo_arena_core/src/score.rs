//! Cross-board score tally.

use super::{Mark, Terminal};
use serde::{Deserialize, Serialize};

/// Wins per mark plus draws, summed over every finished board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Score {
    x: u32,
    o: u32,
    draws: u32,
}

impl Score {
    /// Returns the number of boards won by `mark`.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    /// Returns the number of drawn boards.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Returns the number of finished boards counted.
    pub fn games(&self) -> u32 {
        self.x + self.o + self.draws
    }

    /// Counts a terminal status. `InProgress` counts nothing.
    pub(crate) fn record(&mut self, terminal: &Terminal) {
        match terminal {
            Terminal::Won { mark: Mark::X, .. } => self.x += 1,
            Terminal::Won { mark: Mark::O, .. } => self.o += 1,
            Terminal::Draw => self.draws += 1,
            Terminal::InProgress => {}
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X {} · O {} · Draw {}", self.x, self.o, self.draws)
    }
}
