//! Multi-board tic-tac-toe engine.
//!
//! Pure game logic for one or more independent 3x3 boards that share a
//! running score.
//!
//! # Architecture
//!
//! - **Board engine**: [`Board::apply_move`] validates a move against the
//!   [`LegalMove`] contract, places the mark, and detects wins and draws.
//! - **Arena**: [`Arena`] routes moves to boards and counts each board's
//!   terminal transition in the [`Score`] exactly once.
//!
//! Every command consumes the previous value and returns the next one
//! together with a [`Verdict`]. Invalid moves are rejected, never errors.
//!
//! # Example
//!
//! ```
//! use xo_arena_core::{Arena, Mark, Verdict};
//!
//! let mut arena = Arena::new(8);
//! for cell in [0, 1, 3, 4, 6] {
//!     arena = arena.play(0, cell).into_state();
//! }
//! assert_eq!(arena.score().wins(Mark::X), 1);
//!
//! let step = arena.play(0, 8);
//! assert!(matches!(step.verdict(), Verdict::Rejected(_)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod arena;
mod engine;
mod position;
mod score;
mod status;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::{Move, ParseMoveError, Rejection};
pub use arena::Arena;
pub use contracts::{Contract, LegalMove, MoveContract};
pub use engine::{Step, Verdict};
pub use position::Position;
pub use rules::LINES;
pub use score::Score;
pub use status::{Terminal, WinningLine};
pub use types::{Board, Cell, Mark, Square};
