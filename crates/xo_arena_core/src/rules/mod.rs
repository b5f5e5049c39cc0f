//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a board's cells. They never read the
//! stored terminal status, so the engine and the invariant checks can
//! use them to derive what the status should be.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, find_winning_line};
