//! XO Arena - multi-board tic-tac-toe host
//!
//! Terminal front-end and command-line tools around [`xo_arena_core`].
//!
//! # Architecture
//!
//! - **Config**: TOML [`ArenaConfig`] choosing the board count and which
//!   projections (score, titles) to render
//! - **CLI**: `play`, `replay` and `config` subcommands
//! - **TUI**: ratatui front-end; owns the cursor/hover state
//! - **Script**: applies a list of moves to a fresh arena

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod script;
mod tui;
mod view;

pub use cli::{ArenaArgs, Cli, Command};
pub use config::{ArenaConfig, ConfigError, MAX_BOARDS};
pub use script::{ReplayReport, replay};
pub use tui::{App, Cursor, run as run_tui};
pub use view::{arena_text, board_title, status_line};
