//! Command-line interface for xo_arena.

use crate::config::{ArenaConfig, ConfigError};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::instrument;
use xo_arena_core::Move;

/// XO Arena - tic-tac-toe on several boards at once with a running score
#[derive(Parser, Debug)]
#[command(name = "xo_arena")]
#[command(about = "Multi-board tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Arena options
        #[command(flatten)]
        arena: ArenaArgs,
    },

    /// Apply moves to a fresh arena and print the result
    Replay {
        /// Arena options
        #[command(flatten)]
        arena: ArenaArgs,

        /// Print the final arena as JSON
        #[arg(long)]
        json: bool,

        /// Moves as <board>:<cell>, boards from 1, cells 0-8 or labels (e.g. 2:center)
        #[arg(required = true)]
        moves: Vec<Move>,
    },

    /// Print the default configuration as TOML
    Config,
}

/// Options shared by commands that build an arena.
#[derive(Args, Debug, Clone, Default)]
pub struct ArenaArgs {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of boards (overrides the config file)
    #[arg(short, long)]
    pub boards: Option<usize>,
}

impl ArenaArgs {
    /// Loads the config file, if any, and applies command-line overrides.
    #[instrument(skip(self), fields(config = ?self.config, boards = ?self.boards))]
    pub fn load_config(&self) -> Result<ArenaConfig, ConfigError> {
        let config = match &self.config {
            Some(path) => ArenaConfig::from_file(path)?,
            None => ArenaConfig::default(),
        };
        let config = match self.boards {
            Some(count) => config.with_board_count(count),
            None => config,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replay() {
        let cli = Cli::try_parse_from([
            "xo_arena", "replay", "--boards", "2", "--json", "1:0", "2:center",
        ])
        .unwrap();
        match cli.command {
            Command::Replay { arena, json, moves } => {
                assert_eq!(arena.boards, Some(2));
                assert!(json);
                assert_eq!(moves.len(), 2);
                assert_eq!(moves[1].board, 1);
            }
            other => panic!("Unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_bad_move_rejected_by_parser() {
        assert!(Cli::try_parse_from(["xo_arena", "replay", "0:4"]).is_err());
    }

    #[test]
    fn test_boards_override() {
        let args = ArenaArgs {
            config: None,
            boards: Some(3),
        };
        assert_eq!(*args.load_config().unwrap().board_count(), 3);

        let args = ArenaArgs {
            config: None,
            boards: Some(0),
        };
        assert!(args.load_config().is_err());
    }
}
