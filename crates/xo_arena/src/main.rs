//! XO Arena - unified CLI

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use xo_arena::{ArenaArgs, ArenaConfig, Cli, Command, arena_text, replay, run_tui};
use xo_arena_core::Move;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { arena } => run_play(arena),
        Command::Replay { arena, json, moves } => run_replay(arena, json, moves),
        Command::Config => run_config(),
    }
}

fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run the interactive terminal UI
fn run_play(args: ArenaArgs) -> Result<()> {
    let config = args.load_config().context("Failed to load configuration")?;
    run_tui(config)
}

/// Apply moves from the command line and print the final arena
fn run_replay(args: ArenaArgs, json: bool, moves: Vec<Move>) -> Result<()> {
    init_stderr_logging();
    let config = args.load_config().context("Failed to load configuration")?;

    let report = replay(*config.board_count(), &moves);
    if report.rejected() > 0 {
        info!(rejected = report.rejected(), "Some moves were not applied");
    }

    if json {
        let out = serde_json::to_string_pretty(report.arena())
            .context("Failed to serialize arena")?;
        println!("{}", out);
    } else {
        print!("{}", arena_text(report.arena(), &config));
    }
    Ok(())
}

/// Print the default configuration
fn run_config() -> Result<()> {
    println!("{}", ArenaConfig::default().to_toml()?);
    Ok(())
}
