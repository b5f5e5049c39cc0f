//! Terminal UI for XO Arena.

mod app;
mod cursor;
mod ui;

pub use app::App;
pub use cursor::Cursor;

use crate::config::ArenaConfig;
use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing::{info, instrument};

/// Runs the interactive front-end until the user quits.
pub fn run(config: ArenaConfig) -> Result<()> {
    // Log to a file so output does not corrupt the screen.
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(boards = *config.board_count(), "Starting XO Arena TUI");

    let mut terminal = ratatui::init();
    let result = run_app(&mut terminal, App::new(config));
    ratatui::restore();
    result
}

#[instrument(skip_all)]
fn run_app(terminal: &mut DefaultTerminal, mut app: App) -> Result<()> {
    while app.is_running() {
        terminal.draw(|frame| ui::draw(frame, &app))?;
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }
    }
    info!(score = %app.arena().score(), "TUI exited");
    Ok(())
}
