//! Application state and key handling.

use super::cursor::Cursor;
use crate::config::ArenaConfig;
use crate::view::board_title;
use crossterm::event::KeyCode;
use tracing::{debug, info, instrument};
use xo_arena_core::{Arena, Mark, Position, Terminal, Verdict};

/// Main application state.
pub struct App {
    arena: Arena,
    config: ArenaConfig,
    cursor: Cursor,
    status_message: String,
    running: bool,
}

impl App {
    /// Creates an application with a fresh arena sized by `config`.
    #[instrument(skip(config), fields(boards = *config.board_count()))]
    pub fn new(config: ArenaConfig) -> Self {
        Self {
            arena: Arena::new(*config.board_count()),
            config,
            cursor: Cursor::default(),
            status_message: "X plays first. Arrows move, Enter places.".to_string(),
            running: true,
        }
    }

    /// Current arena.
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Active configuration.
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Current cursor.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Status message for the footer.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// False once the user asked to quit.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Hover preview: the mark that would land under the cursor.
    ///
    /// `None` when the cell is taken or the board is finished.
    pub fn preview(&self) -> Option<(usize, Position, Mark)> {
        let board = self.arena.board(self.cursor.board())?;
        let position = self.cursor.position();
        (!board.is_finished() && board.is_empty(position))
            .then(|| (self.cursor.board(), position, board.next_mark()))
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        debug!(?key, "Handling key");
        let count = self.arena.len();
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.running = false;
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                self.cursor = self.cursor.step(key);
            }
            KeyCode::Tab => self.cursor = self.cursor.next_board(count),
            KeyCode::BackTab => self.cursor = self.cursor.prev_board(count),
            KeyCode::Enter | KeyCode::Char(' ') => self.place(),
            KeyCode::Char(c @ '0'..='8') => {
                if let Some(digit) = c.to_digit(10) {
                    self.cursor = self.cursor.at(digit as usize);
                    self.place();
                }
            }
            KeyCode::Char('n') => self.new_round(),
            KeyCode::Char('s') => self.reset_score(),
            _ => {}
        }
    }

    /// Places the next mark under the cursor.
    fn place(&mut self) {
        let board = self.cursor.board();
        let cell = self.cursor.position().to_index();
        let (arena, verdict) = std::mem::take(&mut self.arena).play(board, cell).into_parts();
        self.arena = arena;

        let title = board_title(board);
        self.status_message = match verdict {
            Verdict::Finished(Terminal::Won { mark, .. }) => format!("{}: {} wins!", title, mark),
            Verdict::Finished(_) => format!("{}: Draw!", title),
            Verdict::Continued => match self.arena.board(board) {
                Some(b) => format!("{}: Next: {}", title, b.next_mark()),
                None => String::new(),
            },
            Verdict::Rejected(reason) => format!("{}: {}", title, reason),
        };
    }

    /// Clears every board for a new round; the score stays.
    fn new_round(&mut self) {
        self.arena = std::mem::take(&mut self.arena).reset_boards();
        self.status_message = "New round. X plays first.".to_string();
    }

    /// Zeroes the score; the boards stay.
    fn reset_score(&mut self) {
        self.arena = std::mem::take(&mut self.arena).reset_score();
        self.status_message = "Score reset.".to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(boards: usize) -> App {
        App::new(ArenaConfig::default().with_board_count(boards))
    }

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            app.handle_key(*key);
        }
    }

    #[test]
    fn test_digits_play_on_selected_board() {
        let mut app = app(2);
        press(&mut app, &[KeyCode::Tab, KeyCode::Char('4')]);
        assert_eq!(app.arena().board(1).unwrap().occupied_count(), 1);
        assert_eq!(app.arena().board(0).unwrap().occupied_count(), 0);
        assert_eq!(app.status_message(), "Board 2: Next: O");
    }

    #[test]
    fn test_win_updates_score_and_status() {
        let mut app = app(1);
        let keys: Vec<KeyCode> = "01346".chars().map(KeyCode::Char).collect();
        press(&mut app, &keys);
        assert_eq!(app.arena().score().wins(Mark::X), 1);
        assert_eq!(app.status_message(), "Board 1: X wins!");
        assert_eq!(app.preview(), None);
    }

    #[test]
    fn test_occupied_cell_reports_rejection() {
        let mut app = app(1);
        press(&mut app, &[KeyCode::Enter, KeyCode::Enter]);
        assert_eq!(app.arena().board(0).unwrap().occupied_count(), 1);
        assert!(app.status_message().contains("already occupied"));
    }

    #[test]
    fn test_preview_follows_cursor() {
        let mut app = app(1);
        assert_eq!(app.preview(), Some((0, Position::Center, Mark::X)));
        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.preview(), None);
        press(&mut app, &[KeyCode::Up]);
        assert_eq!(app.preview(), Some((0, Position::TopCenter, Mark::O)));
    }

    #[test]
    fn test_new_round_and_score_reset() {
        let mut app = app(1);
        let keys: Vec<KeyCode> = "01346".chars().map(KeyCode::Char).collect();
        press(&mut app, &keys);

        press(&mut app, &[KeyCode::Char('n')]);
        assert_eq!(app.arena().finished_count(), 0);
        assert_eq!(app.arena().score().wins(Mark::X), 1);

        press(&mut app, &[KeyCode::Char('s')]);
        assert_eq!(app.arena().score().games(), 0);
    }

    #[test]
    fn test_quit() {
        let mut app = app(1);
        press(&mut app, &[KeyCode::Char('q')]);
        assert!(!app.is_running());
    }
}
