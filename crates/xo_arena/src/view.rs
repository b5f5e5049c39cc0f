//! Text projections of core state shared by the terminal UI and replay output.

use crate::config::ArenaConfig;
use xo_arena_core::{Arena, Board, Terminal};

/// One-line board status: `"X wins!"`, `"Draw!"` or `"Next: X"`.
pub fn status_line(board: &Board) -> String {
    match board.terminal() {
        Terminal::Won { mark, .. } => format!("{} wins!", mark),
        Terminal::Draw => "Draw!".to_string(),
        Terminal::InProgress => format!("Next: {}", board.next_mark()),
    }
}

/// Board title, numbered from 1.
pub fn board_title(index: usize) -> String {
    format!("Board {}", index + 1)
}

/// Renders the whole arena as plain text, honouring the configured projections.
pub fn arena_text(arena: &Arena, config: &ArenaConfig) -> String {
    let mut out = String::new();
    for (i, board) in arena.boards().iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if *config.show_titles() {
            out.push_str(&format!("{} - ", board_title(i)));
        }
        out.push_str(&status_line(board));
        out.push('\n');
        out.push_str(&board.to_string());
        out.push('\n');
    }
    if *config.show_score() {
        out.push_str(&format!("\nScore: {}\n", arena.score()));
    }
    out
}
