//! Stateless UI rendering for the arena.

use super::app::App;
use crate::view::{board_title, status_line};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use xo_arena_core::{Board, Mark, Position, Square};

const TILE_WIDTH: u16 = 17;
const TILE_HEIGHT: u16 = 9;
const MAX_COLUMNS: usize = 4;

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let show_score = *app.config().show_score();
    let chunks = Layout::vertical([
        Constraint::Length(1),                                   // Title
        Constraint::Length(if show_score { 3 } else { 0 }),      // Score
        Constraint::Min(TILE_HEIGHT),                            // Boards
        Constraint::Length(3),                                   // Status
        Constraint::Length(1),                                   // Help
    ])
    .split(frame.area());

    let title = Paragraph::new("XO Arena")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    if show_score {
        draw_score(frame, chunks[1], app);
    }
    draw_boards(frame, chunks[2], app);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    const HELP: &str =
        "←↑→↓ move · Tab board · Enter/0-8 place · n new round · s reset score · q quit";
    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_score(frame: &mut Frame, area: Rect, app: &App) {
    let score = app.arena().score();
    let line = Line::from(vec![
        Span::styled(format!("X {}", score.wins(Mark::X)), mark_style(Mark::X)),
        Span::raw("   "),
        Span::styled(format!("O {}", score.wins(Mark::O)), mark_style(Mark::O)),
        Span::raw("   "),
        Span::styled(format!("Draw {}", score.draws()), Style::default().fg(Color::Gray)),
    ]);
    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Score"));
    frame.render_widget(paragraph, area);
}

fn draw_boards(frame: &mut Frame, area: Rect, app: &App) {
    let count = app.arena().len();
    if count == 0 {
        return;
    }
    let columns = count.min(MAX_COLUMNS);
    let rows = count.div_ceil(columns);

    let row_areas = Layout::vertical(vec![Constraint::Length(TILE_HEIGHT); rows]).split(area);
    for (row, row_area) in row_areas.iter().enumerate() {
        let col_areas =
            Layout::horizontal(vec![Constraint::Length(TILE_WIDTH); columns]).split(*row_area);
        for (col, tile) in col_areas.iter().enumerate() {
            let index = row * columns + col;
            if let Some(board) = app.arena().board(index) {
                draw_board(frame, *tile, app, index, board);
            }
        }
    }
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, index: usize, board: &Board) {
    let selected = app.cursor().board() == index;
    let mut block = Block::default().borders(Borders::ALL).border_style(if selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    });
    if *app.config().show_titles() {
        block = block.title(board_title(index));
    }

    let mut lines = Vec::with_capacity(7);
    for row in 0..3 {
        let mut spans = Vec::with_capacity(5);
        for col in 0..3 {
            let pos = Position::ALL[row * 3 + col];
            spans.push(cell_span(app, index, board, pos));
            if col < 2 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
        }
        lines.push(Line::from(spans));
        if row < 2 {
            lines.push(Line::styled("───┼───┼───", Style::default().fg(Color::DarkGray)));
        }
    }
    lines.push(Line::from(Span::styled(
        status_line(board),
        Style::default().fg(Color::Yellow),
    )));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

fn cell_span(app: &App, index: usize, board: &Board, pos: Position) -> Span<'static> {
    let cell = board.cells()[pos.to_index()];
    let under_cursor = app.cursor().board() == index && app.cursor().position() == pos;

    let (symbol, mut style) = match cell.square() {
        Square::Occupied(mark) => (format!(" {} ", mark), mark_style(mark)),
        Square::Empty => match app.preview() {
            Some((b, p, mark)) if b == index && p == pos => {
                (format!(" {} ", mark), Style::default().fg(Color::DarkGray))
            }
            _ => ("   ".to_string(), Style::default()),
        },
    };

    if cell.is_winning() {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if under_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Span::styled(symbol, style)
}

fn mark_style(mark: Mark) -> Style {
    let color = match mark {
        Mark::X => Color::Blue,
        Mark::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ArenaConfig;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_titles_and_score() {
        let app = App::new(ArenaConfig::default().with_board_count(2));
        let text = screen(&app);
        assert!(text.contains("Board 1"));
        assert!(text.contains("Board 2"));
        assert!(text.contains("Score"));
        assert!(text.contains("Next: X"));
    }

    #[test]
    fn test_hides_disabled_projections() {
        let config = ArenaConfig::default()
            .with_board_count(1)
            .with_show_titles(false)
            .with_show_score(false);
        let text = screen(&App::new(config));
        assert!(!text.contains("Board 1"));
        assert!(!text.contains("Score"));
    }
}
