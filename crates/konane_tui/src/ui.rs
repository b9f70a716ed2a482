//! Stateless UI rendering for the Kōnane board.

use crate::app::App;
use konane::{Cell, Phase, Player, Position};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Width of one rendered cell, in terminal columns.
const CELL_WIDTH: usize = 3;

/// Number of log lines shown beside the board.
const LOG_LINES: usize = 12;

/// Renders the whole screen from the application state.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board and log
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Kōnane - Hawaiian Checkers")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(32)])
        .split(chunks[1]);

    draw_board(frame, body[0], app);
    draw_log(frame, body[1], app);

    let status_style = if app.session().state().phase().is_over() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(app.status_message())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("arrows/hjkl move · enter select · n new game · q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let width = (konane::BOARD_SIZE * CELL_WIDTH + 4) as u16;
    let height = (konane::BOARD_SIZE + 3) as u16;
    let board_area = center_rect(area, width, height);

    let board = Paragraph::new(board_lines(app)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(turn_title(app)),
    );
    frame.render_widget(board, board_area);
}

fn turn_title(app: &App) -> String {
    let state = app.session().state();
    match state.phase() {
        Phase::Setup if !state.started() => " preview ".to_string(),
        Phase::Setup => format!(" setup · {} ", state.current_player()),
        Phase::Playing => format!(" {} ", state.current_player()),
        Phase::Finished => " finished ".to_string(),
    }
}

/// Builds the column header and one line per board row.
pub fn board_lines(app: &App) -> Vec<Line<'static>> {
    let header: String = (0..konane::BOARD_SIZE)
        .map(|col| format!("{:^width$}", col, width = CELL_WIDTH))
        .collect();
    let mut lines = vec![Line::from(Span::styled(
        format!("  {}", header),
        Style::default().fg(Color::DarkGray),
    ))];

    for row in 0..konane::BOARD_SIZE {
        let mut spans = vec![Span::styled(
            format!("{} ", row),
            Style::default().fg(Color::DarkGray),
        )];
        spans.extend(
            (0..konane::BOARD_SIZE)
                .filter_map(|col| Position::new(row, col))
                .map(|pos| cell_span(app, pos)),
        );
        lines.push(Line::from(spans));
    }
    lines
}

fn cell_span(app: &App, pos: Position) -> Span<'static> {
    let state = app.session().state();
    let config = app.config();

    let (glyph, mut style) = match state.board().get(pos) {
        Cell::Empty if *config.show_hints() && state.valid_moves().contains(&pos) => (
            "·".to_string(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Cell::Empty => (" ".to_string(), Style::default()),
        Cell::Occupied(player) => (config.glyph(player).to_string(), piece_style(player)),
    };

    style = if pos.is_dark() {
        style.bg(Color::Rgb(60, 60, 60))
    } else {
        style.bg(Color::Rgb(110, 90, 60))
    };

    if state.selected_piece() == Some(pos) {
        style = style.bg(Color::Blue);
    }
    if pos == app.cursor() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    Span::styled(format!("{:^width$}", glyph, width = CELL_WIDTH), style)
}

fn piece_style(player: Player) -> Style {
    match player {
        Player::Black => Style::default().fg(Color::Black).add_modifier(Modifier::BOLD),
        Player::White => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    }
}

fn draw_log(frame: &mut Frame, area: Rect, app: &App) {
    let log = app.session().log();
    let lines: Vec<Line> = log
        .iter()
        .enumerate()
        .skip(log.len().saturating_sub(LOG_LINES))
        .map(|(i, action)| Line::from(format!("{:>3}. {}", i + 1, action)))
        .collect();

    let panel = Paragraph::new(lines)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL).title(" moves "));
    frame.render_widget(panel, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_board_lines_show_header_and_rows() {
        let app = App::new(TuiConfig::default());
        let lines = board_lines(&app);
        assert_eq!(lines.len(), konane::BOARD_SIZE + 1);
        assert!(line_text(&lines[0]).contains('7'));
        assert!(line_text(&lines[1]).starts_with("0 "));
        assert!(line_text(&lines[1]).contains('●'));
        assert!(line_text(&lines[1]).contains('○'));
    }

    #[test]
    fn test_hints_mark_landings() {
        let mut app = App::new(TuiConfig::default());
        // Start, Black removes 3,3, White removes 3,4, Black selects 3,1.
        for key in [
            KeyCode::Enter,
            KeyCode::Enter,
            KeyCode::Right,
            KeyCode::Enter,
            KeyCode::Left,
            KeyCode::Left,
            KeyCode::Left,
            KeyCode::Enter,
        ] {
            app.handle_key(key);
        }
        assert!(!app.session().state().valid_moves().is_empty());

        let row = line_text(&board_lines(&app)[4]);
        assert_eq!(row.matches('·').count(), app.session().state().valid_moves().len());
    }

    #[test]
    fn test_draw_renders_title_and_status() {
        let app = App::new(TuiConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Hawaiian Checkers"));
        assert!(text.contains("Press Enter to start"));
    }
}
