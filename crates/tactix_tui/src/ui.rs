//! Stateless rendering of the game screen.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::rc::Rc;
use tactix_core::{GameStatus, Mode, Player, Position, Square};

use crate::app::App;

const BOARD_WIDTH: u16 = 38;
const BOARD_HEIGHT: u16 = 11;

/// Cell positions by screen row and column.
const GRID: [[Position; 3]; 3] = [
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
];

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = screen_chunks(frame.area());

    let title = Paragraph::new("Tactix - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    frame.render_widget(score_line(app).alignment(Alignment::Center), chunks[1]);
    frame.render_widget(mode_line(app).alignment(Alignment::Center), chunks[2]);

    draw_board(frame, chunks[3], app);

    let status = Paragraph::new(app.status_text())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[4]);

    let help = Paragraph::new("1-9, arrows+enter, or click to move | c/p mode | r reset | q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[5]);
}

/// Maps a mouse click to the board cell under it, if any.
pub fn hit_test(area: Rect, column: u16, row: u16) -> Option<Position> {
    let chunks = screen_chunks(area);
    let board_area = center_rect(chunks[3], BOARD_WIDTH, BOARD_HEIGHT);
    let rows = split_rows(board_area);

    for (r, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = split_cols(row_area);
        for (c, cell) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            if column >= cell.x
                && column < cell.x + cell.width
                && row >= cell.y
                && row < cell.y + cell.height
            {
                return Some(GRID[r][c]);
            }
        }
    }

    None
}

fn screen_chunks(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),            // Title
            Constraint::Length(1),            // Scores
            Constraint::Length(1),            // Mode
            Constraint::Min(BOARD_HEIGHT),    // Board
            Constraint::Length(3),            // Status
            Constraint::Length(1),            // Help
        ])
        .split(area)
}

fn score_line(app: &App) -> Paragraph<'_> {
    let scores = app.session().scores();
    Paragraph::new(Line::from(vec![
        Span::styled(
            format!("X: {}", scores.wins(Player::X)),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
        Span::styled(
            format!("O: {}", scores.wins(Player::O)),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    ]))
}

fn mode_line(app: &App) -> Paragraph<'_> {
    let mode = app.session().mode();
    let entry = |label: &'static str, active: bool| {
        if active {
            Span::styled(
                label,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
        } else {
            Span::styled(label, Style::default().fg(Color::DarkGray))
        }
    };
    Paragraph::new(Line::from(vec![
        entry("[c] vs computer", mode == Mode::VsComputer),
        Span::raw("    "),
        entry("[p] two player", mode == Mode::VsHuman),
    ]))
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let rows = split_rows(board_area);

    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);

    for (r, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = split_cols(row_area);
        draw_separator_vertical(frame, cols[1]);
        draw_separator_vertical(frame, cols[3]);
        for (c, cell) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            draw_cell(frame, cell, GRID[r][c], app);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, pos: Position, app: &App) {
    let status = app.session().status();
    let square = app.session().board().get(pos);

    let (symbol, base_style) = match square {
        Square::Empty => (" ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            "X",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let winning = matches!(status, GameStatus::Won { line, .. } if line.contains(&pos));
    let style = if winning {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if pos == app.cursor() && status == GameStatus::InProgress {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Blank first line pushes the mark to the middle of the 3-tall cell.
    let lines = vec![Line::raw(""), Line::from(Span::styled(symbol, style))];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::raw("│"); 3])
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(sep, area);
}

fn split_rows(board_area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area)
}

fn split_cols(row_area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(row_area)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_test_finds_each_cell() {
        let area = Rect::new(0, 0, 80, 24);
        let chunks = screen_chunks(area);
        let board_area = center_rect(chunks[3], BOARD_WIDTH, BOARD_HEIGHT);
        let rows = split_rows(board_area);

        for (r, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
            let cols = split_cols(row_area);
            for (c, cell) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
                let hit = hit_test(area, cell.x + cell.width / 2, cell.y + cell.height / 2);
                assert_eq!(hit, Some(GRID[r][c]));
            }
        }
    }

    #[test]
    fn test_hit_test_misses_separators_and_margins() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(hit_test(area, 0, 0), None);

        let chunks = screen_chunks(area);
        let board_area = center_rect(chunks[3], BOARD_WIDTH, BOARD_HEIGHT);
        let rows = split_rows(board_area);
        let cols = split_cols(rows[0]);
        // Dead center of the first vertical separator.
        assert_eq!(hit_test(area, cols[1].x, cols[1].y), None);
    }
}
