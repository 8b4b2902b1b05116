//! Tic-tac-toe board rendering.

use super::color;
use crate::config::AppConfig;
use crate::tui::app::App;
use crate::view;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use strictly_tictactoe::{Player, Position, Square};

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 3;
const GRID_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const GRID_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Computes the nine cell areas, row-major, centered in `area`.
pub(super) fn cell_rects(area: Rect) -> [Rect; 9] {
    let grid = center_rect(area, GRID_WIDTH, GRID_HEIGHT);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(grid);

    let mut cells = [Rect::default(); 9];
    for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(row_area);
        for (col, cell) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            cells[row * 3 + col] = cell;
        }
    }
    cells
}

/// Renders the board at the cursor snapshot into precomputed cell areas.
pub fn render_board(f: &mut Frame, cells: &[Rect; 9], app: &App, config: &AppConfig) {
    let board = *app.timeline().current_snapshot().board();
    let winning = view::winning_cells(app.timeline());
    let theme = config.theme();

    for pos in Position::ALL {
        let (text, mut style) = match board.get(pos) {
            Square::Empty if *config.show_cell_numbers() => (
                (pos.to_index() + 1).to_string(),
                Style::default().fg(Color::DarkGray),
            ),
            Square::Empty => (String::new(), Style::default()),
            Square::Occupied(player) => {
                let fg = match player {
                    Player::X => color(*theme.x_color()),
                    Player::O => color(*theme.o_color()),
                };
                (
                    player.to_string(),
                    Style::default().fg(fg).add_modifier(Modifier::BOLD),
                )
            }
        };

        if winning.contains(&pos) {
            style = style.bg(color(*theme.highlight_color())).fg(Color::Black);
        }
        if pos == app.selected() {
            style = style.add_modifier(Modifier::REVERSED);
        }

        let area = cells[pos.to_index()];
        // Vertically center the glyph in a multi-line cell.
        let padding = area.height.saturating_sub(1) / 2;
        let mut lines = vec![Line::default(); padding as usize];
        lines.push(Line::from(Span::styled(text, style)));

        let paragraph = Paragraph::new(lines)
            .style(style)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
    }

    render_separators(f, cells);
}

fn render_separators(f: &mut Frame, cells: &[Rect; 9]) {
    let style = Style::default().fg(Color::DarkGray);

    for row in 0..3 {
        for col in 0..2 {
            let left = cells[row * 3 + col];
            let sep = Rect::new(left.x + left.width, left.y, 1, left.height).intersection(f.area());
            f.render_widget(Paragraph::new(vec![Line::from("│"); sep.height as usize]).style(style), sep);
        }
    }

    for row in 0..2 {
        let first = cells[row * 3];
        let last = cells[row * 3 + 2];
        let width = (last.x + last.width).saturating_sub(first.x);
        let sep = Rect::new(first.x, first.y + first.height, width, 1).intersection(f.area());
        f.render_widget(Paragraph::new("─".repeat(width as usize)).style(style), sep);
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
