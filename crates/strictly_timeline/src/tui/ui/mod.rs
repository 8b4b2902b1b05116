//! UI rendering using ratatui.

mod board;
mod history;

use super::app::App;
use crate::config::{AppConfig, NamedColor};
use crate::view;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use strictly_tictactoe::{Position, Timeline};

pub use board::render_board;
pub use history::{history_offset, render_history};

const HELP: &str = "Arrows+Enter or 1-9: play | [ ]: step | Home/End | R: reset | Q: quit";

/// Screen regions for one frame, shared by rendering and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenLayout {
    title: Rect,
    board_pane: Rect,
    cells: [Rect; 9],
    history_pane: Rect,
    history_list: Rect,
    status: Rect,
    reset_button: Rect,
    help: Rect,
}

impl ScreenLayout {
    /// Splits the terminal area into panes.
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(13),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[1]);

        let footer = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(20), Constraint::Min(0)])
            .split(rows[3]);

        let board_pane = body[0];
        let history_pane = body[1];

        Self {
            title: rows[0],
            board_pane,
            cells: board::cell_rects(Block::bordered().inner(board_pane)),
            history_pane,
            history_list: Block::bordered().inner(history_pane),
            status: rows[2],
            reset_button: footer[0],
            help: footer[1],
        }
    }

    /// Screen area of a board cell.
    pub fn cell_rect(&self, pos: Position) -> Rect {
        self.cells[pos.to_index()]
    }

    /// Inner area of the history pane, one row per entry.
    pub fn history_list(&self) -> Rect {
        self.history_list
    }

    /// Area of the reset button.
    pub fn reset_button(&self) -> Rect {
        self.reset_button
    }

    /// Board cell under a screen coordinate.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        self.cells
            .iter()
            .position(|rect| rect.contains((column, row).into()))
            .and_then(Position::from_index)
    }

    /// History step under a screen coordinate.
    pub fn history_step_at(&self, column: u16, row: u16, timeline: &Timeline) -> Option<usize> {
        if !self.history_list.contains((column, row).into()) {
            return None;
        }
        let offset = history_offset(
            timeline.len(),
            timeline.cursor(),
            self.history_list.height as usize,
        );
        let step = offset + (row - self.history_list.y) as usize;
        (step < timeline.len()).then_some(step)
    }

    /// True if the coordinate is on the reset button.
    pub fn is_reset_button(&self, column: u16, row: u16) -> bool {
        self.reset_button.contains((column, row).into())
    }
}

/// Converts a configured color into a terminal color.
pub fn color(named: NamedColor) -> Color {
    match named {
        NamedColor::Black => Color::Black,
        NamedColor::Red => Color::Red,
        NamedColor::Green => Color::Green,
        NamedColor::Yellow => Color::Yellow,
        NamedColor::Blue => Color::Blue,
        NamedColor::Magenta => Color::Magenta,
        NamedColor::Cyan => Color::Cyan,
        NamedColor::Gray => Color::Gray,
        NamedColor::White => Color::White,
    }
}

/// Draws the main UI and returns the layout it used.
pub fn draw(f: &mut Frame, app: &App, config: &AppConfig) -> ScreenLayout {
    let layout = ScreenLayout::new(f.area());

    let title = Paragraph::new("Strictly Timeline - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.title);

    f.render_widget(Block::bordered().title("Board"), layout.board_pane);
    render_board(f, &layout.cells, app, config);

    f.render_widget(Block::bordered().title("History"), layout.history_pane);
    render_history(f, layout.history_list, app.timeline());

    let status_style = if app.message().is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(app.status_line())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, layout.status);

    let reset = Paragraph::new(view::reset_label(app.timeline()))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(reset, layout.reset_button);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help);

    layout
}
