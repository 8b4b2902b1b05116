//! Mouse and keyboard driving of the TUI app state.

use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use strictly_tictactoe::{Player, Position, Square};
use strictly_timeline::tui::{App, ScreenLayout};

fn layout() -> ScreenLayout {
    ScreenLayout::new(Rect::new(0, 0, 100, 30))
}

fn left_click(rect: Rect) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: rect.x + rect.width / 2,
        row: rect.y + rect.height / 2,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn test_click_on_cell_plays_it() {
    let layout = layout();
    let mut app = App::new();

    app.handle_mouse(&layout, left_click(layout.cell_rect(Position::BottomLeft)));

    let board = app.timeline().current_snapshot().board();
    assert_eq!(board.get(Position::BottomLeft), Square::Occupied(Player::X));
    assert_eq!(app.selected(), Position::BottomLeft);
}

#[test]
fn test_right_click_is_ignored() {
    let layout = layout();
    let mut app = App::new();
    let mut event = left_click(layout.cell_rect(Position::Center));
    event.kind = MouseEventKind::Down(MouseButton::Right);

    app.handle_mouse(&layout, event);
    assert_eq!(app.timeline().len(), 1);
}

#[test]
fn test_click_on_history_row_jumps() {
    let layout = layout();
    let mut app = App::new();
    for key in ['1', '5', '9'] {
        app.handle_key(KeyCode::Char(key));
    }

    let list = layout.history_list();
    let row = Rect::new(list.x, list.y + 1, list.width, 1);
    app.handle_mouse(&layout, left_click(row));

    assert_eq!(app.timeline().cursor(), 1);
    assert_eq!(app.timeline().len(), 4);
    assert_eq!(app.status_line(), "Next player: O");
}

#[test]
fn test_branching_from_history_click() {
    let layout = layout();
    let mut app = App::new();
    for key in ['1', '5', '9'] {
        app.handle_key(KeyCode::Char(key));
    }

    let list = layout.history_list();
    app.handle_mouse(&layout, left_click(Rect::new(list.x, list.y + 1, list.width, 1)));
    app.handle_mouse(&layout, left_click(layout.cell_rect(Position::TopRight)));

    assert_eq!(app.timeline().len(), 3);
    assert_eq!(app.timeline().cursor(), 2);
}

#[test]
fn test_click_on_reset_button() {
    let layout = layout();
    let mut app = App::new();
    app.handle_key(KeyCode::Char('5'));

    app.handle_mouse(&layout, left_click(layout.reset_button()));
    assert_eq!(app.timeline().len(), 1);
}
