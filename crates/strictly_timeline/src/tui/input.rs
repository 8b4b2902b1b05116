//! Keyboard mapping and cursor movement.

use crossterm::event::KeyCode;
use strictly_tictactoe::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the board cursor with an arrow key.
    MoveCursor(KeyCode),
    /// Play at the board cursor.
    PlaySelected,
    /// Play directly at a cell.
    PlayCell(Position),
    /// One snapshot back.
    StepBack,
    /// One snapshot forward.
    StepForward,
    /// Jump to the initial snapshot.
    JumpStart,
    /// Jump to the newest snapshot.
    JumpLatest,
    /// Start a fresh game.
    Reset,
    /// Leave the app.
    Quit,
}

/// Maps a key to an action, if it has one.
pub fn action_for_key(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Action::MoveCursor(key))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlaySelected),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|digit| Position::from_index(digit as usize - 1))
            .map(Action::PlayCell),
        KeyCode::Char('[') | KeyCode::PageUp => Some(Action::StepBack),
        KeyCode::Char(']') | KeyCode::PageDown => Some(Action::StepForward),
        KeyCode::Home => Some(Action::JumpStart),
        KeyCode::End => Some(Action::JumpLatest),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Reset),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => (row + 1, col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, col + 1),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Down), Position::MiddleLeft);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
    }

    #[test]
    fn test_digit_keys_play_cells() {
        assert_eq!(
            action_for_key(KeyCode::Char('1')),
            Some(Action::PlayCell(Position::TopLeft))
        );
        assert_eq!(
            action_for_key(KeyCode::Char('9')),
            Some(Action::PlayCell(Position::BottomRight))
        );
        assert_eq!(action_for_key(KeyCode::Char('0')), None);
    }
}
