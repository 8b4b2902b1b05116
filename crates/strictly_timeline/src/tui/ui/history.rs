//! Move-history pane.

use crate::view;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
};
use strictly_tictactoe::Timeline;

/// First visible history row, scrolled so the cursor row stays on screen.
pub fn history_offset(len: usize, cursor: usize, height: usize) -> usize {
    if height == 0 || len <= height {
        0
    } else {
        cursor.saturating_sub(height - 1).min(len - height)
    }
}

/// Renders the move list, marking the entry at the cursor.
pub fn render_history(f: &mut Frame, area: Rect, timeline: &Timeline) {
    let height = area.height as usize;
    let offset = history_offset(timeline.len(), timeline.cursor(), height);

    let lines: Vec<Line> = view::history_entries(timeline)
        .into_iter()
        .skip(offset)
        .take(height)
        .map(|entry| {
            if entry.is_current {
                Line::styled(
                    format!("> {}", entry.label),
                    Style::default().add_modifier(Modifier::BOLD),
                )
            } else {
                Line::from(format!("  {}", entry.label))
            }
        })
        .collect();

    f.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_keeps_cursor_visible() {
        assert_eq!(history_offset(5, 4, 10), 0);
        assert_eq!(history_offset(10, 9, 4), 6);
        assert_eq!(history_offset(10, 2, 4), 0);
        assert_eq!(history_offset(10, 5, 4), 2);
        assert_eq!(history_offset(10, 5, 0), 0);
    }
}
