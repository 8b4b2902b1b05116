//! Display state derived from a timeline.
//!
//! Everything here is recomputed from the timeline on each call. Nothing
//! is cached, so there is nothing to invalidate after a command.

use derive_new::new;
use strictly_tictactoe::{Position, TerminalResult, Timeline};

/// Label of the reset control before the first move and after the game ends.
pub const START_NEW_GAME: &str = "Start New Game";

/// Label of the reset control while a game is underway.
pub const RESET: &str = "Reset";

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct HistoryEntry {
    /// Snapshot index this row jumps to.
    pub step: usize,
    /// Text shown for the row.
    pub label: String,
    /// True for the snapshot at the cursor.
    pub is_current: bool,
}

/// Status line for the snapshot at the cursor.
pub fn status_text(timeline: &Timeline) -> String {
    match timeline.current_result() {
        TerminalResult::Winner { player, .. } => format!("Winner: {}", player),
        TerminalResult::Draw => "Draw".to_string(),
        TerminalResult::NoResult => {
            format!("Next player: {}", timeline.current_snapshot().to_move())
        }
    }
}

/// Label for the reset control.
pub fn reset_label(timeline: &Timeline) -> &'static str {
    if !timeline.has_moves() || timeline.status().is_over() {
        START_NEW_GAME
    } else {
        RESET
    }
}

/// The move list: the game start followed by one row per played move.
pub fn history_entries(timeline: &Timeline) -> Vec<HistoryEntry> {
    let start = HistoryEntry::new(0, "Go to game start".to_string(), timeline.cursor() == 0);
    std::iter::once(start)
        .chain(timeline.moves().map(|(step, mov)| {
            HistoryEntry::new(
                step,
                format!("#{} {}", step, mov),
                timeline.cursor() == step,
            )
        }))
        .collect()
}

/// Cells of the winning line at the cursor, if any.
pub fn winning_cells(timeline: &Timeline) -> Vec<Position> {
    timeline
        .current_result()
        .line()
        .map(|line| line.iter().filter_map(|&idx| Position::from_index(idx)).collect())
        .unwrap_or_default()
}

/// Plain-text rendering: board, status and move list.
pub fn render_plain(timeline: &Timeline) -> String {
    let history: String = history_entries(timeline)
        .iter()
        .map(|entry| {
            let marker = if entry.is_current { ">" } else { " " };
            format!("{} {}\n", marker, entry.label)
        })
        .collect();

    format!(
        "{}\n\n{}\n\n{}",
        timeline.current_snapshot().board(),
        status_text(timeline),
        history
    )
}
