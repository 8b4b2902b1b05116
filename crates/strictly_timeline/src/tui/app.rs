//! Application state and logic.

use super::input::{Action, action_for_key, move_cursor};
use super::ui::ScreenLayout;
use crate::view;
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use strictly_tictactoe::{Command, Position, Timeline};
use tracing::{debug, info, instrument};

/// Main application state.
///
/// The timeline is the only game state; everything shown on screen is
/// derived from it when drawing.
#[derive(Debug, Clone)]
pub struct App {
    timeline: Timeline,
    selected: Position,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new() -> Self {
        Self {
            timeline: Timeline::new(),
            selected: Position::Center,
            message: None,
            should_quit: false,
        }
    }

    /// Gets the timeline.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Cell under the keyboard cursor.
    pub fn selected(&self) -> Position {
        self.selected
    }

    /// Error from the last rejected command, cleared by the next success.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Status line: derived game status plus any pending error.
    pub fn status_line(&self) -> String {
        let status = view::status_text(&self.timeline);
        match &self.message {
            Some(message) => format!("{} | {}", status, message),
            None => status,
        }
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        if let Some(action) = action_for_key(key) {
            self.dispatch(action);
        }
    }

    /// Handles a mouse event against the layout that was last drawn.
    pub fn handle_mouse(&mut self, layout: &ScreenLayout, event: MouseEvent) {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        if let Some(pos) = layout.cell_at(event.column, event.row) {
            self.selected = pos;
            self.dispatch(Action::PlayCell(pos));
        } else if let Some(step) = layout.history_step_at(event.column, event.row, &self.timeline)
        {
            self.run(Command::JumpTo(step));
        } else if layout.is_reset_button(event.column, event.row) {
            self.dispatch(Action::Reset);
        }
    }

    /// Performs an action.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::MoveCursor(key) => self.selected = move_cursor(self.selected, key),
            Action::PlaySelected => self.play(self.selected),
            Action::PlayCell(pos) => {
                self.selected = pos;
                self.play(pos);
            }
            Action::StepBack => {
                if let Some(step) = self.timeline.cursor().checked_sub(1) {
                    self.run(Command::JumpTo(step));
                }
            }
            Action::StepForward => {
                if !self.timeline.is_latest() {
                    self.run(Command::JumpTo(self.timeline.cursor() + 1));
                }
            }
            Action::JumpStart => self.run(Command::JumpTo(0)),
            Action::JumpLatest => self.run(Command::JumpTo(self.timeline.len() - 1)),
            Action::Reset => {
                info!(label = view::reset_label(&self.timeline), "Reset requested");
                self.run(Command::Reset);
            }
            Action::Quit => self.should_quit = true,
        }
    }

    fn play(&mut self, pos: Position) {
        self.run(Command::Play {
            row: pos.row(),
            col: pos.col(),
        });
    }

    fn run(&mut self, command: Command) {
        match self.timeline.apply(command) {
            Ok(()) => {
                debug!(?command, cursor = self.timeline.cursor(), "Command applied");
                self.message = None;
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
