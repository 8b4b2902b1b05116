//! Exclusive-writer wrapper for embedding a timeline across threads.
//!
//! Every command runs under a single lock acquisition, so reading the
//! cursor, truncating and appending in `play_move` cannot interleave with
//! another writer.

use super::{
    Command, GameStatus, MoveError, OutOfRange, Snapshot, TerminalResult, Timeline, TimelineError,
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::instrument;

/// A timeline shared between owners. Clones refer to the same timeline.
#[derive(Debug, Clone, Default)]
pub struct SharedTimeline {
    inner: Arc<Mutex<Timeline>>,
}

impl SharedTimeline {
    /// Creates a shared fresh timeline.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    // Timeline commands never leave it half-updated, so a panic in another
    // holder does not invalidate the data.
    fn lock(&self) -> MutexGuard<'_, Timeline> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` with exclusive access to the timeline.
    pub fn with<R>(&self, f: impl FnOnce(&mut Timeline) -> R) -> R {
        f(&mut self.lock())
    }

    /// Plays a move and returns a copy of the new current snapshot.
    ///
    /// # Errors
    ///
    /// See [`Timeline::play_move`].
    #[instrument(skip(self))]
    pub fn play_move(&self, row: usize, col: usize) -> Result<Snapshot, MoveError> {
        self.lock().play_move(row, col).cloned()
    }

    /// Moves the cursor.
    ///
    /// # Errors
    ///
    /// See [`Timeline::jump_to`].
    #[instrument(skip(self))]
    pub fn jump_to(&self, index: usize) -> Result<(), OutOfRange> {
        self.lock().jump_to(index)
    }

    /// Resets to a fresh timeline.
    #[instrument(skip(self))]
    pub fn reset(&self) {
        self.lock().reset();
    }

    /// Dispatches a command.
    ///
    /// # Errors
    ///
    /// See [`Timeline::apply`].
    #[instrument(skip(self))]
    pub fn apply(&self, command: Command) -> Result<(), TimelineError> {
        self.lock().apply(command)
    }

    /// Copy of the snapshot at the cursor.
    pub fn current_snapshot(&self) -> Snapshot {
        self.lock().current_snapshot().clone()
    }

    /// Result at the cursor.
    pub fn current_result(&self) -> TerminalResult {
        self.lock().current_result()
    }

    /// Status at the cursor.
    pub fn status(&self) -> GameStatus {
        self.lock().status()
    }

    /// Cursor position.
    pub fn cursor(&self) -> usize {
        self.lock().cursor()
    }

    /// Number of snapshots.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Always false; see [`Timeline::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Copy of the whole timeline.
    pub fn to_timeline(&self) -> Timeline {
        self.lock().clone()
    }
}
