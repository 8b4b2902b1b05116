//! The game timeline: every snapshot of the current game plus a cursor.
//!
//! The timeline is the only stateful piece of the engine. Playing a move
//! appends a snapshot, jumping moves the cursor, and playing from a
//! rewound cursor discards everything after it before appending.

use super::contracts::{Contract, Placement, PlayContract};
use super::invariants::TimelineInvariants;
use super::{
    GameStatus, InvalidTimeline, Move, MoveError, OutOfRange, Snapshot, TerminalResult,
    TimelineError, rules,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// A command a presentation layer can issue against a timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Play the current player's mark at (row, col), zero-based.
    Play {
        /// Row (0-2).
        row: usize,
        /// Column (0-2).
        col: usize,
    },
    /// Move the cursor to the given snapshot index.
    JumpTo(usize),
    /// Start over from an empty board.
    Reset,
}

/// Ordered snapshots of one game and a cursor into them.
///
/// Snapshot 0 is always the empty board with X to move. The cursor always
/// points at an existing snapshot.
///
/// Deserializing checks [`TimelineInvariants`], so only reachable timelines
/// can be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TimelineRecord")]
pub struct Timeline {
    pub(crate) snapshots: Vec<Snapshot>,
    pub(crate) cursor: usize,
}

/// Unchecked wire form of a [`Timeline`].
#[derive(Deserialize)]
struct TimelineRecord {
    snapshots: Vec<Snapshot>,
    cursor: usize,
}

impl TryFrom<TimelineRecord> for Timeline {
    type Error = InvalidTimeline;

    fn try_from(record: TimelineRecord) -> Result<Self, Self::Error> {
        let timeline = Self {
            snapshots: record.snapshots,
            cursor: record.cursor,
        };
        TimelineInvariants::check_all(&timeline).map_err(|violations| {
            warn!(?violations, "Rejected serialized timeline");
            InvalidTimeline { violations }
        })?;
        Ok(timeline)
    }
}

impl Timeline {
    /// Creates a timeline holding only the initial snapshot.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::initial()],
            cursor: 0,
        }
    }

    /// Returns the snapshot at the cursor.
    pub fn current_snapshot(&self) -> &Snapshot {
        &self.snapshots[self.cursor]
    }

    /// Evaluates the board at the cursor.
    pub fn current_result(&self) -> TerminalResult {
        self.current_snapshot().result()
    }

    /// Game state observed at the cursor.
    pub fn status(&self) -> GameStatus {
        self.current_result().status()
    }

    /// All recorded snapshots, including any ahead of the cursor.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Index of the current snapshot.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of recorded snapshots (always at least one).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: a timeline holds at least the initial snapshot.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// True when the cursor is on the newest snapshot.
    pub fn is_latest(&self) -> bool {
        self.cursor + 1 == self.snapshots.len()
    }

    /// True once any move has been recorded, whether or not the cursor
    /// currently sits before it.
    pub fn has_moves(&self) -> bool {
        self.snapshots.len() > 1
    }

    /// Played moves in order, paired with their step number (1-based).
    ///
    /// Step `n` is the move that produced snapshot `n`, so passing it to
    /// [`Timeline::jump_to`] shows the board right after that move.
    pub fn moves(&self) -> impl Iterator<Item = (usize, Move)> + '_ {
        self.snapshots
            .iter()
            .enumerate()
            .filter_map(|(step, snapshot)| snapshot.last_move().map(|mov| (step, mov)))
    }

    /// Plays the current player's mark at (row, col).
    ///
    /// Snapshots after the cursor are discarded before the new one is
    /// appended, and the cursor moves onto it. On error nothing changes.
    ///
    /// # Errors
    ///
    /// - `MoveError::GameOver` if the current board is won or drawn
    /// - `MoveError::OutOfBounds` if the coordinates are off the board
    /// - `MoveError::SquareOccupied` if the square is taken
    /// - `MoveError::BrokenInvariant` if the postcondition fails (debug
    ///   builds only)
    #[instrument(skip(self), fields(cursor = self.cursor, len = self.snapshots.len()))]
    pub fn play_move(&mut self, row: usize, col: usize) -> Result<&Snapshot, MoveError> {
        let placement = Placement { row, col };
        if let Err(e) = PlayContract::pre(self, &placement) {
            warn!(error = %e, "Move rejected");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let current = self.current_snapshot();
        let player = current.to_move();
        let board = rules::apply_move(current.board(), row, col, player)?;
        let position = placement.position().ok_or(MoveError::OutOfBounds { row, col })?;
        let snapshot = Snapshot::after(board, Move::new(player, position));

        let discarded = self.snapshots.len() - (self.cursor + 1);
        if discarded > 0 {
            debug!(discarded, "Branching from the past, dropping future snapshots");
        }
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(snapshot);
        self.cursor = self.snapshots.len() - 1;

        #[cfg(debug_assertions)]
        if let Err(e) = PlayContract::post(&before, self) {
            *self = before;
            return Err(e);
        }

        debug!(%player, %position, cursor = self.cursor, "Move played");
        Ok(self.current_snapshot())
    }

    /// Moves the cursor to snapshot `index` without touching the history.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` unless `index < self.len()`.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), OutOfRange> {
        if index >= self.snapshots.len() {
            let err = OutOfRange {
                index,
                len: self.snapshots.len(),
            };
            warn!(error = %err, "Jump rejected");
            return Err(err);
        }

        debug!(from = self.cursor, to = index, "Jumping through history");
        self.cursor = index;
        Ok(())
    }

    /// Replaces the whole timeline with a fresh one.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn reset(&mut self) {
        info!("Resetting timeline");
        *self = Self::new();
    }

    /// Dispatches a command.
    ///
    /// # Errors
    ///
    /// Propagates the rejection from the underlying operation.
    #[instrument(skip(self))]
    pub fn apply(&mut self, command: Command) -> Result<(), TimelineError> {
        match command {
            Command::Play { row, col } => {
                self.play_move(row, col)?;
            }
            Command::JumpTo(index) => self.jump_to(index)?,
            Command::Reset => self.reset(),
        }
        Ok(())
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}
