//! Error types for rejected timeline commands.
//!
//! Every error here is recoverable: the operation that produced it left the
//! timeline exactly as it was.

use super::invariants::InvariantViolation;
use super::{GameStatus, Position};
use std::fmt;

/// A move that cannot be played (the IllegalMove kind).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Coordinates fall outside the 3x3 grid.
    #[display("Cell ({row}, {col}) is off the board")]
    OutOfBounds {
        /// Requested row (zero-based).
        row: usize,
        /// Requested column (zero-based).
        col: usize,
    },

    /// The square at the position is already occupied.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(Position),

    /// The board already has a terminal result.
    #[display("Game is already over ({_0})")]
    GameOver(GameStatus),

    /// Applying the move would have broken a timeline invariant. The
    /// timeline is restored before this is returned.
    #[display("Invariant violation: {_0}")]
    BrokenInvariant(InvariantViolation),
}

impl std::error::Error for MoveError {}

/// A history jump to a step that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("History step {index} is out of range (timeline has {len} snapshots)")]
pub struct OutOfRange {
    /// Requested snapshot index.
    pub index: usize,
    /// Number of snapshots in the timeline.
    pub len: usize,
}

impl std::error::Error for OutOfRange {}

/// Any rejected timeline command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum TimelineError {
    /// The move was rejected.
    #[display("Illegal move: {_0}")]
    IllegalMove(MoveError),
    /// The jump target does not exist.
    #[display("{_0}")]
    OutOfRange(OutOfRange),
}

impl std::error::Error for TimelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TimelineError::IllegalMove(e) => Some(e),
            TimelineError::OutOfRange(e) => Some(e),
        }
    }
}

/// A serialized timeline that is not a reachable game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTimeline {
    /// Every invariant the loaded timeline breaks.
    pub violations: Vec<InvariantViolation>,
}

impl fmt::Display for InvalidTimeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Invalid timeline")?;
        for (idx, violation) in self.violations.iter().enumerate() {
            let sep = if idx == 0 { ": " } else { "; " };
            write!(f, "{sep}{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for InvalidTimeline {}
