//! Contract-based validation for the timeline.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::invariants::{InvariantViolation, TimelineInvariants};
use super::timeline::Timeline;
use super::{MoveError, Position, rules};
use tracing::{error, instrument};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Request to place the current player's mark at (row, col).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Row (0-2).
    pub row: usize,
    /// Column (0-2).
    pub col: usize,
}

impl Placement {
    /// The board position, if the coordinates are on the board.
    pub fn position(&self) -> Option<Position> {
        Position::from_row_col(self.row, self.col)
    }
}

// ─────────────────────────────────────────────────────────────
//  Play Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for playing a move on a timeline.
///
/// Preconditions:
/// - No terminal result at the cursor
/// - Coordinates on the board
/// - Target square empty
///
/// Postconditions:
/// - Snapshots up to the old cursor are kept unchanged
/// - Exactly one snapshot follows them and the cursor points at it
/// - All timeline invariants hold
pub struct PlayContract;

impl Contract<Timeline, Placement> for PlayContract {
    #[instrument(skip(timeline))]
    fn pre(timeline: &Timeline, action: &Placement) -> Result<(), MoveError> {
        rules::check_move(timeline.current_snapshot().board(), action.row, action.col).map(|_| ())
    }

    #[instrument(skip_all)]
    fn post(before: &Timeline, after: &Timeline) -> Result<(), MoveError> {
        let mut violations = TimelineInvariants::check_all(after).err().unwrap_or_default();

        let kept = before.cursor() + 1;
        if after.snapshots().get(..kept) != before.snapshots().get(..kept) {
            violations.push(InvariantViolation::new(
                "Snapshots up to the cursor survive a move",
            ));
        }
        if after.len() != kept + 1 || after.cursor() != kept {
            violations.push(InvariantViolation::new(
                "A move appends exactly one snapshot and selects it",
            ));
        }

        match violations.first() {
            None => Ok(()),
            Some(&first) => {
                error!(?violations, "Play postcondition violated");
                Err(MoveError::BrokenInvariant(first))
            }
        }
    }
}
