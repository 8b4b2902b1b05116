//! Properties every reachable timeline satisfies.
//!
//! Each invariant is a zero-sized type checked against a whole [`Timeline`].
//! [`TimelineInvariants`] runs all of them; the play postcondition and the
//! JSON loader both go through it.

pub mod alternating_turn;
pub mod cursor_in_range;
pub mod history_consistent;
pub mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use cursor_in_range::CursorInRangeInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

use super::Timeline;

/// A property of a state `S`.
pub trait Invariant<S> {
    /// What the invariant guarantees, used as the violation message.
    const DESCRIPTION: &'static str;

    /// True if the property holds for `state`.
    fn holds(state: &S) -> bool;

    /// Like [`Invariant::holds`], but names the broken property.
    fn check(state: &S) -> Result<(), InvariantViolation> {
        if Self::holds(state) {
            Ok(())
        } else {
            Err(InvariantViolation::new(Self::DESCRIPTION))
        }
    }
}

/// A broken invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Description of the property that failed.
    pub description: &'static str,
}

impl InvariantViolation {
    /// Creates a violation for the given property.
    pub fn new(description: &'static str) -> Self {
        Self { description }
    }
}

type Check = fn(&Timeline) -> Result<(), InvariantViolation>;

/// Every timeline invariant, checked together.
pub struct TimelineInvariants;

impl TimelineInvariants {
    // Cursor first: the rest never index by it, but its message is the
    // most useful when a loaded timeline is rejected.
    const CHECKS: [Check; 4] = [
        <CursorInRangeInvariant as Invariant<Timeline>>::check,
        <HistoryConsistentInvariant as Invariant<Timeline>>::check,
        <MonotonicBoardInvariant as Invariant<Timeline>>::check,
        <AlternatingTurnInvariant as Invariant<Timeline>>::check,
    ];

    /// Checks every invariant and collects the ones that fail.
    pub fn check_all(timeline: &Timeline) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = Self::CHECKS
            .iter()
            .filter_map(|check| check(timeline).err())
            .collect();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}
