//! Monotonic board invariant: marks are only ever added, never changed.

use super::super::{Position, Square, Timeline};
use super::Invariant;

/// Invariant: each snapshot's board extends the previous one.
///
/// Every square occupied in snapshot `i` holds the same mark in snapshot
/// `i + 1`. Squares never revert to empty or change owner.
pub struct MonotonicBoardInvariant;

impl Invariant<Timeline> for MonotonicBoardInvariant {
    const DESCRIPTION: &'static str = "Occupied squares never change between snapshots";

    fn holds(timeline: &Timeline) -> bool {
        timeline.snapshots().windows(2).all(|pair| {
            let (earlier, later) = (pair[0].board(), pair[1].board());
            Position::ALL.iter().all(|&pos| match earlier.get(pos) {
                Square::Empty => true,
                occupied => later.get(pos) == occupied,
            })
        })
    }
}
