//! Cursor invariant: the cursor always names a recorded snapshot.

use super::super::Timeline;
use super::Invariant;

/// Invariant: `0 <= cursor < len`, which also rules out an empty history.
pub struct CursorInRangeInvariant;

impl Invariant<Timeline> for CursorInRangeInvariant {
    const DESCRIPTION: &'static str = "Cursor points at a recorded snapshot";

    fn holds(timeline: &Timeline) -> bool {
        timeline.cursor() < timeline.snapshots().len()
    }
}
