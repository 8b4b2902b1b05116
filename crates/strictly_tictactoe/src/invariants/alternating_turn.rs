//! Alternating turn invariant: X and O take turns, X first.

use super::super::{Player, Timeline};
use super::Invariant;

/// Invariant: snapshot `i` has X to move when `i` is even, O when odd.
///
/// The move recorded in a snapshot was made by the opponent of the player
/// to move in it.
pub struct AlternatingTurnInvariant;

impl Invariant<Timeline> for AlternatingTurnInvariant {
    const DESCRIPTION: &'static str = "Players alternate turns, starting with X";

    fn holds(timeline: &Timeline) -> bool {
        timeline
            .snapshots()
            .iter()
            .enumerate()
            .all(|(step, snapshot)| {
                let expected = if step % 2 == 0 { Player::X } else { Player::O };
                snapshot.to_move() == expected
                    && snapshot
                        .last_move()
                        .is_none_or(|mov| mov.player == expected.opponent())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Move, Position, Snapshot, Square};

    #[test]
    fn test_alternation_holds() {
        let mut timeline = Timeline::new();
        for (row, col) in [(0, 0), (0, 1), (0, 2)] {
            timeline.play_move(row, col).expect("legal move");
        }
        assert!(AlternatingTurnInvariant::holds(&timeline));
    }

    #[test]
    fn test_double_move_violates() {
        let mut timeline = Timeline::new();
        timeline.play_move(0, 0).expect("legal move");

        // X moves twice in a row.
        let board = Board::new()
            .with(Position::TopLeft, Square::Occupied(Player::X))
            .with(Position::Center, Square::Occupied(Player::X));
        timeline
            .snapshots
            .push(Snapshot::after(board, Move::new(Player::X, Position::Center)));

        assert!(!AlternatingTurnInvariant::holds(&timeline));
    }
}
