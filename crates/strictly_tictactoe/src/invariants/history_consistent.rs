//! History consistency invariant: replaying the recorded moves rebuilds
//! every snapshot.

use super::super::{Snapshot, Timeline, rules};
use super::Invariant;

/// Invariant: snapshot 0 is the empty board with X to move, and each later
/// snapshot's board is exactly what its recorded move produces from the
/// previous board under the rules.
///
/// Because the replay goes through [`rules::apply_move`], a history that
/// continues past a won or drawn board also fails.
pub struct HistoryConsistentInvariant;

impl Invariant<Timeline> for HistoryConsistentInvariant {
    const DESCRIPTION: &'static str = "Recorded moves replay to the recorded boards";

    fn holds(timeline: &Timeline) -> bool {
        let snapshots = timeline.snapshots();
        if snapshots.first() != Some(&Snapshot::initial()) {
            return false;
        }

        snapshots.windows(2).all(|pair| {
            let (previous, snapshot) = (&pair[0], &pair[1]);
            snapshot.last_move().is_some_and(|mov| {
                rules::apply_move(previous.board(), mov.row(), mov.col(), mov.player)
                    .is_ok_and(|board| board == *snapshot.board())
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Move, Player, Position, Square};

    #[test]
    fn test_fresh_timeline_holds() {
        assert!(HistoryConsistentInvariant::holds(&Timeline::new()));
    }

    #[test]
    fn test_full_game_holds() {
        let mut timeline = Timeline::new();
        for (row, col) in [
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ] {
            timeline.play_move(row, col).expect("legal move");
        }
        assert!(HistoryConsistentInvariant::holds(&timeline));
        assert_eq!(timeline.moves().count(), 9);
    }

    #[test]
    fn test_unrecorded_square_violates() {
        let mut timeline = Timeline::new();
        let board = Board::new()
            .with(Position::Center, Square::Occupied(Player::X))
            .with(Position::TopLeft, Square::Occupied(Player::O));
        timeline
            .snapshots
            .push(Snapshot::after(board, Move::new(Player::X, Position::Center)));
        assert!(!HistoryConsistentInvariant::holds(&timeline));
    }

    #[test]
    fn test_prefilled_start_violates() {
        let mut timeline = Timeline::new();
        timeline.snapshots[0] = Snapshot::after(
            Board::new().with(Position::TopLeft, Square::Occupied(Player::X)),
            Move::new(Player::X, Position::TopLeft),
        );
        assert!(!HistoryConsistentInvariant::holds(&timeline));
    }

    #[test]
    fn test_move_after_win_violates() {
        let mut timeline = Timeline::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            timeline.play_move(row, col).expect("legal move");
        }
        let board = timeline.snapshots[5]
            .board()
            .with(Position::BottomRight, Square::Occupied(Player::O));
        timeline
            .snapshots
            .push(Snapshot::after(board, Move::new(Player::O, Position::BottomRight)));
        assert!(!HistoryConsistentInvariant::holds(&timeline));
    }
}
