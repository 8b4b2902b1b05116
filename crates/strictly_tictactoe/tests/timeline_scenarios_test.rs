//! End-to-end scenarios for the timeline.

use strictly_tictactoe::invariants::{CursorInRangeInvariant, HistoryConsistentInvariant, Invariant};
use strictly_tictactoe::{
    GameStatus, Move, MoveError, OutOfRange, Player, Position, Snapshot, TerminalResult, Timeline,
    TimelineError,
};

fn replay(moves: &[(usize, usize)]) -> Timeline {
    let mut timeline = Timeline::new();
    for &(row, col) in moves {
        timeline.play_move(row, col).expect("Valid move");
    }
    timeline
}

const X_WINS_TOP_ROW: [(usize, usize); 5] = [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)];

const DRAWN_GAME: [(usize, usize); 9] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 1),
    (1, 0),
    (1, 2),
    (2, 1),
    (2, 0),
    (2, 2),
];

#[test]
fn test_win_scenario() {
    let timeline = replay(&X_WINS_TOP_ROW);
    assert_eq!(
        timeline.current_result(),
        TerminalResult::Winner {
            player: Player::X,
            line: [0, 1, 2],
        }
    );
    assert_eq!(timeline.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_draw_scenario() {
    let timeline = replay(&DRAWN_GAME);
    assert_eq!(timeline.current_result(), TerminalResult::Draw);
    assert_eq!(timeline.status(), GameStatus::Drawn);
    assert_eq!(timeline.len(), 10);
}

#[test]
fn test_illegal_repeat_move() {
    let mut timeline = replay(&[(0, 0)]);
    let before = timeline.clone();

    let result = timeline.play_move(0, 0);
    assert!(matches!(result, Err(MoveError::SquareOccupied(Position::TopLeft))));
    assert_eq!(timeline, before);
}

#[test]
fn test_moves_rejected_after_win() {
    let mut timeline = replay(&X_WINS_TOP_ROW);
    let before = timeline.clone();

    for pos in Position::valid_moves(timeline.current_snapshot().board()) {
        let result = timeline.play_move(pos.row(), pos.col());
        assert!(matches!(
            result,
            Err(MoveError::GameOver(GameStatus::Won(Player::X)))
        ));
    }
    assert_eq!(timeline, before);
}

#[test]
fn test_moves_rejected_after_draw() {
    let mut timeline = replay(&DRAWN_GAME);
    assert!(matches!(
        timeline.play_move(1, 1),
        Err(MoveError::GameOver(GameStatus::Drawn))
    ));
}

#[test]
fn test_out_of_range_jump() {
    let mut timeline = replay(&[(0, 0), (1, 1)]);
    assert_eq!(timeline.len(), 3);
    assert_eq!(timeline.jump_to(5), Err(OutOfRange { index: 5, len: 3 }));
    assert_eq!(timeline.cursor(), 2);
}

#[test]
fn test_branch_truncation() {
    // [S0, S1, S2, S3] with the cursor on S1.
    let mut timeline = replay(&[(0, 0), (1, 1), (2, 2)]);
    let kept = timeline.snapshots()[..2].to_vec();
    timeline.jump_to(1).expect("step exists");

    timeline.play_move(0, 2).expect("Valid move");

    assert_eq!(timeline.len(), 3);
    assert_eq!(timeline.cursor(), 2);
    assert_eq!(&timeline.snapshots()[..2], kept.as_slice());
    assert_eq!(
        timeline.snapshots()[2].last_move(),
        Some(Move::new(Player::O, Position::TopRight))
    );
}

#[test]
fn test_jump_is_idempotent() {
    let mut timeline = replay(&[(0, 0), (1, 1), (2, 2)]);
    timeline.jump_to(2).expect("step exists");
    let once = timeline.clone();
    timeline.jump_to(2).expect("step exists");
    assert_eq!(timeline, once);
}

#[test]
fn test_jump_does_not_alter_history() {
    let mut timeline = replay(&X_WINS_TOP_ROW);
    let snapshots = timeline.snapshots().to_vec();
    for step in (0..timeline.len()).rev() {
        timeline.jump_to(step).expect("step exists");
        assert_eq!(timeline.current_snapshot().board().filled(), step);
    }
    assert_eq!(timeline.snapshots(), snapshots.as_slice());
}

#[test]
fn test_current_result_is_stable() {
    let timeline = replay(&X_WINS_TOP_ROW);
    assert_eq!(timeline.current_result(), timeline.current_result());
}

#[test]
fn test_reset_yields_fresh_timeline() {
    let mut timeline = replay(&DRAWN_GAME);
    timeline.jump_to(4).expect("step exists");
    timeline.reset();
    assert_eq!(timeline.len(), 1);
    assert_eq!(timeline.cursor(), 0);
    assert_eq!(timeline, Timeline::new());
    assert_eq!(timeline.current_snapshot().to_move(), Player::X);
}

#[test]
fn test_errors_convert_into_timeline_error() {
    let mut timeline = replay(&[(1, 1)]);
    let err: TimelineError = timeline.play_move(1, 1).map(|_| ()).unwrap_err().into();
    assert_eq!(err.to_string(), "Illegal move: Square Center is already occupied");

    let err: TimelineError = timeline.jump_to(7).unwrap_err().into();
    assert_eq!(
        err.to_string(),
        "History step 7 is out of range (timeline has 2 snapshots)"
    );
}

#[test]
fn test_timeline_json_round_trip() {
    let mut timeline = replay(&[(0, 0), (1, 1), (2, 2)]);
    timeline.jump_to(1).expect("step exists");

    let json = serde_json::to_string(&timeline).expect("serializable");
    let restored: Timeline = serde_json::from_str(&json).expect("deserializable");
    assert_eq!(restored, timeline);
}

fn load(snapshots: &[Snapshot], cursor: usize) -> Result<Timeline, serde_json::Error> {
    let json = serde_json::json!({ "snapshots": snapshots, "cursor": cursor });
    serde_json::from_value(json)
}

#[test]
fn test_loading_rejects_dangling_cursor() {
    let err = load(&[Snapshot::initial()], 7).unwrap_err();
    assert!(err.to_string().contains(CursorInRangeInvariant::DESCRIPTION));
}

#[test]
fn test_loading_rejects_empty_history() {
    let err = load(&[], 0).unwrap_err();
    assert!(err.to_string().starts_with("Invalid timeline: "));
    assert!(err.to_string().contains(CursorInRangeInvariant::DESCRIPTION));
}

#[test]
fn test_loading_rejects_prefilled_start() {
    // Snapshot 0 already holds an X.
    let game = replay(&[(0, 0)]);
    let err = load(&game.snapshots()[1..], 0).unwrap_err();
    assert!(err.to_string().contains(HistoryConsistentInvariant::DESCRIPTION));
}

#[test]
fn test_loading_rejects_reordered_history() {
    let game = replay(&[(0, 0), (1, 1), (2, 2)]);
    let mut snapshots = game.snapshots().to_vec();
    snapshots.swap(1, 2);
    assert!(load(&snapshots, 3).is_err());
    assert!(load(game.snapshots(), 3).is_ok());
}

#[test]
fn test_loaded_timeline_plays_on() {
    let game = replay(&[(0, 0), (1, 1)]);
    let mut loaded = load(game.snapshots(), 1).expect("reachable timeline");
    assert_eq!(loaded.current_snapshot().to_move(), Player::O);

    loaded.play_move(2, 2).expect("Valid move");
    assert_eq!(loaded.len(), 3);
    assert_eq!(loaded.cursor(), 2);
}
