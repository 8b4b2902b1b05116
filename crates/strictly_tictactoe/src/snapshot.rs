//! One recorded board state in a timeline.

use super::{Board, Move, Player, TerminalResult, rules};
use serde::{Deserialize, Serialize};

/// A fully materialized board plus the player whose turn follows it.
///
/// Snapshots are created by the timeline and never mutated afterwards.
/// Each owns its board outright.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    to_move: Player,
    last_move: Option<Move>,
}

impl Snapshot {
    /// The empty starting position with X to move.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            last_move: None,
        }
    }

    pub(crate) fn after(board: Board, mov: Move) -> Self {
        Self {
            board,
            to_move: mov.player.opponent(),
            last_move: Some(mov),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// The move that produced this snapshot; `None` for the initial one.
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Evaluates the snapshot's board.
    pub fn result(&self) -> TerminalResult {
        rules::evaluate(&self.board)
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::initial()
    }
}
