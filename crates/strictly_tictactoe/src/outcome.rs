//! Terminal results and the derived game status.
//!
//! Neither type is ever stored in a timeline. Both are recomputed from a
//! board on demand, so there is no cached state to invalidate.

use super::Player;
use serde::{Deserialize, Serialize};

/// Win/draw/no-result classification of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerminalResult {
    /// Nobody has won and empty squares remain.
    NoResult,
    /// A player completed a line.
    Winner {
        /// The player owning the line.
        player: Player,
        /// The three cell indices of the line, row-major (0-8).
        line: [usize; 3],
    },
    /// All nine squares are filled without a line.
    Draw,
}

impl TerminalResult {
    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<[usize; 3]> {
        match self {
            TerminalResult::Winner { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Returns true once no further moves are accepted.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TerminalResult::NoResult)
    }

    /// Maps the result onto the game state machine.
    pub fn status(&self) -> GameStatus {
        match self {
            TerminalResult::NoResult => GameStatus::InProgress,
            TerminalResult::Winner { player, .. } => GameStatus::Won(*player),
            TerminalResult::Draw => GameStatus::Drawn,
        }
    }
}

/// State of the game as observed at the timeline cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Moves are accepted.
    #[display("in progress")]
    InProgress,
    /// The given player completed a line.
    #[display("{_0} won")]
    Won(Player),
    /// The board filled up without a line.
    #[display("drawn")]
    Drawn,
}

impl GameStatus {
    /// Returns true if the game is over.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}
