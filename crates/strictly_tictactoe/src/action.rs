//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. Every snapshot after the
//! first records the move that produced it.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Zero-based row of the move.
    pub fn row(&self) -> usize {
        self.position.row()
    }

    /// Zero-based column of the move.
    pub fn col(&self) -> usize {
        self.position.col()
    }
}

/// Formats as `X (row, col)` with one-based coordinates.
impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.player, self.row() + 1, self.col() + 1)
    }
}
