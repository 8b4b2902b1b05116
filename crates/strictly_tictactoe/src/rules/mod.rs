//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Nothing here holds state: every
//! function takes a board by reference and returns a new value.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WINNING_LINES, check_winner, winning_line};

use super::{Board, MoveError, Player, Position, Square, TerminalResult};
use tracing::{debug, instrument};

/// Classifies a board as won, drawn or undecided.
///
/// Lines are checked in [`WINNING_LINES`] order and the first complete one
/// is reported, so the result is deterministic even for boards that could
/// not arise in play.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> TerminalResult {
    if let Some((player, line)) = winning_line(board) {
        return TerminalResult::Winner {
            player,
            line: line.map(Position::to_index),
        };
    }

    if is_draw(board) {
        TerminalResult::Draw
    } else {
        TerminalResult::NoResult
    }
}

/// True iff (row, col) is on the board and the square there is empty.
pub fn is_legal_move(board: &Board, row: usize, col: usize) -> bool {
    Position::from_row_col(row, col).is_some_and(|pos| board.is_empty(pos))
}

/// Resolves (row, col) to a position that `player` may take on `board`.
///
/// # Errors
///
/// - `MoveError::GameOver` if the board already has a terminal result
/// - `MoveError::OutOfBounds` if either coordinate is outside `0..3`
/// - `MoveError::SquareOccupied` if the square is taken
pub fn check_move(board: &Board, row: usize, col: usize) -> Result<Position, MoveError> {
    let result = evaluate(board);
    if result.is_terminal() {
        return Err(MoveError::GameOver(result.status()));
    }

    let pos = Position::from_row_col(row, col).ok_or(MoveError::OutOfBounds { row, col })?;

    if !board.is_empty(pos) {
        return Err(MoveError::SquareOccupied(pos));
    }

    Ok(pos)
}

/// Returns a copy of `board` with `player` placed at (row, col).
///
/// The input board is never modified. Turn order is the caller's concern.
///
/// # Errors
///
/// Fails with the same conditions as [`check_move`].
#[instrument(skip(board))]
pub fn apply_move(board: &Board, row: usize, col: usize, player: Player) -> Result<Board, MoveError> {
    let pos = check_move(board, row, col)?;
    debug!(position = %pos, "Placing mark");
    Ok(board.with(pos, Square::Occupied(player)))
}
