//! Tic-tac-toe rules engine with a time-travel move timeline.
//!
//! # Architecture
//!
//! - **Rules**: pure functions over a 3x3 [`Board`] ([`rules::apply_move`],
//!   [`rules::evaluate`], [`rules::is_legal_move`])
//! - **Timeline**: every [`Snapshot`] of the game plus a cursor, with
//!   play / jump / reset commands
//! - **Contracts & invariants**: pre/postconditions checked around each move
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Player, TerminalResult, Timeline};
//!
//! let mut timeline = Timeline::new();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
//!     timeline.play_move(row, col)?;
//! }
//! assert_eq!(
//!     timeline.current_result(),
//!     TerminalResult::Winner { player: Player::X, line: [0, 1, 2] }
//! );
//!
//! // Rewind two moves and branch: the old future is discarded.
//! timeline.jump_to(3)?;
//! timeline.play_move(2, 2)?;
//! assert_eq!(timeline.len(), 5);
//! # Ok::<(), strictly_tictactoe::TimelineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod outcome;
mod position;
mod shared;
mod snapshot;
mod timeline;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::Move;
pub use error::{InvalidTimeline, MoveError, OutOfRange, TimelineError};
pub use outcome::{GameStatus, TerminalResult};
pub use position::Position;
pub use shared::SharedTimeline;
pub use snapshot::Snapshot;
pub use timeline::{Command, Timeline};
pub use types::{Board, Player, Square};
