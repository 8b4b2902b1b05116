//! Scripted replays for the headless `play` command.

use derive_more::{Display, Error};
use strictly_tictactoe::{Command, Timeline, TimelineError};
use tracing::{debug, info, instrument};

/// A move script that could not be parsed or replayed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ScriptError {
    /// A token was not of the form `row,col`.
    #[display("Malformed move '{token}' (expected row,col)")]
    Malformed {
        /// The offending token.
        token: String,
    },

    /// The timeline rejected a command.
    #[display("Command {step} rejected: {source}")]
    Rejected {
        /// 1-based position of the command in the script.
        step: usize,
        /// Why the timeline refused it.
        source: TimelineError,
    },
}

/// Parses `"r,c r,c ..."` into zero-based coordinates.
///
/// Tokens are separated by whitespace; surrounding parentheses are accepted
/// so `"(0,0) (1,1)"` works too.
#[instrument]
pub fn parse_moves(script: &str) -> Result<Vec<(usize, usize)>, ScriptError> {
    script
        .split_whitespace()
        .map(|token| {
            let malformed = || ScriptError::Malformed {
                token: token.to_string(),
            };
            let inner = token.trim_start_matches('(').trim_end_matches(')');
            let (row, col) = inner.split_once(',').ok_or_else(malformed)?;
            let row = row.trim().parse().map_err(|_| malformed())?;
            let col = col.trim().parse().map_err(|_| malformed())?;
            Ok((row, col))
        })
        .collect()
}

/// Builds the command list for a script: every move, then an optional jump.
pub fn commands(moves: &[(usize, usize)], jump: Option<usize>) -> Vec<Command> {
    moves
        .iter()
        .map(|&(row, col)| Command::Play { row, col })
        .chain(jump.map(Command::JumpTo))
        .collect()
}

/// Replays commands on a fresh timeline, stopping at the first rejection.
#[instrument(skip(commands), fields(count = commands.len()))]
pub fn replay(commands: &[Command]) -> Result<Timeline, ScriptError> {
    let mut timeline = Timeline::new();
    for (idx, command) in commands.iter().enumerate() {
        debug!(step = idx + 1, ?command, "Replaying command");
        timeline
            .apply(*command)
            .map_err(|source| ScriptError::Rejected {
                step: idx + 1,
                source,
            })?;
    }
    info!(snapshots = timeline.len(), cursor = timeline.cursor(), "Replay finished");
    Ok(timeline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_tictactoe::{MoveError, Position};

    #[test]
    fn test_parse_moves() {
        assert_eq!(
            parse_moves("0,0 1,1 (2,2)"),
            Ok(vec![(0, 0), (1, 1), (2, 2)])
        );
        assert_eq!(parse_moves(""), Ok(vec![]));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            parse_moves("0,0 x,1"),
            Err(ScriptError::Malformed {
                token: "x,1".to_string()
            })
        );
        assert!(parse_moves("4").is_err());
    }

    #[test]
    fn test_replay_reports_failing_step() {
        let commands = commands(&[(0, 0), (0, 0)], None);
        assert_eq!(
            replay(&commands),
            Err(ScriptError::Rejected {
                step: 2,
                source: TimelineError::IllegalMove(MoveError::SquareOccupied(Position::TopLeft)),
            })
        );
    }

    #[test]
    fn test_replay_with_jump() {
        let commands = commands(&[(0, 0), (1, 1), (2, 2)], Some(1));
        let timeline = replay(&commands).expect("valid script");
        assert_eq!(timeline.len(), 4);
        assert_eq!(timeline.cursor(), 1);
    }
}
