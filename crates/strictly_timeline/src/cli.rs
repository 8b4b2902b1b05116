//! Command-line interface for strictly_timeline.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Timeline - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "strictly_timeline")]
#[command(about = "Two-player tic-tac-toe with a navigable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to the terminal UI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Tui,

    /// Replay a scripted game and print the result
    Play {
        /// Moves as zero-based "row,col" pairs separated by spaces, e.g. "0,0 1,1 0,1"
        #[arg(short, long)]
        moves: String,

        /// History step to jump to after replaying
        #[arg(short, long)]
        jump: Option<usize>,

        /// Print the whole timeline as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as TOML
    ShowConfig,
}

impl Cli {
    /// The command to run, falling back to the terminal UI.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Tui)
    }
}
