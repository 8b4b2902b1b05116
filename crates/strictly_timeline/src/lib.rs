//! Strictly Timeline - tic-tac-toe with a navigable move history
//!
//! The game rules and the timeline live in [`strictly_tictactoe`]; this
//! crate is the presentation layer around them.
//!
//! # Architecture
//!
//! - **View**: status text, reset label, move list and win highlight,
//!   all derived from a timeline on demand
//! - **TUI**: ratatui board and history panes driven by keys and clicks
//! - **Script**: headless replays of `row,col` move lists
//! - **Config / logging**: TOML settings and tracing setup

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod logging;
pub mod script;
pub mod tui;
pub mod view;

pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError, NamedColor, ThemeConfig};
pub use script::ScriptError;
pub use view::HistoryEntry;
