//! Strictly Timeline - Unified CLI

use anyhow::{Context, Result};
use clap::Parser;
use strictly_timeline::{AppConfig, Cli, Command, logging, script, tui, view};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command() {
        Command::Tui => {
            logging::init_file_logging(&config)?;
            tui::run_tui(&config)
        }
        Command::Play { moves, jump, json } => {
            logging::init_stderr_logging(&config);
            run_play(&moves, jump, json)
        }
        Command::ShowConfig => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

/// Replays a scripted game and prints the outcome.
#[instrument(skip(moves), fields(moves = %moves))]
fn run_play(moves: &str, jump: Option<usize>, json: bool) -> Result<()> {
    let moves = script::parse_moves(moves)?;
    let timeline = script::replay(&script::commands(&moves, jump))?;

    info!(status = %timeline.status(), "Replay complete");

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&timeline).context("Failed to serialize timeline")?
        );
    } else {
        print!("{}", view::render_plain(&timeline));
    }

    Ok(())
}
