//! Jogo da Velha - command-line entry point.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use jogo_da_velha::{Cli, Command, Settings, logging, replay, tui};
use tracing::{info, instrument};
use velha_engine::Position;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;

    match cli.command_or_play() {
        Command::Play => tui::run(&settings),
        Command::Replay { moves, text } => run_replay(&settings, &moves, text),
    }
}

/// Replays moves headlessly and prints the result to stdout.
#[instrument(skip_all, fields(moves = moves.len(), text = text))]
fn run_replay(settings: &Settings, moves: &[Position], text: bool) -> Result<()> {
    logging::init_stderr(settings.logging());

    info!("Replaying moves");
    let report = replay(moves);

    if text {
        println!("{}", report.to_text(settings.glyphs()));
    } else {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", json);
    }

    Ok(())
}
