//! Command-line interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use velha_engine::Position;

/// Jogo da Velha - two-player tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "jogo_da_velha")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Command to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal
    Play,

    /// Apply a sequence of moves and print the resulting game
    Replay {
        /// Moves as `row,col`, a cell number 1-9, or a name like `center`
        #[arg(required = true)]
        moves: Vec<Position>,

        /// Print a text board instead of JSON
        #[arg(long)]
        text: bool,
    },
}

impl Cli {
    /// Command to run, `play` when none was given.
    pub fn command_or_play(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play)
    }
}
