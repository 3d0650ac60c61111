//! Jogo da Velha - two-player tic-tac-toe in the terminal.
//!
//! The game rules live in [`velha_engine`]. This crate adds the outer
//! surfaces around it:
//!
//! - **Settings**: TOML file with title, glyphs and logging options
//! - **CLI**: `play` (interactive) and `replay` (headless, JSON or text)
//! - **TUI**: ratatui front-end driven by the engine's change notifications

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod logging;
pub mod replay;
pub mod settings;
pub mod tui;

pub use cli::{Cli, Command};
pub use replay::{ReplayReport, replay};
pub use settings::{ConfigError, LoggingSettings, Settings};
