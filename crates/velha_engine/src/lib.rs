//! Game state engine for Jogo da Velha (tic-tac-toe).
//!
//! The engine is a small deterministic state machine over a fixed 3x3 grid:
//!
//! - [`Board`] holds the nine cells and refuses to overwrite an occupied one.
//! - [`Session`] records whose turn it is, the winner and whether the game ended.
//! - [`GameController`] owns both, accepts moves, runs win detection and
//!   notifies subscribers after every change.
//!
//! # Example
//!
//! ```
//! use velha_engine::{GameController, GameStatus, Player};
//!
//! let mut game = GameController::new();
//! for (row, col) in [(0, 0), (0, 1), (1, 1), (2, 0), (2, 2)] {
//!     game.select_cell(row, col);
//! }
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod controller;
mod error;
pub mod invariants;
mod position;
pub mod rules;
mod session;
mod types;

pub use board::{Board, SIZE};
pub use controller::{GameController, GameEvent, SubscriptionId};
pub use error::PositionError;
pub use invariants::{GameInvariants, Invariant, InvariantSet, InvariantViolation};
pub use position::{Direction, Position};
pub use rules::{Line, check_winner, is_draw, winning_lines};
pub use session::{GameState, GameStatus, Session};
pub use types::{Cell, Glyphs, Player};
