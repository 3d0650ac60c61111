//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! the controller so they can be checked on any board, including ones built
//! by hand in tests.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{Line, check_winner, winning_lines};
