//! A game ends exactly when somebody wins.

use super::super::GameState;
use super::Invariant;

/// Invariant: `ended` is set if and only if a winner is recorded.
pub struct EndedIffWonInvariant;

impl Invariant<GameState> for EndedIffWonInvariant {
    fn holds(state: &GameState) -> bool {
        state.session().ended() == state.session().winner().is_some()
    }

    fn description() -> &'static str {
        "Game is ended exactly when a winner is recorded"
    }
}
