//! A recorded winner must own a complete line.

use super::super::{GameState, check_winner};
use super::Invariant;

/// Invariant: the recorded winner matches the board.
///
/// If the session names a winner, that player holds a complete line. If it
/// does not, no complete line exists.
pub struct WinnerHoldsLineInvariant;

impl Invariant<GameState> for WinnerHoldsLineInvariant {
    fn holds(state: &GameState) -> bool {
        state.session().winner() == check_winner(state.board())
    }

    fn description() -> &'static str {
        "Recorded winner holds a complete line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_fresh_game_holds() {
        assert!(WinnerHoldsLineInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_unrecorded_line_violates() {
        let mut state = GameState::new();
        for col in 0..3 {
            state.board.set(0, col, Player::X);
        }
        assert!(!WinnerHoldsLineInvariant::holds(&state));
    }

    #[test]
    fn test_winner_without_line_violates() {
        let mut state = GameState::new();
        state.session.finish(Player::O);
        assert!(!WinnerHoldsLineInvariant::holds(&state));
    }
}
