//! Mark balance invariant: X has as many marks as O, or one more.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// X moves first, so X has either the same number of marks as O or exactly
/// one more. While the game runs, the player to move is X when the counts
/// are equal and O otherwise.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Player::X);
        let o = state.board().count(Player::O);

        if x != o && x != o + 1 {
            return false;
        }

        if state.session().ended() {
            return true;
        }

        let expected = if x == o { Player::X } else { Player::O };
        state.session().current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameController;

    #[test]
    fn test_fresh_game_holds() {
        assert!(MarkBalanceInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_holds_through_a_game() {
        let mut game = GameController::new();
        for pos in [(1, 1), (0, 0), (2, 2), (0, 2), (0, 1)] {
            game.select_cell(pos.0, pos.1);
            assert!(MarkBalanceInvariant::holds(game.state()));
        }
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut state = GameState::new();
        state.board.set(0, 0, Player::X);
        state.board.set(1, 1, Player::X);
        assert!(!MarkBalanceInvariant::holds(&state));
    }

    #[test]
    fn test_wrong_turn_violates() {
        let mut state = GameState::new();
        state.board.set(0, 0, Player::X);
        // Session still says X to move.
        assert!(!MarkBalanceInvariant::holds(&state));
    }
}
