//! First-class invariants for the game state.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. They can be tested on their own and the controller asserts them in
//! debug builds.

use super::GameState;
use tracing::warn;

mod ended_iff_won;
mod mark_balance;
mod winner_holds_line;

pub use ended_iff_won::EndedIffWonInvariant;
pub use mark_balance::MarkBalanceInvariant;
pub use winner_holds_line::WinnerHoldsLineInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

/// All game invariants as a composable set.
pub type GameInvariants = (
    MarkBalanceInvariant,
    EndedIffWonInvariant,
    WinnerHoldsLineInvariant,
);

/// Asserts that all game invariants hold (panics on violation in debug builds).
pub(crate) fn assert_invariants(state: &GameState) {
    if let Err(violations) = GameInvariants::check_all(state) {
        for violation in &violations {
            warn!(%violation, "Game invariant violated");
        }
        if cfg!(debug_assertions) {
            panic!("Game invariants violated: {:?}", violations);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameController, Player};

    #[test]
    fn test_invariant_set_holds_for_fresh_game() {
        assert!(GameInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_win() {
        let mut game = GameController::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            game.select_cell(row, col);
        }
        assert!(game.session().ended());
        assert!(GameInvariants::check_all(game.state()).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut state = GameState::new();
        // Two O marks and no X mark is unreachable by legal play.
        state.board.set(0, 0, Player::O);
        state.board.set(0, 1, Player::O);

        let violations = GameInvariants::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].description,
            MarkBalanceInvariant::description()
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (MarkBalanceInvariant, EndedIffWonInvariant);
        assert!(TwoInvariants::check_all(&GameState::new()).is_ok());
    }
}
