//! Headless replay of a move sequence.

use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, info, instrument};
use velha_engine::{GameController, GameState, GameStatus, Glyphs, Position};

/// Outcome of replaying a sequence of moves on a fresh game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct ReplayReport {
    /// Final status.
    status: GameStatus,
    /// Final board and session.
    state: GameState,
    /// Moves that changed the game.
    accepted: Vec<Position>,
    /// Moves ignored because the cell was taken or the game was over.
    ignored: Vec<Position>,
}

impl ReplayReport {
    /// Renders the report as a text board followed by the status line.
    pub fn to_text(&self, glyphs: &Glyphs) -> String {
        let mut text = self.state.board().display(glyphs);
        text.push_str("\n\n");
        text.push_str(&self.status.to_string());
        if !self.ignored.is_empty() {
            let ignored: Vec<String> = self.ignored.iter().map(ToString::to_string).collect();
            text.push_str(&format!("\nIgnored: {}", ignored.join(", ")));
        }
        text
    }
}

/// Plays `moves` in order on a fresh game.
///
/// Moves the controller rejects are recorded, not treated as errors.
#[instrument(skip(moves), fields(moves = moves.len()))]
pub fn replay(moves: &[Position]) -> ReplayReport {
    let mut game = GameController::new();
    let mut accepted = Vec::new();
    let mut ignored = Vec::new();

    for &pos in moves {
        if game.select(pos) {
            accepted.push(pos);
        } else {
            debug!(position = %pos, "Move ignored");
            ignored.push(pos);
        }
    }

    let status = game.status();
    info!(%status, accepted = accepted.len(), ignored = ignored.len(), "Replay finished");
    ReplayReport {
        status,
        state: game.state().clone(),
        accepted,
        ignored,
    }
}
