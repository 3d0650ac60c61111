//! Turn and outcome bookkeeping.

use super::board::Board;
use super::rules::is_draw;
use super::types::Player;
use serde::{Deserialize, Serialize};

/// Turn and outcome metadata for one game.
///
/// `ended` is set exactly when a win is detected, and `winner` is only ever
/// set together with it. While the game runs, `current_player` alternates on
/// every accepted move, starting with X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Session {
    current_player: Player,
    winner: Option<Player>,
    ended: bool,
}

impl Session {
    /// Creates the session for a fresh game: X to move, no winner.
    pub fn new() -> Self {
        Self {
            current_player: Player::X,
            winner: None,
            ended: false,
        }
    }

    /// Player whose turn it is. After a win this is the winner.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Winner of the game, if any.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// True once a win has been detected.
    pub fn ended(&self) -> bool {
        self.ended
    }

    pub(crate) fn advance_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    pub(crate) fn finish(&mut self, winner: Player) {
        self.winner = Some(winner);
        self.ended = true;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Current status of the game as shown to players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Game is ongoing; the player is to move.
    #[display("{}'s turn", _0)]
    InProgress(Player),
    /// Game ended in a win.
    #[display("{} wins", _0)]
    Won(Player),
    /// Board is full with no winner.
    #[display("Draw")]
    Draw,
}

/// Board and session of one game, owned together by the controller.
///
/// Only the controller builds one, so it serializes but never deserializes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) session: Session,
}

impl GameState {
    /// Creates the state of a fresh game.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Derives the status shown to players.
    ///
    /// A full board without a winner is reported as [`GameStatus::Draw`]
    /// even though the session itself never records a draw.
    pub fn status(&self) -> GameStatus {
        match self.session.winner() {
            Some(winner) if self.session.ended() => GameStatus::Won(winner),
            _ if is_draw(&self.board) => GameStatus::Draw,
            _ => GameStatus::InProgress(self.session.current_player()),
        }
    }
}
