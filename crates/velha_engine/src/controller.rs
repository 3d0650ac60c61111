//! Game controller: owns one game and tells subscribers when it changes.

use super::invariants::assert_invariants;
use super::rules::{check_winner, is_draw};
use super::{Board, GameState, GameStatus, Player, Position, Session};
use tracing::{debug, info, instrument};

/// Change notification delivered to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    /// The board was cleared and X moves first.
    Reset,
    /// A mark was placed.
    MarkPlaced {
        /// Cell that was marked.
        position: Position,
        /// Player who marked it.
        player: Player,
    },
    /// The last move completed a line.
    Won {
        /// Player holding the line.
        winner: Player,
    },
    /// The last empty cell was filled without completing a line.
    Drawn,
}

/// Handle returned by [`GameController::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&GameEvent, &GameState)>;

/// Tic-tac-toe game controller.
///
/// Owns the board and session of exactly one game. The presentation layer
/// reads state through [`board`](Self::board), [`session`](Self::session)
/// and [`status`](Self::status), writes through [`reset`](Self::reset) and
/// [`select_cell`](Self::select_cell), and learns about changes by
/// subscribing. Listeners run synchronously, before the call that caused
/// the change returns.
pub struct GameController {
    state: GameState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl GameController {
    /// Creates a controller with a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Starts a new game. Same as [`reset`](Self::reset).
    pub fn start(&mut self) {
        self.reset();
    }

    /// Abandons the current game and starts over with X to move.
    ///
    /// Always succeeds, including mid-game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state.board.reset();
        self.state.session = Session::new();
        info!("Game reset");
        self.notify(GameEvent::Reset);
    }

    /// Marks `(row, col)` for the current player.
    ///
    /// Does nothing and returns `false` if the game has ended or the cell is
    /// occupied. Otherwise places the mark, runs win detection, hands the
    /// turn to the opponent unless the move won, and returns `true`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside 0-2.
    #[track_caller]
    pub fn select_cell(&mut self, row: usize, col: usize) -> bool {
        self.select(Position::new(row, col))
    }

    /// Marks `pos` for the current player. See [`select_cell`](Self::select_cell).
    #[instrument(skip(self), fields(position = %pos, player = %self.state.session.current_player()))]
    pub fn select(&mut self, pos: Position) -> bool {
        if self.state.session.ended() {
            debug!("Game already over, ignoring move");
            return false;
        }

        let player = self.state.session.current_player();
        if !self.state.board.place(pos, player) {
            debug!("Cell occupied, ignoring move");
            return false;
        }

        let winner = check_winner(&self.state.board);
        match winner {
            Some(winner) => self.state.session.finish(winner),
            None => self.state.session.advance_turn(),
        }
        assert_invariants(&self.state);
        debug!("Mark placed");

        self.notify(GameEvent::MarkPlaced {
            position: pos,
            player,
        });
        if let Some(winner) = winner {
            info!(%winner, "Game won");
            self.notify(GameEvent::Won { winner });
        } else if is_draw(&self.state.board) {
            info!("Board full with no winner");
            self.notify(GameEvent::Drawn);
        }

        true
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    /// Returns the session.
    pub fn session(&self) -> &Session {
        &self.state.session
    }

    /// Returns board and session together.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Derives the status shown to players.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Registers a listener called after every state change.
    ///
    /// Rejected moves do not notify.
    #[instrument(skip(self, listener))]
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&GameEvent, &GameState) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        debug!(?id, "Listener subscribed");
        id
    }

    /// Removes a listener. Returns whether it was registered.
    #[instrument(skip(self))]
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Number of registered listeners.
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&mut self, event: GameEvent) {
        for (_, listener) in &mut self.listeners {
            listener(&event, &self.state);
        }
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameController")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
