//! Application state for the terminal game.

use derive_getters::Getters;
use ratatui::layout::Rect;
use std::cell::Cell as Flag;
use std::rc::Rc;
use tracing::{debug, instrument};
use velha_engine::{GameController, GameStatus, Glyphs, Position, winning_lines};

use super::input::Action;
use crate::settings::Settings;

/// State of the terminal game: the controller plus what only the screen needs.
#[derive(Debug, Getters)]
pub struct App {
    /// The game being played.
    controller: GameController,
    /// Cell highlighted for keyboard selection.
    cursor: Position,
    /// Title shown in the top bar.
    title: String,
    /// Marks drawn for each player.
    glyphs: Glyphs,
    /// Screen area of each cell from the last draw, in row-major order.
    cell_areas: [Rect; 9],
    #[getter(skip)]
    dirty: Rc<Flag<bool>>,
    #[getter(skip)]
    quit: bool,
}

impl App {
    /// Creates the app and subscribes it to game changes.
    #[instrument(skip(settings))]
    pub fn new(settings: &Settings) -> Self {
        let mut controller = GameController::new();
        let dirty = Rc::new(Flag::new(true));

        let flag = Rc::clone(&dirty);
        controller.subscribe(move |event, state| {
            debug!(?event, status = %state.status(), "Game changed");
            flag.set(true);
        });

        Self {
            controller,
            cursor: Position::CENTER,
            title: settings.title().clone(),
            glyphs: settings.glyphs().clone(),
            cell_areas: [Rect::default(); 9],
            dirty,
            quit: false,
        }
    }

    /// Applies a user action.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: Action) {
        match action {
            Action::Move(direction) => {
                self.cursor = self.cursor.step(direction);
                self.mark_dirty();
            }
            Action::SelectCursor => {
                self.controller.select(self.cursor);
            }
            Action::Select(pos) => {
                self.cursor = pos;
                self.mark_dirty();
                self.controller.select(pos);
            }
            Action::Restart => {
                self.controller.reset();
            }
            Action::Quit => {
                self.quit = true;
            }
        }
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Requests a redraw.
    pub fn mark_dirty(&self) {
        self.dirty.set(true);
    }

    /// Returns whether a redraw is due and clears the request.
    pub fn take_dirty(&self) -> bool {
        self.dirty.replace(false)
    }

    /// Status line text.
    pub fn status_line(&self) -> String {
        match self.controller.status() {
            GameStatus::InProgress(player) => {
                format!("Jogador {} está na vez!", self.glyphs.player(player))
            }
            GameStatus::Won(player) => {
                format!("Jogador {} é o vencedor! Parabéns!", self.glyphs.player(player))
            }
            GameStatus::Draw => "Deu velha! Tecle 'r' para jogar de novo.".to_string(),
        }
    }

    /// Cells on a completed line, for highlighting.
    pub fn winning_positions(&self) -> Vec<Position> {
        winning_lines(self.controller.board())
            .into_iter()
            .flat_map(|(line, _)| line.positions())
            .collect()
    }

    /// Records where each cell was drawn, for mouse hit testing.
    pub fn set_cell_areas(&mut self, areas: [Rect; 9]) {
        self.cell_areas = areas;
    }

    /// Finds the cell drawn at terminal coordinates `(column, row)`.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        self.cell_areas
            .iter()
            .position(|area| {
                column >= area.x
                    && column < area.x + area.width
                    && row >= area.y
                    && row < area.y + area.height
            })
            .and_then(Position::from_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use velha_engine::{Direction, Player};

    fn app() -> App {
        App::new(&Settings::default())
    }

    #[test]
    fn test_starts_dirty_then_clean() {
        let app = app();
        assert!(app.take_dirty());
        assert!(!app.take_dirty());
    }

    #[test]
    fn test_move_redraws_via_subscription() {
        let mut app = app();
        app.take_dirty();
        app.handle(Action::SelectCursor);
        assert!(app.take_dirty());
        assert_eq!(
            app.controller().board().at(Position::CENTER).player(),
            Some(Player::X)
        );
    }

    #[test]
    fn test_rejected_move_does_not_redraw() {
        let mut app = app();
        app.handle(Action::SelectCursor);
        app.take_dirty();
        app.handle(Action::SelectCursor);
        assert!(!app.take_dirty());
    }

    #[test]
    fn test_cursor_moves() {
        let mut app = app();
        app.handle(Action::Move(Direction::Up));
        app.handle(Action::Move(Direction::Left));
        assert_eq!(app.cursor(), &Position::new(0, 0));
    }

    #[test]
    fn test_status_lines() {
        let mut app = app();
        assert_eq!(app.status_line(), "Jogador ☓ está na vez!");
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            app.handle(Action::Select(Position::new(row, col)));
        }
        assert_eq!(app.status_line(), "Jogador ☓ é o vencedor! Parabéns!");
        assert_eq!(app.winning_positions().len(), 3);

        app.handle(Action::Restart);
        assert_eq!(app.status_line(), "Jogador ☓ está na vez!");
        assert!(app.winning_positions().is_empty());
    }

    #[test]
    fn test_draw_status_line() {
        let mut app = app();
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            app.handle(Action::Select(Position::ALL[index]));
        }
        assert_eq!(app.status_line(), "Deu velha! Tecle 'r' para jogar de novo.");
    }

    #[test]
    fn test_cell_at() {
        let mut app = app();
        let mut areas = [Rect::default(); 9];
        for (i, area) in areas.iter_mut().enumerate() {
            let (row, col) = (i as u16 / 3, i as u16 % 3);
            *area = Rect::new(col * 10, row * 4, 9, 3);
        }
        app.set_cell_areas(areas);

        assert_eq!(app.cell_at(0, 0), Some(Position::new(0, 0)));
        assert_eq!(app.cell_at(15, 5), Some(Position::CENTER));
        assert_eq!(app.cell_at(9, 0), None);
        assert_eq!(app.cell_at(100, 100), None);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        assert!(!app.should_quit());
        app.handle(Action::Quit);
        assert!(app.should_quit());
    }
}
