//! Keyboard and mouse mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use velha_engine::{Direction, Position};

/// Something the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor one cell.
    Move(Direction),
    /// Mark the cell under the cursor.
    SelectCursor,
    /// Mark a specific cell.
    Select(Position),
    /// Start a new game.
    Restart,
    /// Leave the game.
    Quit,
}

/// Maps a key press to an action.
///
/// Arrows move, Enter/Space select, digits 1-9 pick a cell in keypad order
/// (1 is top-left), `r` restarts, `q`/Esc quits.
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Up => Some(Action::Move(Direction::Up)),
        KeyCode::Down => Some(Action::Move(Direction::Down)),
        KeyCode::Left => Some(Action::Move(Direction::Left)),
        KeyCode::Right => Some(Action::Move(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::SelectCursor),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Restart),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|digit| (digit as usize).checked_sub(1))
            .and_then(Position::from_index)
            .map(Action::Select),
        _ => None,
    }
}

/// Maps a left click to the cell under it, if any.
pub fn action_for_mouse(
    mouse: MouseEvent,
    cell_at: impl Fn(u16, u16) -> Option<Position>,
) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            cell_at(mouse.column, mouse.row).map(Action::Select)
        }
        _ => None,
    }
}
