//! The 3x3 grid.

use super::position::Position;
use super::types::{Cell, Glyphs, Player};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Number of rows and columns.
pub const SIZE: usize = 3;

/// 3x3 board of cells, indexed by (row, column).
///
/// The shape is fixed. A cell only ever moves from [`Cell::Empty`] to
/// [`Cell::Occupied`]: [`Board::set`] refuses to overwrite a mark, and only
/// [`Board::reset`] clears the grid.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; SIZE]; SIZE];
    }

    /// Returns the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside 0-2.
    #[track_caller]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.at(Position::new(row, col))
    }

    /// Returns the cell at `pos`.
    pub fn at(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    /// Marks `(row, col)` for `player` if the cell is empty.
    ///
    /// Returns whether the board changed. An occupied cell is left as is.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside 0-2.
    #[track_caller]
    pub fn set(&mut self, row: usize, col: usize, player: Player) -> bool {
        self.place(Position::new(row, col), player)
    }

    /// Marks `pos` for `player` if the cell is empty.
    pub fn place(&mut self, pos: Position, player: Player) -> bool {
        let cell = &mut self.cells[pos.row()][pos.col()];
        if !cell.is_empty() {
            trace!(position = %pos, occupant = ?cell, "Cell already occupied");
            return false;
        }
        *cell = Cell::Occupied(player);
        true
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.at(pos).is_empty()
    }

    /// Returns true when no empty cell is left.
    pub fn is_full(&self) -> bool {
        self.cells().all(|(_, cell)| !cell.is_empty())
    }

    /// Positions still open for a mark, in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        self.cells()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Number of marks `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.cells()
            .filter(|(_, cell)| *cell == Cell::Occupied(player))
            .count()
    }

    /// Iterates every cell with its position, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        Position::ALL.into_iter().map(|pos| (pos, self.at(pos)))
    }

    /// Formats the board as plain text, numbering empty cells 1-9.
    pub fn display(&self, glyphs: &Glyphs) -> String {
        let mut result = String::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let symbol = match cell {
                    Cell::Empty => (row * SIZE + col + 1).to_string(),
                    Cell::Occupied(player) => glyphs.player(*player).to_string(),
                };
                result.push_str(&symbol);
                if col < SIZE - 1 {
                    result.push('|');
                }
            }
            if row < SIZE - 1 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.cells().all(|(_, cell)| cell == Cell::Empty));
        assert_eq!(board.empty_positions().len(), 9);
    }

    #[test]
    fn test_set_marks_empty_cell() {
        let mut board = Board::new();
        assert!(board.set(1, 2, Player::X));
        assert_eq!(board.get(1, 2), Cell::Occupied(Player::X));
        assert_eq!(board.count(Player::X), 1);
    }

    #[test]
    fn test_set_refuses_occupied_cell() {
        let mut board = Board::new();
        assert!(board.set(0, 0, Player::X));
        assert!(!board.set(0, 0, Player::O));
        assert_eq!(board.get(0, 0), Cell::Occupied(Player::X));
        assert_eq!(board.count(Player::O), 0);
    }

    #[test]
    fn test_reset_clears_board() {
        let mut board = Board::new();
        board.set(0, 0, Player::X);
        board.set(2, 2, Player::O);
        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for (i, pos) in Position::ALL.into_iter().enumerate() {
            assert!(!board.is_full());
            let player = if i % 2 == 0 { Player::X } else { Player::O };
            board.place(pos, player);
        }
        assert!(board.is_full());
        assert!(board.empty_positions().is_empty());
    }

    #[test]
    #[should_panic]
    fn test_get_out_of_range_panics() {
        let board = Board::new();
        let _ = board.get(3, 0);
    }

    #[test]
    #[should_panic]
    fn test_set_out_of_range_panics() {
        let mut board = Board::new();
        board.set(0, 3, Player::X);
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.set(0, 0, Player::X);
        board.set(1, 1, Player::O);
        let text = board.display(&Glyphs::new("X", "O"));
        assert_eq!(text, "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }
}
