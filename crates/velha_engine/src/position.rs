//! Board coordinates.

use super::board::SIZE;
use super::error::PositionError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A cell address on the 3x3 board.
///
/// Rows and columns are numbered 0-2 from the top-left corner. The same
/// position can also be addressed by its row-major index (0-8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    row: usize,
    col: usize,
}

/// Unchecked wire form of [`Position`].
#[derive(Deserialize)]
struct RawPosition {
    row: usize,
    col: usize,
}

impl TryFrom<RawPosition> for Position {
    type Error = PositionError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Self::try_new(raw.row, raw.col)
    }
}

/// Direction for stepping between neighbouring cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards row 2.
    Down,
    /// Towards column 0.
    Left,
    /// Towards column 2.
    Right,
}

const LABELS: [&str; 9] = [
    "Top-left",
    "Top-center",
    "Top-right",
    "Middle-left",
    "Center",
    "Middle-right",
    "Bottom-left",
    "Bottom-center",
    "Bottom-right",
];

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::new(0, 0),
        Position::new(0, 1),
        Position::new(0, 2),
        Position::new(1, 0),
        Position::new(1, 1),
        Position::new(1, 2),
        Position::new(2, 0),
        Position::new(2, 1),
        Position::new(2, 2),
    ];

    /// The center cell.
    pub const CENTER: Position = Position::new(1, 1);

    /// Creates a position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside 0-2.
    #[track_caller]
    pub const fn new(row: usize, col: usize) -> Self {
        assert!(row < SIZE && col < SIZE, "position is outside the 3x3 board");
        Self { row, col }
    }

    /// Creates a position, rejecting out-of-range coordinates.
    #[track_caller]
    #[instrument]
    pub fn try_new(row: usize, col: usize) -> Result<Self, PositionError> {
        if row >= SIZE || col >= SIZE {
            return Err(PositionError::new(format!(
                "({}, {}) is outside the board, rows and columns run 0-2",
                row, col
            )));
        }
        Ok(Self { row, col })
    }

    /// Creates a position from its row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row, 0-2 from the top.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column, 0-2 from the left.
    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * SIZE + self.col
    }

    /// Human-readable name of the cell.
    pub fn label(self) -> &'static str {
        LABELS[self.index()]
    }

    /// Moves one cell in `direction`, staying put at the board edge.
    pub fn step(self, direction: Direction) -> Self {
        let Self { row, col } = self;
        match direction {
            Direction::Up => Self::new(row.saturating_sub(1), col),
            Direction::Down => Self::new((row + 1).min(SIZE - 1), col),
            Direction::Left => Self::new(row, col.saturating_sub(1)),
            Direction::Right => Self::new(row, (col + 1).min(SIZE - 1)),
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Parses `"row,col"`, a keypad number `"1"`-`"9"`, or a label such as
/// `"center"` or `"top-left"` (case-insensitive).
impl FromStr for Position {
    type Err = PositionError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some((row, col)) = s.split_once(',') {
            let row = row
                .trim()
                .parse::<usize>()
                .map_err(|e| PositionError::new(format!("bad row {:?}: {}", row, e)))?;
            let col = col
                .trim()
                .parse::<usize>()
                .map_err(|e| PositionError::new(format!("bad column {:?}: {}", col, e)))?;
            return Self::try_new(row, col);
        }

        if let Ok(number) = s.parse::<usize>() {
            return number
                .checked_sub(1)
                .and_then(Self::from_index)
                .ok_or_else(|| PositionError::new(format!("{} is not a cell number 1-9", number)));
        }

        Self::ALL
            .into_iter()
            .find(|pos| pos.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| PositionError::new(format!("unknown position {:?}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trips_row_major() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), i);
            assert_eq!(Position::from_index(i), Some(*pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_try_new_rejects_out_of_range() {
        assert!(Position::try_new(2, 2).is_ok());
        assert!(Position::try_new(3, 0).is_err());
        assert!(Position::try_new(0, 3).is_err());
    }

    #[test]
    #[should_panic]
    fn test_new_panics_out_of_range() {
        let _ = Position::new(0, 5);
    }

    #[test]
    fn test_step_clamps_at_edges() {
        let top_left = Position::new(0, 0);
        assert_eq!(top_left.step(Direction::Up), top_left);
        assert_eq!(top_left.step(Direction::Left), top_left);
        assert_eq!(top_left.step(Direction::Right), Position::new(0, 1));
        assert_eq!(top_left.step(Direction::Down), Position::new(1, 0));

        let bottom_right = Position::new(2, 2);
        assert_eq!(bottom_right.step(Direction::Down), bottom_right);
        assert_eq!(bottom_right.step(Direction::Right), bottom_right);
    }

    #[test]
    fn test_parse_row_col() {
        assert_eq!("1,2".parse::<Position>(), Ok(Position::new(1, 2)));
        assert_eq!(" 0 , 0 ".parse::<Position>(), Ok(Position::new(0, 0)));
        assert!("3,1".parse::<Position>().is_err());
        assert!("a,1".parse::<Position>().is_err());
    }

    #[test]
    fn test_parse_keypad_number() {
        assert_eq!("1".parse::<Position>(), Ok(Position::new(0, 0)));
        assert_eq!("5".parse::<Position>(), Ok(Position::CENTER));
        assert_eq!("9".parse::<Position>(), Ok(Position::new(2, 2)));
        assert!("0".parse::<Position>().is_err());
        assert!("10".parse::<Position>().is_err());
    }

    #[test]
    fn test_deserialize_checks_range() {
        let pos: Position = serde_json::from_str(r#"{"row":2,"col":1}"#).unwrap();
        assert_eq!(pos, Position::new(2, 1));

        let err = serde_json::from_str::<Position>(r#"{"row":7,"col":4}"#).unwrap_err();
        assert!(err.to_string().contains("outside the board"));
        assert!(serde_json::from_str::<Position>(r#"{"row":0,"col":3}"#).is_err());
    }

    #[test]
    fn test_serialized_shape_deserializes() {
        let json = serde_json::to_string(&Position::CENTER).unwrap();
        assert_eq!(json, r#"{"row":1,"col":1}"#);
        assert_eq!(serde_json::from_str::<Position>(&json).unwrap(), Position::CENTER);
    }

    #[test]
    fn test_parse_label() {
        assert_eq!("center".parse::<Position>(), Ok(Position::CENTER));
        assert_eq!("Bottom-Left".parse::<Position>(), Ok(Position::new(2, 0)));
        assert!("somewhere".parse::<Position>().is_err());
    }
}
