//! Win detection.

use super::super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// One of the 8 triples of cells that win when held by a single player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Line {
    /// Row 0.
    TopRow,
    /// Row 1.
    MiddleRow,
    /// Row 2.
    BottomRow,
    /// Column 0.
    LeftColumn,
    /// Column 1.
    CenterColumn,
    /// Column 2.
    RightColumn,
    /// (0,0), (1,1), (2,2).
    MainDiagonal,
    /// (0,2), (1,1), (2,0).
    AntiDiagonal,
}

impl Line {
    /// The three cells making up this line.
    pub fn positions(self) -> [Position; 3] {
        let p = Position::new;
        match self {
            Line::TopRow => [p(0, 0), p(0, 1), p(0, 2)],
            Line::MiddleRow => [p(1, 0), p(1, 1), p(1, 2)],
            Line::BottomRow => [p(2, 0), p(2, 1), p(2, 2)],
            Line::LeftColumn => [p(0, 0), p(1, 0), p(2, 0)],
            Line::CenterColumn => [p(0, 1), p(1, 1), p(2, 1)],
            Line::RightColumn => [p(0, 2), p(1, 2), p(2, 2)],
            Line::MainDiagonal => [p(0, 0), p(1, 1), p(2, 2)],
            Line::AntiDiagonal => [p(0, 2), p(1, 1), p(2, 0)],
        }
    }

    /// Returns the player holding all three cells, if any.
    pub fn owner(self, board: &Board) -> Option<Player> {
        let [a, b, c] = self.positions().map(|pos| board.at(pos));
        if a == b && b == c { a.player() } else { None }
    }
}

/// Every completed line on the board with the player holding it.
///
/// All 8 lines are evaluated.
#[instrument(skip(board))]
pub fn winning_lines(board: &Board) -> Vec<(Line, Player)> {
    Line::iter()
        .filter_map(|line| line.owner(board).map(|player| (line, player)))
        .collect()
}

/// Checks if there is a winner on the board.
///
/// Every line is evaluated on every call, with no early exit once a winner
/// is known. If more than one line is complete the last one scanned decides,
/// which cannot differ from the first on a board reached by legal play.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    Line::iter().fold(None, |winner, line| line.owner(board).or(winner))
}
