//! Draw detection.

use super::super::Board;
use super::win::check_winner;
use tracing::instrument;

/// A full board with no winning line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::{Player, Position};
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!board.is_full());
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.place(Position::CENTER, Player::X);
        assert!(!board.is_full());
    }

    #[test]
    fn test_draw_detection() {
        // X O X
        // O X X
        // O X O
        let mut board = Board::new();
        for (index, player) in [
            Player::X,
            Player::O,
            Player::X,
            Player::O,
            Player::X,
            Player::X,
            Player::O,
            Player::X,
            Player::O,
        ]
        .into_iter()
        .enumerate()
        {
            board.place(Position::ALL[index], player);
        }

        assert!(board.is_full());
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.place(pos, Player::X);
        }
        assert!(board.is_full());
        assert!(!is_draw(&board));
    }
}
