//! Draw detection logic for tic-tac-toe.

use super::win::is_won;
use crate::{Board, CELLS};
use tracing::instrument;

/// Checks if every cell is occupied.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.occupied() == CELLS
}

/// A full board with no completed line.
///
/// A full board that also holds a line is a win, never a draw.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && !is_won(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Player};

    const X: Mark = Mark::Occupied(Player::Cross);
    const O: Mark = Mark::Occupied(Player::Circle);
    const E: Mark = Mark::Empty;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::from_marks([X, O, X, E, O, E, E, E, E]);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // O X O / X X O / O O X
        let board = Board::from_marks([O, X, O, X, X, O, O, O, X]);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        // O O O / X X O / X O X
        let board = Board::from_marks([O, O, O, X, X, O, X, O, X]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
