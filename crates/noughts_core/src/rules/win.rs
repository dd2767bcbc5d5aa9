//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Player};
use tracing::instrument;

/// Three board indices that win when owned by one player.
pub type Line = [usize; 3];

/// Every winning line: rows, then columns, then diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first line whose three cells belong to the same player.
#[instrument]
pub fn winning_line(board: &Board) -> Option<Line> {
    let marks = board.marks();
    LINES.into_iter().find(|&[a, b, c]| {
        let mark = marks[a];
        mark != Mark::Empty && mark == marks[b] && mark == marks[c]
    })
}

/// Returns the owner of the first completed line.
#[instrument]
pub fn winner(board: &Board) -> Option<Player> {
    winning_line(board).and_then(|[a, _, _]| board.marks()[a].player())
}

/// Checks if any line is complete.
#[instrument]
pub fn is_won(board: &Board) -> bool {
    winning_line(board).is_some()
}
