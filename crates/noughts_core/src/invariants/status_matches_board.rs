//! Status invariant: the recorded status agrees with the board.

use super::Invariant;
use crate::rules::{is_draw, is_full, winner};
use crate::{GameState, Status};

/// Invariant: `Won` iff a line is complete (and owned by `current_player`),
/// `Draw` iff the board is full without a line, `Running` otherwise.
pub struct StatusMatchesBoard;

impl Invariant<GameState> for StatusMatchesBoard {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        match state.status() {
            Status::Won => winner(board) == Some(state.current_player()),
            Status::Draw => is_draw(board),
            Status::Running => winner(board).is_none() && !is_full(board),
        }
    }

    fn description() -> &'static str {
        "Status agrees with the board"
    }
}
