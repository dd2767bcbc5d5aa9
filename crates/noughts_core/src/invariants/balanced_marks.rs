//! Balanced marks invariant: players take turns placing marks.

use super::Invariant;
use crate::GameState;
use tracing::warn;

/// Invariant: mark counts differ by at most one, and while the game runs
/// the player behind on marks is the one to move.
pub struct BalancedMarks;

impl Invariant<GameState> for BalancedMarks {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        let mover = state.current_player();
        let own = board.count(mover);
        let other = board.count(mover.opponent());

        let valid = if state.is_running() {
            // Equal counts: the mover went first. Otherwise the mover is one behind.
            own == other || own + 1 == other
        } else {
            // The turn did not advance on the final move, so the mover is level or one ahead.
            own == other || own == other + 1
        };

        if !valid {
            warn!(own, other, player = %mover, "Mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "Players alternate placing marks"
    }
}
