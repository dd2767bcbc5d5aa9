//! Monotonic board invariant: marks are only ever added, one at a time.

use super::TransitionInvariant;
use crate::{GameState, Mark};

/// Invariant: no occupied cell changes, and at most one empty cell is
/// claimed, by the player whose turn it was.
pub struct MonotonicBoard;

impl TransitionInvariant<GameState> for MonotonicBoard {
    fn holds(before: &GameState, after: &GameState) -> bool {
        let mut claimed = 0;

        for (old, new) in before.board().marks().iter().zip(after.board().marks()) {
            match (old, new) {
                (a, b) if a == b => {}
                (Mark::Empty, Mark::Occupied(player)) if *player == before.current_player() => {
                    claimed += 1;
                }
                _ => return false,
            }
        }

        claimed <= 1
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Player, Status};

    #[test]
    fn test_single_move_holds() {
        let before = GameState::default();
        let after = before.play(4);
        assert!(MonotonicBoard::holds(&before, &after));
    }

    #[test]
    fn test_noop_holds() {
        let state = GameState::default().play(4);
        assert!(MonotonicBoard::holds(&state, &state.play(4)));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let before = GameState::default().play(4);
        let board = Board::from_marks({
            let mut marks = [Mark::Empty; 9];
            marks[4] = Mark::Occupied(Player::Cross);
            marks
        });
        let after = GameState::from_parts(board, Player::Circle, Status::Running);
        assert!(!MonotonicBoard::holds(&before, &after));
    }

    #[test]
    fn test_two_new_marks_violates() {
        let before = GameState::default();
        let board = Board::new()
            .with_mark(0, Player::Circle)
            .and_then(|board| board.with_mark(1, Player::Circle))
            .expect("Distinct empty cells");
        let after = GameState::from_parts(board, Player::Cross, Status::Running);
        assert!(!MonotonicBoard::holds(&before, &after));
    }
}
