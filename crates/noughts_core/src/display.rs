//! Text presentation of game values.
//!
//! Stateless mappings a frontend needs: status line, cell glyphs, and
//! whether a cell should accept input.

use crate::{Board, GameState, Mark, Status, check_move};
use std::fmt;

/// Glyph for a cell: `X`, `O`, or a blank.
pub fn glyph(mark: Mark) -> &'static str {
    match mark {
        Mark::Empty => " ",
        Mark::Occupied(crate::Player::Cross) => "X",
        Mark::Occupied(crate::Player::Circle) => "O",
    }
}

/// Status line for the current state.
///
/// `Playing: O`, `Won: X`, or `It's a draw!`.
pub fn status_text(state: &GameState) -> String {
    match state.status() {
        Status::Running => format!("Playing: {}", state.current_player()),
        Status::Won => format!(
            "Won: {}",
            state.winner().unwrap_or(state.current_player())
        ),
        Status::Draw => "It's a draw!".to_string(),
    }
}

/// Whether input on `square` should be dispatched at all.
///
/// False once the game is over, for occupied cells, and for indices off
/// the board.
pub fn is_playable(state: &GameState, square: usize) -> bool {
    check_move(state, square).is_ok()
}

/// Renders the board as a three-line grid.
pub fn render_board(board: &Board) -> String {
    board.to_string()
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(glyph(*self))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.marks().chunks(3).enumerate() {
            if row > 0 {
                f.write_str("\n-+-+-\n")?;
            }
            let line: Vec<&str> = cells.iter().map(|mark| glyph(*mark)).collect();
            f.write_str(&line.join("|"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_status_text_running() {
        assert_eq!(status_text(&GameState::default()), "Playing: O");
        assert_eq!(status_text(&GameState::default().play(0)), "Playing: X");
    }

    #[test]
    fn test_status_text_won() {
        let state = [0, 3, 1, 4, 2]
            .into_iter()
            .fold(GameState::default(), GameState::play);
        assert_eq!(status_text(&state), "Won: O");
    }

    #[test]
    fn test_status_text_draw() {
        let state = [0, 1, 2, 3, 5, 4, 6, 8, 7]
            .into_iter()
            .fold(GameState::default(), GameState::play);
        assert_eq!(status_text(&state), "It's a draw!");
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(glyph(Mark::Empty), " ");
        assert_eq!(Mark::Occupied(Player::Cross).to_string(), "X");
        assert_eq!(Mark::Occupied(Player::Circle).to_string(), "O");
    }

    #[test]
    fn test_is_playable() {
        let state = GameState::default().play(4);
        assert!(is_playable(&state, 0));
        assert!(!is_playable(&state, 4));
        assert!(!is_playable(&state, 9));
    }

    #[test]
    fn test_render_board() {
        let state = GameState::new(Player::Cross).play(0).play(4);
        assert_eq!(render_board(state.board()), "X| | \n-+-+-\n |O| \n-+-+-\n | | ");
    }
}
