//! Keyboard mapping for the board cursor.

use crossterm::event::KeyCode;
use noughts_core::Position;

/// Moves the cursor one cell with arrow keys or `hjkl`, stopping at edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, column) = (cursor.row(), cursor.column());

    let target = match key {
        KeyCode::Up | KeyCode::Char('k') => row.checked_sub(1).map(|row| (row, column)),
        KeyCode::Down | KeyCode::Char('j') => Some((row + 1, column)),
        KeyCode::Left | KeyCode::Char('h') => column.checked_sub(1).map(|column| (row, column)),
        KeyCode::Right | KeyCode::Char('l') => Some((row, column + 1)),
        _ => None,
    };

    target
        .and_then(|(row, column)| Position::at(row, column))
        .unwrap_or(cursor)
}

/// Maps digit keys `1`-`9` to cells 0-8.
pub fn digit_square(c: char) -> Option<usize> {
    match c.to_digit(10)? {
        digit @ 1..=9 => Some(digit as usize - 1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_move_within_grid() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
    }

    #[test]
    fn test_vim_keys() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Char('l')), Position::TopCenter);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Char('j')), Position::MiddleLeft);
    }

    #[test]
    fn test_edges_stop_cursor() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Enter), Position::Center);
    }

    #[test]
    fn test_digit_square() {
        assert_eq!(digit_square('1'), Some(0));
        assert_eq!(digit_square('9'), Some(8));
        assert_eq!(digit_square('0'), None);
        assert_eq!(digit_square('a'), None);
    }
}
