//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Cross, drawn as `X`.
    #[display("X")]
    #[strum(serialize = "cross", serialize = "x")]
    Cross,
    /// Circle, drawn as `O`. Moves first unless configured otherwise.
    #[display("O")]
    #[strum(serialize = "circle", serialize = "o")]
    Circle,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Cross => Player::Circle,
            Player::Circle => Player::Cross,
        }
    }
}

/// Content of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(into = "Option<Player>")]
pub enum Mark {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell owned by a player.
    Occupied(Player),
}

impl Mark {
    /// Returns the owning player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::Occupied(player) => Some(player),
        }
    }

    /// True if nobody has played here.
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }
}

impl From<Mark> for Option<Player> {
    fn from(mark: Mark) -> Self {
        mark.player()
    }
}

impl From<Option<Player>> for Mark {
    fn from(player: Option<Player>) -> Self {
        player.map_or(Mark::Empty, Mark::Occupied)
    }
}

/// 3x3 board, cells in row-major order (0-8).
///
/// There is no in-place setter: [`Board::with_mark`] returns a fresh board
/// and refuses to overwrite an occupied cell, so earlier snapshots are
/// never disturbed and a cell never goes back to empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Board {
    marks: [Mark; CELLS],
}

impl Board {
    /// Creates an empty board.
    pub const fn new() -> Self {
        Self {
            marks: [Mark::Empty; CELLS],
        }
    }

    /// Builds a board from explicit cell contents.
    pub const fn from_marks(marks: [Mark; CELLS]) -> Self {
        Self { marks }
    }

    /// Gets the mark at the given index, or `None` past the last cell.
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.marks.get(index).copied()
    }

    /// Checks if the cell at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Mark::Empty))
    }

    /// Returns all cells.
    pub fn marks(&self) -> &[Mark; CELLS] {
        &self.marks
    }

    /// Returns a copy of this board with `player` placed at `index`.
    ///
    /// `None` if the index is out of range or the cell is already taken.
    #[must_use]
    pub fn with_mark(&self, index: usize, player: Player) -> Option<Self> {
        if !self.is_empty(index) {
            return None;
        }
        let mut marks = self.marks;
        marks[index] = Mark::Occupied(player);
        Some(Self { marks })
    }

    /// Number of cells owned by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.marks
            .iter()
            .filter(|mark| **mark == Mark::Occupied(player))
            .count()
    }

    /// Number of non-empty cells.
    pub fn occupied(&self) -> usize {
        self.marks.iter().filter(|mark| !mark.is_empty()).count()
    }
}

/// Running/terminal classification of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Moves are still accepted.
    #[default]
    Running,
    /// The last mover completed a line.
    Won,
    /// The board filled up without a line.
    Draw,
}

impl Status {
    /// True for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        self != Status::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_toggles() {
        assert_eq!(Player::Circle.opponent(), Player::Cross);
        assert_eq!(Player::Cross.opponent(), Player::Circle);
    }

    #[test]
    fn test_player_parses_names_and_glyphs() {
        assert_eq!("circle".parse::<Player>().ok(), Some(Player::Circle));
        assert_eq!("X".parse::<Player>().ok(), Some(Player::Cross));
        assert!("triangle".parse::<Player>().is_err());
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let empty = Board::new();
        let next = empty.with_mark(4, Player::Circle).expect("Empty cell");

        assert_eq!(empty.get(4), Some(Mark::Empty));
        assert_eq!(next.get(4), Some(Mark::Occupied(Player::Circle)));
        assert_eq!(next.occupied(), 1);
    }

    #[test]
    fn test_with_mark_refuses_occupied_and_out_of_range() {
        let board = Board::new().with_mark(0, Player::Cross).expect("Empty cell");
        assert_eq!(board.with_mark(0, Player::Circle), None);
        assert_eq!(board.with_mark(9, Player::Circle), None);
    }

    #[test]
    fn test_mark_serializes_as_option() {
        let board = Board::new().with_mark(1, Player::Cross).expect("Empty cell");
        let json = serde_json::to_string(&board).expect("Serializable");
        assert_eq!(json, r#"[null,"cross",null,null,null,null,null,null,null]"#);
    }

    #[test]
    fn test_status_terminal() {
        assert!(!Status::Running.is_terminal());
        assert!(Status::Won.is_terminal());
        assert!(Status::Draw.is_terminal());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&Status::Won).expect("Serializable");
        assert_eq!(json, r#""won""#);
        let parsed: Status = serde_json::from_str(r#""running""#).expect("Deserializable");
        assert_eq!(parsed, Status::Running);
    }
}
