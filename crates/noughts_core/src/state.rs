//! The game state aggregate.

use crate::rules;
use crate::transition::apply_move;
use crate::{Board, Player, Status};
use serde::Serialize;
use tracing::instrument;

/// Complete game state: board, whose turn it is, and the game status.
///
/// This is a plain value. Every accepted move produces a new `GameState`;
/// the one it was derived from is left as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Player to move, or the winner once the game is won.
    current_player: Player,
    /// Game status.
    status: Status,
}

impl GameState {
    /// Player that moves first when nothing else is configured.
    pub const STARTING_PLAYER: Player = Player::Circle;

    /// Creates a fresh game with `first_player` to move.
    #[instrument]
    pub fn new(first_player: Player) -> Self {
        Self {
            board: Board::new(),
            current_player: first_player,
            status: Status::Running,
        }
    }

    pub(crate) fn from_parts(board: Board, current_player: Player, status: Status) -> Self {
        Self {
            board,
            current_player,
            status,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// True while moves are accepted.
    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }

    /// Returns the winner of a won game.
    ///
    /// Read from the completed line itself, which always agrees with
    /// `current_player` since the turn does not advance on a winning move.
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            Status::Won => rules::winner(&self.board),
            Status::Running | Status::Draw => None,
        }
    }

    /// Applies a move at `square`. See [`apply_move`].
    #[must_use]
    pub fn play(self, square: usize) -> Self {
        apply_move(self, square)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Self::STARTING_PLAYER)
    }
}
