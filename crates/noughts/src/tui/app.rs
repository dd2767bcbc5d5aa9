//! Application state and logic.

use super::input::{digit_square, move_cursor};
use crossterm::event::KeyCode;
use noughts_core::{Action, GameState, Player, Position, is_playable, reduce, status_text};
use tracing::{debug, info};

/// Whether the event loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
///
/// Holds the current [`GameState`] and replaces it with whatever
/// [`reduce`] returns. Input on cells that cannot be played is dropped
/// here, before it reaches the game.
#[derive(Debug, Clone)]
pub struct App {
    initial: GameState,
    state: GameState,
    cursor: Position,
    last_move: Option<(Player, Position)>,
}

impl App {
    /// Creates a new application starting from `initial`.
    pub fn new(initial: GameState) -> Self {
        Self {
            initial,
            state: initial,
            cursor: Position::Center,
            last_move: None,
        }
    }

    /// Gets the current game.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Gets the highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the status line.
    pub fn status_message(&self) -> String {
        status_text(&self.state)
    }

    /// Describes the most recent accepted move, e.g. `O played Center`.
    pub fn last_move_message(&self) -> Option<String> {
        self.last_move
            .map(|(player, position)| format!("{player} played {position}"))
    }

    /// Dispatches a play on `square` if that cell accepts input.
    pub fn play(&mut self, square: usize) {
        if !is_playable(&self.state, square) {
            debug!(square, "Cell not playable, not dispatching");
            return;
        }

        let player = self.state.current_player();
        self.state = reduce(self.state, Action::play(square));
        self.last_move = Position::from_index(square).map(|position| (player, position));
        debug!(%player, square, status = ?self.state.status(), "Move applied to UI state");
    }

    /// Restarts from the configured initial state.
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.state = self.initial;
        self.cursor = Position::Center;
        self.last_move = None;
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) -> Flow {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor.to_index()),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(square) = digit_square(c) {
                    if let Some(position) = Position::from_index(square) {
                        self.cursor = position;
                    }
                    self.play(square);
                }
            }
            other => self.cursor = move_cursor(self.cursor, other),
        }
        Flow::Continue
    }

    /// Handles a click that landed on `square`, if any.
    pub fn handle_click(&mut self, square: Option<usize>) {
        let Some(square) = square else {
            return;
        };
        if let Some(position) = Position::from_index(square) {
            self.cursor = position;
        }
        self.play(square);
    }
}
