//! Actions dispatched into the game, and their JSON wire form.
//!
//! An action is the player's intent. It is decoded at the edge, then
//! [`reduce`]d into the current state.

use crate::{GameState, apply_move};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// An action a player can dispatch.
///
/// Serialized as `{"type": "PLAY", "square": 4}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Place the current player's mark on `square`.
    Play {
        /// Target cell. Signed so that any integer survives decoding;
        /// values outside 0-8 are ignored by [`reduce`].
        square: i64,
    },
}

impl Action {
    /// A play action for the given cell.
    pub fn play(square: usize) -> Self {
        Action::Play {
            square: i64::try_from(square).unwrap_or(i64::MAX),
        }
    }

    /// Decodes an action from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError`] for malformed JSON, an unknown `type`, or a
    /// missing or non-integer `square`.
    #[instrument]
    pub fn from_json(json: &str) -> Result<Self, ActionError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Applies `action` to `state` and returns the resulting state.
///
/// Never fails; see [`apply_move`] for what an ignored action looks like.
#[instrument(skip(state))]
pub fn reduce(state: GameState, action: Action) -> GameState {
    match action {
        Action::Play { square } => match usize::try_from(square) {
            Ok(square) => apply_move(state, square),
            Err(_) => {
                debug!(square, "Ignoring negative square");
                state
            }
        },
    }
}

/// Failure to decode an action.
#[derive(Debug, Clone, Display, Error)]
#[display("Action error: {} at {}:{}", message, file, line)]
pub struct ActionError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ActionError {
    /// Creates a new action error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<serde_json::Error> for ActionError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("Invalid action JSON: {}", err))
    }
}
