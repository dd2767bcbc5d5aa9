//! Pure tic-tac-toe game logic.
//!
//! The whole game is a value, [`GameState`], and a transition function,
//! [`apply_move`], that maps a state and a square to the next state.
//! Nothing here performs I/O or holds mutable state between calls.
//!
//! ```
//! use noughts_core::{GameState, Player, Status};
//!
//! let start = GameState::default();
//! let end = [0, 3, 1, 4, 2].into_iter().fold(start, GameState::play);
//!
//! assert_eq!(end.status(), Status::Won);
//! assert_eq!(end.winner(), Some(Player::Circle));
//! // The starting state is untouched.
//! assert!(start.board().is_empty(0));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod display;
pub mod invariants;
mod position;
pub mod rules;
mod state;
mod transition;
mod types;

pub use action::{Action, ActionError, reduce};
pub use display::{glyph, is_playable, render_board, status_text};
pub use position::Position;
pub use rules::{is_draw, is_won};
pub use state::GameState;
pub use transition::{IllegalMove, apply_move, check_move};
pub use types::{Board, CELLS, Mark, Player, Status};
