//! Game rules for tic-tac-toe.
//!
//! Pure predicates over a [`Board`](crate::Board). The transition function
//! consults them after every accepted move; they never look at whose turn
//! it is.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Line, is_won, winner, winning_line};
