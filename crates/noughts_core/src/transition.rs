//! The move-application rule.
//!
//! [`apply_move`] is the only way a game advances. It never fails: an
//! illegal move hands back the state it was given, so callers can compare
//! the result against their input to see whether anything happened.

use crate::invariants::{CoreInvariants, InvariantSet, MonotonicBoard, TransitionInvariant};
use crate::rules::{is_draw, is_won};
use crate::{GameState, Mark, Status};
use tracing::{debug, info, instrument};

/// Reason a move would be ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IllegalMove {
    /// The game has already been won or drawn.
    #[display("Game is already over ({:?})", _0)]
    GameOver(Status),

    /// The square index is past the last cell.
    #[display("Square {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    Occupied(usize),
}

impl std::error::Error for IllegalMove {}

/// Checks whether a move at `square` would be accepted.
///
/// # Errors
///
/// Returns the first failing precondition: a terminal status, then an
/// out-of-range index, then an occupied cell.
#[instrument(skip(state), fields(status = ?state.status()))]
pub fn check_move(state: &GameState, square: usize) -> Result<(), IllegalMove> {
    if state.status().is_terminal() {
        return Err(IllegalMove::GameOver(state.status()));
    }

    match state.board().get(square) {
        None => Err(IllegalMove::OutOfRange(square)),
        Some(Mark::Occupied(_)) => Err(IllegalMove::Occupied(square)),
        Some(Mark::Empty) => Ok(()),
    }
}

/// Places the current player's mark at `square` and returns the next state.
///
/// - Illegal moves (finished game, bad index, occupied cell) return `state`
///   unchanged.
/// - A move that completes a line ends the game as `Won`; the mover stays
///   `current_player`.
/// - A move that fills the board otherwise ends the game as `Draw`; the
///   mover stays `current_player`.
/// - Any other move keeps the game `Running` and passes the turn.
#[instrument(skip(state), fields(player = %state.current_player(), status = ?state.status()))]
pub fn apply_move(state: GameState, square: usize) -> GameState {
    if let Err(reason) = check_move(&state, square) {
        debug!(%reason, "Ignoring illegal move");
        return state;
    }

    let mover = state.current_player();
    let Some(board) = state.board().with_mark(square, mover) else {
        return state;
    };

    let next = if is_won(&board) {
        info!(winner = %mover, "Game won");
        GameState::from_parts(board, mover, Status::Won)
    } else if is_draw(&board) {
        info!("Game drawn");
        GameState::from_parts(board, mover, Status::Draw)
    } else {
        GameState::from_parts(board, mover.opponent(), Status::Running)
    };

    debug_assert!(
        MonotonicBoard::holds(&state, &next),
        "{}",
        MonotonicBoard::description()
    );
    debug_assert!(CoreInvariants::check_all(&next).is_ok());

    next
}
