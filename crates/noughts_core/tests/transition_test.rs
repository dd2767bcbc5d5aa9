//! Tests for the transition function and its game-level properties.

use noughts_core::{
    Action, Board, GameState, Mark, Player, Status, apply_move, is_draw, is_won, reduce,
};

fn play_all(state: GameState, squares: &[usize]) -> GameState {
    squares.iter().fold(state, |state, &square| apply_move(state, square))
}

fn won_game() -> GameState {
    play_all(GameState::default(), &[0, 3, 1, 4, 2])
}

fn drawn_game() -> GameState {
    play_all(GameState::default(), &[0, 1, 2, 3, 5, 4, 6, 8, 7])
}

#[test]
fn test_fresh_game() {
    let state = GameState::default();
    assert_eq!(state.current_player(), Player::Circle);
    assert_eq!(state.status(), Status::Running);
    assert_eq!(state.board(), &Board::new());
    assert_eq!(state.winner(), None);
}

#[test]
fn test_scenario_top_row_win() {
    let state = won_game();
    assert_eq!(state.status(), Status::Won);
    assert_eq!(state.current_player(), Player::Circle);
    assert_eq!(state.winner(), Some(Player::Circle));
    for square in [0, 1, 2] {
        assert_eq!(state.board().get(square), Some(Mark::Occupied(Player::Circle)));
    }
}

#[test]
fn test_scenario_full_board_draw() {
    let state = drawn_game();
    assert_eq!(state.status(), Status::Draw);
    assert_eq!(state.winner(), None);
    // Circle made the ninth move and keeps the turn.
    assert_eq!(state.current_player(), Player::Circle);
}

#[test]
fn test_scenario_same_square_twice() {
    let first = apply_move(GameState::default(), 0);
    let second = apply_move(first, 0);
    assert_eq!(second, first);
    assert_eq!(second.current_player(), Player::Cross);
}

#[test]
fn test_terminal_states_ignore_every_square() {
    for terminal in [won_game(), drawn_game()] {
        for square in 0..9 {
            assert_eq!(apply_move(terminal, square), terminal);
        }
    }
}

#[test]
fn test_occupied_squares_rejected() {
    let state = play_all(GameState::default(), &[4, 0, 8]);
    for square in [0, 4, 8] {
        assert_eq!(apply_move(state, square), state);
    }
}

#[test]
fn test_turns_alternate_from_configured_player() {
    for first in [Player::Circle, Player::Cross] {
        let mut state = GameState::new(first);
        let mut expected = first;
        // No line completes along this sequence until the board is full.
        for square in [0, 1, 2, 3, 5, 4, 6, 8] {
            assert_eq!(state.current_player(), expected);
            state = apply_move(state, square);
            assert_eq!(state.status(), Status::Running);
            expected = expected.opponent();
        }
    }
}

#[test]
fn test_win_takes_precedence_over_draw() {
    // O X O / X O X / X O O: last move at 8 fills the board and completes the diagonal.
    let state = play_all(GameState::default(), &[0, 1, 2, 3, 4, 5, 7, 6, 8]);
    assert!(is_won(state.board()));
    assert!(!is_draw(state.board()));
    assert_eq!(state.board().occupied(), 9);
    assert_eq!(state.status(), Status::Won);
    assert_eq!(state.winner(), Some(Player::Circle));
}

#[test]
fn test_input_state_is_not_mutated() {
    let before = play_all(GameState::default(), &[4]);
    let snapshot = before;
    let after = apply_move(before, 0);

    assert_eq!(before, snapshot);
    assert_eq!(before.board().get(0), Some(Mark::Empty));
    assert_eq!(after.board().get(0), Some(Mark::Occupied(Player::Cross)));
    assert_ne!(before.board(), after.board());
}

#[test]
fn test_transition_is_deterministic() {
    let state = play_all(GameState::default(), &[4, 0]);
    assert_eq!(apply_move(state, 8), apply_move(state, 8));
}

#[test]
fn test_reduce_matches_apply_move() {
    let state = play_all(GameState::default(), &[4]);
    assert_eq!(reduce(state, Action::play(2)), apply_move(state, 2));
    assert_eq!(reduce(state, Action::Play { square: 9 }), state);
    assert_eq!(reduce(state, Action::Play { square: -3 }), state);
}
