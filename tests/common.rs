//! Shared helpers for the integration tests.

#![allow(dead_code)]

use mnk::game::{Action, GameState};

/// Parse a board, panicking on malformed test input.
pub fn board(cells: &str, win_length: usize) -> GameState {
    GameState::from_string(cells, win_length)
        .unwrap_or_else(|e| panic!("bad test board '{cells}': {e}"))
}

/// Apply a sequence of (row, col) moves alternately from `state`.
pub fn play(state: GameState, moves: &[(usize, usize)]) -> GameState {
    moves.iter().fold(state, |s, &(row, col)| {
        s.result(Action::new(row, col))
            .unwrap_or_else(|e| panic!("illegal test move ({row}, {col}): {e}"))
    })
}
