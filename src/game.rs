//! m×m k-in-a-row game model
//!
//! The free functions mirror the [`GameState`] methods so that callers can
//! drive the search with either style.

pub mod board;
pub mod lines;
pub mod record;
pub mod validation;

pub use board::{Action, Cell, GameState, Player, WIN_SCORE};
pub use lines::{DIRECTIONS, LineAnalyzer};
pub use record::{Game, GameOutcome};

use crate::Result;

/// Empty board of size `m` with win length `k`, X to move.
pub fn initial_state(m: usize, k: usize) -> Result<GameState> {
    GameState::new(m, k)
}

/// Empty cells of `state` in (row, column) order.
pub fn actions(state: &GameState) -> Vec<Action> {
    state.actions()
}

/// State after the side to move plays `action`.
pub fn result(state: &GameState, action: Action) -> Result<GameState> {
    state.result(action)
}

pub fn winner(state: &GameState) -> Option<Player> {
    state.winner()
}

pub fn terminal(state: &GameState) -> bool {
    state.is_terminal()
}

pub fn utility(state: &GameState) -> i32 {
    state.utility()
}
