//! Game-tree search for m×m k-in-a-row tic-tac-toe
//!
//! This crate provides:
//! - An immutable board model with win detection for any k ≤ m
//! - A line-counting heuristic for positions the search cannot finish
//! - Move ordering by center distance or evaluation probe
//! - Plain minimax, alpha-beta and depth-limited alpha-beta search
//! - An agent that plays the classical 3×3 game exactly and larger boards
//!   heuristically
//!
//! ```
//! use mnk::{DEFAULT_DEPTH, game::initial_state, select_move};
//!
//! let state = initial_state(4, 3).unwrap();
//! let action = select_move(Some(&state), DEFAULT_DEPTH).unwrap();
//! assert!(state.result(action).is_ok());
//! ```

pub mod agent;
pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod game;
pub mod heuristic;
pub mod ordering;
pub mod search;

pub use agent::{Agent, DEFAULT_DEPTH, select_move, self_play};
pub use config::EngineConfig;
pub use error::{Error, Result};
pub use game::{Action, GameState, Player};
pub use heuristic::{Evaluator, LineHeuristic, evaluate};
pub use ordering::{MoveOrdering, order_moves};
pub use search::{SearchOutcome, SearchStats, minimax, minimax_ab, search};
