//! Adversarial search strategies
//!
//! X maximizes and O minimizes the value of a position. All three strategies
//! run the same recursion from [`engine`] with different [`SearchParams`]:
//!
//! | strategy       | pruning | depth limit | ordering                          |
//! |----------------|---------|-------------|-----------------------------------|
//! | [`minimax`]    | no      | none        | (row, column)                     |
//! | [`minimax_ab`] | yes     | none        | probe if evaluator, else center   |
//! | [`search`]     | yes     | `depth`     | probe                             |
//!
//! Only [`search`] can return a heuristic (inexact) value.

pub mod engine;
pub mod stats;

pub use engine::{SearchOutcome, SearchParams, Searcher};
pub use stats::SearchStats;

use crate::{
    game::{Action, GameState},
    heuristic::Evaluator,
    ordering::MoveOrdering,
};

/// Exhaustive minimax without pruning.
///
/// Returns `None` on a terminal state.
pub fn minimax(state: &GameState) -> Option<Action> {
    minimax_outcome(state).map(|outcome| outcome.action)
}

pub fn minimax_outcome(state: &GameState) -> Option<SearchOutcome> {
    Searcher::new(SearchParams::exhaustive(), None).run(state)
}

/// Exhaustive alpha-beta search.
///
/// The evaluator, when given, only orders moves; values are always exact.
///
/// # Examples
///
/// ```
/// use mnk::{game::{Action, GameState}, minimax_ab};
///
/// // X completes the top row
/// let state = GameState::from_string("XX./OO./...", 3).unwrap();
/// assert_eq!(minimax_ab(&state, None), Some(Action::new(0, 2)));
/// ```
pub fn minimax_ab(state: &GameState, evaluator: Option<&dyn Evaluator>) -> Option<Action> {
    minimax_ab_outcome(state, evaluator).map(|outcome| outcome.action)
}

pub fn minimax_ab_outcome(
    state: &GameState,
    evaluator: Option<&dyn Evaluator>,
) -> Option<SearchOutcome> {
    let ordering = match evaluator {
        Some(_) => MoveOrdering::EvaluationProbe,
        None => MoveOrdering::CenterFirst,
    };
    Searcher::new(SearchParams::alpha_beta(ordering), evaluator).run(state)
}

/// Depth-limited alpha-beta search.
///
/// Non-terminal nodes `depth` plies below the root are valued with
/// `evaluator`; root children count as the first ply, so depths 0 and 1
/// behave the same.
pub fn search(state: &GameState, depth: u32, evaluator: &dyn Evaluator) -> Option<Action> {
    search_outcome(state, depth, evaluator).map(|outcome| outcome.action)
}

pub fn search_outcome(
    state: &GameState,
    depth: u32,
    evaluator: &dyn Evaluator,
) -> Option<SearchOutcome> {
    Searcher::new(SearchParams::depth_limited(depth), Some(evaluator)).run(state)
}
