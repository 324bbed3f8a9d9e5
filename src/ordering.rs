//! Move ordering for alpha-beta search
//!
//! Ordering only changes how early cutoffs happen; the value a search
//! returns is the same for every policy.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::{
    game::{Action, GameState, Player},
    heuristic::Evaluator,
};

/// Policy for ordering the actions explored at a search node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MoveOrdering {
    /// Plain (row, column) order
    Lexicographic,
    /// Closest to the board center first
    #[default]
    CenterFirst,
    /// Best-looking child for the mover first, according to an evaluator
    EvaluationProbe,
}

impl MoveOrdering {
    /// Order the actions of `state` under this policy.
    ///
    /// `EvaluationProbe` falls back to `CenterFirst` when no evaluator is given.
    pub fn order(self, state: &GameState, evaluator: Option<&dyn Evaluator>) -> Vec<Action> {
        match (self, evaluator) {
            (MoveOrdering::Lexicographic, _) => state.actions(),
            (MoveOrdering::EvaluationProbe, Some(eval)) => probe_order(state, eval),
            (MoveOrdering::CenterFirst | MoveOrdering::EvaluationProbe, _) => center_order(state),
        }
    }
}

/// Order the actions of `state` for search.
///
/// With an evaluator, children are scored and the mover's preferred ones come
/// first (descending for X, ascending for O). Without one, actions closer to
/// the center come first. Ties keep (row, column) order in both cases.
///
/// # Examples
///
/// ```
/// use mnk::{game::{Action, GameState}, order_moves};
///
/// let state = GameState::new(3, 3).unwrap();
/// assert_eq!(order_moves(&state, None)[0], Action::new(1, 1));
/// ```
pub fn order_moves(state: &GameState, evaluator: Option<&dyn Evaluator>) -> Vec<Action> {
    match evaluator {
        Some(_) => MoveOrdering::EvaluationProbe.order(state, evaluator),
        None => MoveOrdering::CenterFirst.order(state, None),
    }
}

fn probe_order(state: &GameState, evaluator: &dyn Evaluator) -> Vec<Action> {
    let mut scored: Vec<(i32, Action)> = state
        .actions()
        .into_iter()
        .map(|action| (evaluator.evaluate(&state.child(action)), action))
        .collect();

    let mover = state.to_move();
    scored.sort_by(|(va, a), (vb, b)| {
        let by_value: Ordering = match mover {
            Player::X => vb.cmp(va),
            Player::O => va.cmp(vb),
        };
        by_value.then_with(|| a.cmp(b))
    });

    scored.into_iter().map(|(_, action)| action).collect()
}

fn center_order(state: &GameState) -> Vec<Action> {
    // Distances are doubled so the center (m-1)/2 stays integral
    let doubled_center = state.size() as isize - 1;
    let distance = |action: &Action| {
        (2 * action.row as isize - doubled_center).abs()
            + (2 * action.col as isize - doubled_center).abs()
    };

    let mut actions = state.actions();
    actions.sort_by_key(|action| (distance(action), *action));
    actions
}
