//! Parameterized minimax recursion shared by every search strategy

use log::debug;
use serde::{Deserialize, Serialize};

use super::stats::SearchStats;
use crate::{
    game::{Action, GameState, Player},
    heuristic::{Evaluator, evaluate},
    ordering::MoveOrdering,
};

const NEG_INF: i32 = i32::MIN;
const POS_INF: i32 = i32::MAX;

/// Configuration of a single search run.
///
/// The named strategies are fixed points of this configuration:
/// [`SearchParams::exhaustive`], [`SearchParams::alpha_beta`] and
/// [`SearchParams::depth_limited`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    /// Cut branches that cannot change the result
    pub pruning: bool,
    /// Plies below the root children before the evaluator replaces search
    pub depth_limit: Option<u32>,
    pub ordering: MoveOrdering,
}

impl SearchParams {
    /// Full tree, no pruning, actions in (row, column) order
    pub fn exhaustive() -> Self {
        Self {
            pruning: false,
            depth_limit: None,
            ordering: MoveOrdering::Lexicographic,
        }
    }

    /// Full tree with alpha-beta pruning
    pub fn alpha_beta(ordering: MoveOrdering) -> Self {
        Self {
            pruning: true,
            depth_limit: None,
            ordering,
        }
    }

    /// Alpha-beta cut off after `depth` plies, ordered by evaluation probe
    pub fn depth_limited(depth: u32) -> Self {
        Self {
            pruning: true,
            depth_limit: Some(depth),
            ordering: MoveOrdering::EvaluationProbe,
        }
    }
}

/// Result of a search from a non-terminal root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    pub action: Action,
    /// Minimax value of `action` from X's point of view
    pub value: i32,
    pub stats: SearchStats,
}

/// Runs one search with fixed parameters and an optional evaluator.
///
/// The evaluator orders moves under [`MoveOrdering::EvaluationProbe`] and
/// values nodes at the depth limit. Without one, depth-limited leaves fall
/// back to [`evaluate`].
pub struct Searcher<'e> {
    params: SearchParams,
    evaluator: Option<&'e dyn Evaluator>,
    stats: SearchStats,
}

impl<'e> Searcher<'e> {
    pub fn new(params: SearchParams, evaluator: Option<&'e dyn Evaluator>) -> Self {
        Self {
            params,
            evaluator,
            stats: SearchStats::default(),
        }
    }

    /// Pick the best action for the side to move, `None` if `state` is terminal.
    ///
    /// Every root child is searched with a full window so root values are
    /// exact. Among equal values the lexicographically smallest action wins.
    pub fn run(mut self, state: &GameState) -> Option<SearchOutcome> {
        if state.is_terminal() {
            return None;
        }

        let mover = state.to_move();
        let child_depth = self.params.depth_limit.map(|d| d.saturating_sub(1));
        let mut best: Option<(Action, i32)> = None;

        for action in self.ordered_actions(state) {
            let value = self.value(&state.child(action), NEG_INF, POS_INF, child_depth);

            let replace = match best {
                None => true,
                Some((best_action, best_value)) => {
                    improves(mover, value, best_value)
                        || (value == best_value && action < best_action)
                }
            };
            if replace {
                best = Some((action, value));
            }
        }

        let (action, value) = best?;
        debug!(
            "{:?} search for {} on {}x{} (k={}): {} value {} [{}]",
            self.params.ordering,
            mover,
            state.size(),
            state.size(),
            state.win_length(),
            action,
            value,
            self.stats
        );

        Some(SearchOutcome {
            action,
            value,
            stats: self.stats,
        })
    }

    fn value(
        &mut self,
        state: &GameState,
        mut alpha: i32,
        mut beta: i32,
        depth: Option<u32>,
    ) -> i32 {
        self.stats.nodes += 1;

        if state.is_terminal() {
            self.stats.terminal_nodes += 1;
            return state.utility();
        }
        if depth == Some(0) {
            self.stats.leaf_evaluations += 1;
            return match self.evaluator {
                Some(evaluator) => evaluator.evaluate(state),
                None => evaluate(state),
            };
        }

        let next_depth = depth.map(|d| d - 1);

        match state.to_move() {
            Player::X => {
                let mut v = NEG_INF;
                for action in self.ordered_actions(state) {
                    v = v.max(self.value(&state.child(action), alpha, beta, next_depth));
                    if self.params.pruning {
                        if v >= beta {
                            self.stats.cutoffs += 1;
                            return v;
                        }
                        alpha = alpha.max(v);
                    }
                }
                v
            }
            Player::O => {
                let mut v = POS_INF;
                for action in self.ordered_actions(state) {
                    v = v.min(self.value(&state.child(action), alpha, beta, next_depth));
                    if self.params.pruning {
                        if v <= alpha {
                            self.stats.cutoffs += 1;
                            return v;
                        }
                        beta = beta.min(v);
                    }
                }
                v
            }
        }
    }

    fn ordered_actions(&self, state: &GameState) -> Vec<Action> {
        self.params.ordering.order(state, self.evaluator)
    }
}

fn improves(mover: Player, value: i32, best: i32) -> bool {
    match mover {
        Player::X => value > best,
        Player::O => value < best,
    }
}
