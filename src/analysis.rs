//! Game-tree enumeration and search cross-checks

use std::collections::{HashSet, VecDeque};

use serde::Serialize;

use crate::{
    Result,
    game::GameState,
    search::{minimax_ab_outcome, minimax_outcome},
};

/// Collect every distinct state reachable from the empty `size`×`size`
/// board, in breadth-first order.
///
/// Terminal states are included but not expanded. The classical 3×3 game
/// has 5478 such states.
pub fn reachable_states(size: usize, win_length: usize) -> Result<Vec<GameState>> {
    let root = GameState::new(size, win_length)?;

    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    let mut states = Vec::new();

    visited.insert(root.encode());
    queue.push_back(root);

    while let Some(state) = queue.pop_front() {
        if !state.is_terminal() {
            for action in state.actions() {
                let next = state.child(action);
                if visited.insert(next.encode()) {
                    queue.push_back(next);
                }
            }
        }
        states.push(state);
    }

    Ok(states)
}

/// A state where exhaustive minimax and alpha-beta disagree on the value
#[derive(Debug, Clone, Serialize)]
pub struct ValueMismatch {
    pub state: String,
    pub minimax: i32,
    pub alpha_beta: i32,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AgreementReport {
    /// Non-terminal states that were searched
    pub checked: usize,
    pub mismatches: Vec<ValueMismatch>,
}

impl AgreementReport {
    pub fn is_consistent(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Compare the root values of plain minimax and alpha-beta on each state.
///
/// Terminal states are skipped. `on_checked` is called after every searched
/// state, which lets callers drive a progress display.
pub fn verify_value_agreement<'a>(
    states: impl IntoIterator<Item = &'a GameState>,
    mut on_checked: impl FnMut(usize),
) -> AgreementReport {
    let mut report = AgreementReport::default();

    for state in states {
        let (Some(exact), Some(pruned)) = (minimax_outcome(state), minimax_ab_outcome(state, None))
        else {
            continue;
        };

        report.checked += 1;
        if exact.value != pruned.value {
            report.mismatches.push(ValueMismatch {
                state: state.encode(),
                minimax: exact.value,
                alpha_beta: pruned.value,
            });
        }
        on_checked(report.checked);
    }

    report
}
