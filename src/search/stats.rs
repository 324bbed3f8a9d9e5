//! Counters collected while a search runs

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes entered below the root
    pub nodes: u64,
    /// Nodes valued exactly because the game was over
    pub terminal_nodes: u64,
    /// Nodes valued by the evaluator at the depth limit
    pub leaf_evaluations: u64,
    /// Alpha or beta cutoffs taken
    pub cutoffs: u64,
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} nodes, {} terminal, {} leaf evaluations, {} cutoffs",
            self.nodes, self.terminal_nodes, self.leaf_evaluations, self.cutoffs
        )
    }
}
