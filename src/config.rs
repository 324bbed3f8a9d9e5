//! Engine configuration
//!
//! Configuration can be built in code or read from a JSON file; missing
//! fields take their defaults.
//!
//! ```
//! use mnk::config::EngineConfig;
//!
//! let config = EngineConfig::from_json(r#"{ "depth": 5 }"#).unwrap();
//! assert_eq!(config.depth, 5);
//! assert!(!config.include_diagonals);
//! ```

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{agent::DEFAULT_DEPTH, heuristic::LineHeuristic};

/// Settings for the move-selecting agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Search depth for boards other than classical 3×3
    pub depth: u32,
    /// Score the two long diagonals in the heuristic as well
    pub include_diagonals: bool,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            include_diagonals: false,
        }
    }

    /// Set the depth used for depth-limited search.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Enable or disable diagonal scoring in the heuristic.
    pub fn with_diagonals(mut self, include_diagonals: bool) -> Self {
        self.include_diagonals = include_diagonals;
        self
    }

    /// Leaf evaluator described by this configuration
    pub fn heuristic(&self) -> LineHeuristic {
        LineHeuristic::new(self.include_diagonals)
    }

    pub fn from_json(json: &str) -> Result<Self, crate::Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a configuration from a JSON file
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if the file cannot be read and
    /// [`crate::Error::Serialization`] if it is not valid configuration JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, crate::Error> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| crate::Error::Io {
            operation: format!("read config {}", path.display()),
            source,
        })?;
        Self::from_json(&contents)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
