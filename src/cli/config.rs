//! Shared configuration types for CLI commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use log::LevelFilter;

use crate::config::EngineConfig;

/// Options common to every command
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Verbose output (debug logging of every search)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,
}

/// Engine settings that can come from a file and be overridden by flags
#[derive(Args, Debug, Clone, Default)]
pub struct EngineArgs {
    /// JSON engine configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Search depth for boards other than 3x3 with k=3
    #[arg(long, short = 'd')]
    pub depth: Option<u32>,

    /// Include the long diagonals in the heuristic
    #[arg(long)]
    pub diagonals: bool,
}

impl EngineArgs {
    /// Load the configuration file, if any, then apply flag overrides
    pub fn resolve(&self) -> Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::load(path)
                .with_context(|| format!("loading engine config from {}", path.display()))?,
            None => EngineConfig::default(),
        };

        if let Some(depth) = self.depth {
            config = config.with_depth(depth);
        }
        if self.diagonals {
            config = config.with_diagonals(true);
        }

        Ok(config)
    }
}

/// Install the logger; `RUST_LOG` wins over the verbosity flag.
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}
