//! Command-line interface for the mnk engine
//!
//! This module provides batch commands for picking moves, running self-play
//! games and cross-checking the search strategies.

pub mod commands;
pub mod config;
pub mod output;
