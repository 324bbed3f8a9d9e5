//! Subcommands of the `mnk` binary

pub mod best_move;
pub mod self_play;
pub mod verify;
