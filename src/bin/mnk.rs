//! mnk CLI - game-tree search for m×m k-in-a-row tic-tac-toe
//!
//! This CLI provides a batch interface for:
//! - Picking the best move for a position
//! - Running engine self-play games
//! - Cross-checking alpha-beta against plain minimax

use anyhow::Result;
use clap::{Parser, Subcommand};
use mnk::cli::{
    commands::{best_move, self_play, verify},
    config::{CommonArgs, init_logging},
};

#[derive(Parser)]
#[command(name = "mnk")]
#[command(version, about = "Game-tree search for m×m k-in-a-row tic-tac-toe", long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick the best move for a position
    BestMove(best_move::BestMoveArgs),

    /// Let the engine play both sides of a game
    SelfPlay(self_play::SelfPlayArgs),

    /// Check that alpha-beta and minimax agree on every position
    Verify(verify::VerifyArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.common.verbose);

    match cli.command {
        Commands::BestMove(args) => best_move::execute(args, &cli.common),
        Commands::SelfPlay(args) => self_play::execute(args, &cli.common),
        Commands::Verify(args) => verify::execute(args, &cli.common),
    }
}
