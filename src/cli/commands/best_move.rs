//! Best-move command - Pick a move for a given position

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use crate::{
    agent::Agent,
    cli::{
        config::{CommonArgs, EngineArgs},
        output::{format_number, print_board, print_json, print_kv, print_section},
    },
    game::{Action, GameState, Player},
    search::SearchStats,
};

#[derive(Parser, Debug)]
#[command(about = "Pick the best move for a position")]
pub struct BestMoveArgs {
    /// Board cells row by row ('.', 'X', 'O'); '/' and spaces separate rows
    #[arg(long, short = 'b')]
    pub board: String,

    /// Marks in a row needed to win (defaults to the board size)
    #[arg(long, short = 'k')]
    pub win_length: Option<usize>,

    #[command(flatten)]
    pub engine: EngineArgs,
}

#[derive(Debug, Serialize)]
struct BestMoveReport {
    board: String,
    to_move: Player,
    action: Option<Action>,
    value: Option<i32>,
    stats: Option<SearchStats>,
}

pub fn execute(args: BestMoveArgs, common: &CommonArgs) -> Result<()> {
    let size = args
        .board
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '/')
        .count()
        .isqrt();
    let win_length = args.win_length.unwrap_or(size);
    let state = GameState::from_string(&args.board, win_length)
        .with_context(|| format!("parsing board '{}'", args.board))?;

    let agent = Agent::new(args.engine.resolve()?);
    let outcome = agent.choose(&state);

    if common.json {
        return print_json(&BestMoveReport {
            board: state.encode(),
            to_move: state.to_move(),
            action: outcome.map(|o| o.action),
            value: outcome.map(|o| o.value),
            stats: outcome.map(|o| o.stats),
        });
    }

    print_section(&format!(
        "{}x{} board, {} in a row, {} to move",
        state.size(),
        state.size(),
        state.win_length(),
        state.to_move()
    ));
    print_board(&state);
    println!();

    match outcome {
        Some(outcome) => {
            print_kv("Best move", &outcome.action.to_string());
            print_kv("Value", &outcome.value.to_string());
            print_kv("Nodes", &format_number(outcome.stats.nodes));
            print_kv("Cutoffs", &format_number(outcome.stats.cutoffs));
        }
        None => print_kv("Best move", "none (game is over)"),
    }

    Ok(())
}
