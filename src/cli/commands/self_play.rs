//! Self-play command - Let the engine play both sides

use anyhow::Result;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    agent::{Agent, random_opening, self_play},
    cli::{
        config::{CommonArgs, EngineArgs},
        output::{print_board, print_json, print_kv, print_section},
    },
    game::{GameOutcome, GameState},
};

#[derive(Parser, Debug)]
#[command(about = "Play a game of the engine against itself")]
pub struct SelfPlayArgs {
    /// Board side length (m)
    #[arg(long, short = 'm', default_value_t = 3)]
    pub size: usize,

    /// Marks in a row needed to win (k)
    #[arg(long, short = 'k', default_value_t = 3)]
    pub win_length: usize,

    /// Random plies played before the engine takes over
    #[arg(long, default_value_t = 0)]
    pub random_opening: usize,

    /// Random seed for reproducibility of the opening
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub engine: EngineArgs,
}

pub fn execute(args: SelfPlayArgs, common: &CommonArgs) -> Result<()> {
    let agent = Agent::new(args.engine.resolve()?);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let start = random_opening(
        GameState::new(args.size, args.win_length)?,
        args.random_opening,
        &mut rng,
    )?;

    let game = self_play(start, &agent, &agent)?;

    if common.json {
        return print_json(&game);
    }

    print_section(&format!(
        "Self-play on {}x{}, {} in a row (depth {})",
        args.size,
        args.size,
        args.win_length,
        agent.config().depth
    ));
    if args.random_opening > 0 {
        println!("  Opening after {} random plies:", args.random_opening);
        print_board(game.initial_state());
        println!();
    }

    for (ply, (action, state)) in game
        .moves()
        .iter()
        .zip(game.state_sequence().iter().skip(1))
        .enumerate()
    {
        println!("  {:>3}. {} plays {}", ply + 1, state.to_move().opponent(), action);
        print_board(state);
    }
    println!();

    let result = match game.outcome() {
        Some(GameOutcome::Win(player)) => format!("{player} wins"),
        Some(GameOutcome::Draw) => "draw".to_string(),
        None => "unfinished".to_string(),
    };
    print_kv("Result", &result);
    print_kv("Moves", &game.moves().len().to_string());

    Ok(())
}
