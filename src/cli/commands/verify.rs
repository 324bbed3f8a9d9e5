//! Verify command - Check that alpha-beta matches plain minimax

use anyhow::{Result, bail};
use clap::Parser;
use indicatif::ProgressBar;

use crate::{
    analysis::{reachable_states, verify_value_agreement},
    cli::{
        config::CommonArgs,
        output::{create_progress, format_number, print_json, print_kv, print_section},
    },
    game::GameState,
};

#[derive(Parser, Debug)]
#[command(about = "Cross-check minimax and alpha-beta values over the game tree")]
pub struct VerifyArgs {
    /// Board side length (m); exhaustive search is only practical for 3
    #[arg(long, short = 'm', default_value_t = 3)]
    pub size: usize,

    /// Marks in a row needed to win (k)
    #[arg(long, short = 'k', default_value_t = 3)]
    pub win_length: usize,

    /// Only check positions with at least this many marks
    #[arg(long, default_value_t = 0)]
    pub min_marks: usize,
}

pub fn execute(args: VerifyArgs, common: &CommonArgs) -> Result<()> {
    let states = reachable_states(args.size, args.win_length)?;
    let selected: Vec<&GameState> = states
        .iter()
        .filter(|s| s.occupied_count() >= args.min_marks && !s.is_terminal())
        .collect();

    let pb = if common.json {
        ProgressBar::hidden()
    } else {
        create_progress(selected.len() as u64, "positions")
    };
    let report = verify_value_agreement(selected.iter().copied(), |_| pb.inc(1));
    pb.finish_and_clear();

    if common.json {
        print_json(&report)?;
    } else {
        print_section(&format!(
            "Minimax vs alpha-beta on {}x{} (k={})",
            args.size, args.size, args.win_length
        ));
        print_kv("Reachable states", &format_number(states.len() as u64));
        print_kv("Checked", &format_number(report.checked as u64));
        print_kv("Mismatches", &report.mismatches.len().to_string());
        for mismatch in report.mismatches.iter().take(10) {
            println!(
                "    {}: minimax {} vs alpha-beta {}",
                mismatch.state, mismatch.minimax, mismatch.alpha_beta
            );
        }
    }

    if !report.is_consistent() {
        bail!(
            "{} positions where alpha-beta disagrees with minimax",
            report.mismatches.len()
        );
    }

    Ok(())
}
