//! Verify command - pruned search against plain minimax over every position

use anyhow::{Result, bail};
use clap::Parser;
use tracing::info;

use crate::{
    cli::output::{create_position_progress, format_number, print_kv, print_section},
    search::{FULL_DEPTH, compare_with_minimax},
    tictactoe::{format_board, reachable_positions},
};

#[derive(Parser, Debug)]
#[command(about = "Check that alpha-beta pruning agrees with plain minimax")]
pub struct VerifyArgs {
    /// Search depth in plies
    #[arg(long, short = 'd', default_value_t = FULL_DEPTH)]
    pub depth: u32,

    /// Hide the progress bar
    #[arg(long)]
    pub quiet: bool,
}

pub fn execute(args: VerifyArgs) -> Result<()> {
    let positions = reachable_positions();
    let live = positions.iter().filter(|b| !b.is_terminal()).count();
    info!(
        positions = positions.len(),
        live,
        depth = args.depth,
        "verifying search"
    );

    let pb = if args.quiet {
        None
    } else {
        Some(create_position_progress(live as u64)?)
    };
    let report = compare_with_minimax(&positions, args.depth, || {
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    });
    if let Some(pb) = pb {
        pb.finish_with_message("done");
    }

    print_section("Alpha-beta vs minimax");
    print_kv("Depth", &report.depth.to_string());
    print_kv("Reachable boards", &format_number(positions.len() as u64));
    print_kv("Searched boards", &format_number(report.positions as u64));
    print_kv("Minimax nodes", &format_number(report.unpruned.nodes));
    print_kv("Alpha-beta nodes", &format_number(report.pruned.nodes));
    print_kv("Cutoffs", &format_number(report.pruned.cutoffs));
    print_kv(
        "Nodes saved",
        &format!("{:.1}%", report.node_savings() * 100.0),
    );

    if !report.is_consistent() {
        for mismatch in &report.mismatches {
            println!(
                "  mismatch on {} ({} to move): pruned {:?} vs unpruned {:?}",
                format_board(&mismatch.board),
                mismatch.side,
                mismatch.pruned,
                mismatch.unpruned
            );
        }
        bail!(
            "{} position(s) where pruning changed the result",
            report.mismatches.len()
        );
    }

    println!("\nAll positions agree.");
    Ok(())
}
