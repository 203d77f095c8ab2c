//! Self-play command - pit two agents against each other

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::output::{print_kv, print_section, render_board},
    pipeline::{AgentKind, MatchRecord, SeriesSummary, play_match},
    search::FULL_DEPTH,
    tictactoe::Board,
};

#[derive(Parser, Debug)]
#[command(about = "Play agents against each other")]
pub struct SelfplayArgs {
    /// Starting board (nine cells, '.' for empty); defaults to the empty board
    #[arg(long, short = 'b')]
    pub board: Option<String>,

    /// Agent playing X (optimal or random)
    #[arg(long, short = 'x', default_value = "optimal")]
    pub x: AgentKind,

    /// Agent playing O (optimal or random)
    #[arg(long, short = 'o', default_value = "optimal")]
    pub o: AgentKind,

    /// Number of games to play
    #[arg(long, short = 'g', default_value_t = 1)]
    pub games: usize,

    /// Random seed for reproducibility (O's random agent uses seed + 1)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Search depth for optimal agents
    #[arg(long, short = 'd', default_value_t = FULL_DEPTH)]
    pub depth: u32,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct SelfplayReport {
    summary: SeriesSummary,
    games: Vec<MatchRecord>,
}

pub fn execute(args: SelfplayArgs) -> Result<()> {
    let start = match &args.board {
        Some(s) => Board::from_string(s).with_context(|| format!("could not parse board '{s}'"))?,
        None => Board::empty(),
    };
    if args.games == 0 {
        bail!("--games must be at least 1");
    }

    let report = run(&args, start)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    // Print the full move list only when a single game was requested
    if let [record] = report.games.as_slice() {
        print_section(&format!("{} (X) vs {} (O)", record.x_agent, record.o_agent));
        for (i, mv) in record.moves.iter().enumerate() {
            println!("  {:>2}. {} -> {}", i + 1, mv.player, mv.position);
        }
        println!();
        print!("{}", render_board(&record.final_board));
        print_kv("Result", &record.outcome.to_string());
    } else {
        print_section(&format!("{} (X) vs {} (O)", args.x, args.o));
        let s = report.summary;
        print_kv("Games", &s.games.to_string());
        print_kv("X wins", &s.x_wins.to_string());
        print_kv("O wins", &s.o_wins.to_string());
        print_kv("Draws", &s.draws.to_string());
    }

    Ok(())
}

fn run(args: &SelfplayArgs, start: Board) -> Result<SelfplayReport> {
    let mut x = args.x.build(args.depth, args.seed);
    let mut o = args.o.build(args.depth, args.seed.map(|s| s.wrapping_add(1)));

    let mut summary = SeriesSummary::default();
    let mut games = Vec::with_capacity(args.games);
    for _ in 0..args.games {
        let record = play_match(x.as_mut(), o.as_mut(), start)?;
        summary.record(record.outcome);
        games.push(record);
    }

    Ok(SelfplayReport { summary, games })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::{Outcome, Player};

    fn args(x: AgentKind, o: AgentKind, games: usize) -> SelfplayArgs {
        SelfplayArgs {
            board: None,
            x,
            o,
            games,
            seed: Some(11),
            depth: FULL_DEPTH,
            json: false,
        }
    }

    #[test]
    fn optimal_pair_always_draws() {
        let report = run(&args(AgentKind::Optimal, AgentKind::Optimal, 2), Board::empty()).unwrap();
        assert_eq!(report.summary.draws, 2);
        assert!(report.games.iter().all(|g| g.outcome == Outcome::Draw));
    }

    #[test]
    fn optimal_never_loses_to_random() {
        let report = run(&args(AgentKind::Random, AgentKind::Optimal, 20), Board::empty()).unwrap();
        assert_eq!(report.summary.games, 20);
        assert_eq!(report.summary.x_wins, 0);
        assert!(
            report
                .games
                .iter()
                .all(|g| g.outcome != Outcome::Win(Player::X))
        );
    }
}
