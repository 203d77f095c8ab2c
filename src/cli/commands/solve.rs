//! Solve command - value and best move for a position

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::output::{describe_value, format_positions, print_kv, print_section, render_board},
    search::{self, FULL_DEPTH, principal_variation},
    tictactoe::{Board, Player, Position},
};

#[derive(Parser, Debug)]
#[command(about = "Compute the value and optimal move of a position")]
pub struct SolveArgs {
    /// Board as nine cells in row-major order, e.g. "XO..X...." ('.' is empty)
    pub board: String,

    /// Side to move (`x` or `o`); inferred from piece counts when omitted
    #[arg(long, short = 'p')]
    pub player: Option<Player>,

    /// Search depth in plies
    #[arg(long, short = 'd', default_value_t = FULL_DEPTH)]
    pub depth: u32,

    /// Also list the value of every legal move
    #[arg(long)]
    pub all: bool,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct MoveValue {
    position: Position,
    value: i32,
}

#[derive(Serialize)]
struct SolveReport {
    board: String,
    player: Player,
    depth: u32,
    value: i32,
    best_move: Position,
    principal_variation: Vec<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    moves: Option<Vec<MoveValue>>,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let board = Board::from_string(&args.board)
        .with_context(|| format!("could not parse board '{}'", args.board))?;

    let player = match args.player {
        Some(player) => player,
        None => board
            .side_to_move()
            .context("cannot infer the side to move; pass --player")?,
    };

    if board.is_terminal() {
        bail!(
            "position is already over ({}); nothing to solve",
            board.outcome()
        );
    }

    let report = solve(&board, player, args.depth, args.all)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_section("Position");
    print!("{}", render_board(&board));
    print_kv("To move", &player.to_string());
    print_kv("Depth", &report.depth.to_string());
    print_kv(
        "Value",
        &format!("{} ({})", report.value, describe_value(report.value)),
    );
    print_kv("Best move", &report.best_move.to_string());
    print_kv("Line", &format_positions(&report.principal_variation));

    if let Some(moves) = &report.moves {
        println!("\nAll moves:");
        for mv in moves {
            let marker = if mv.position == report.best_move {
                " *"
            } else {
                ""
            };
            println!(
                "  {} -> {:>2} ({}){marker}",
                mv.position,
                mv.value,
                describe_value(mv.value)
            );
        }
    }

    Ok(())
}

fn solve(board: &Board, player: Player, depth: u32, all: bool) -> Result<SolveReport> {
    let result = search::best_move(board, player, depth)?;
    let best_move = result
        .best_move
        .context("search returned no move for a live position")?;
    let line = principal_variation(board, player, depth)?;

    let moves = all.then(|| {
        search::evaluate_moves(board, player, depth)
            .into_iter()
            .map(|(position, value)| MoveValue { position, value })
            .collect()
    });

    Ok(SolveReport {
        board: board.encode(),
        player,
        depth,
        value: result.value,
        best_move,
        principal_variation: line.iter().map(|mv| mv.position).collect(),
        moves,
    })
}
