//! noughts CLI - optimal tic-tac-toe from the command line
//!
//! - `solve`: value and best move for any position
//! - `play`: a game against the engine in the terminal
//! - `selfplay`: optimal and random agents against each other
//! - `verify`: alpha-beta against plain minimax over every reachable board

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Exhaustive alpha-beta tic-tac-toe", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG wins
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a position
    Solve(noughts::cli::commands::solve::SolveArgs),

    /// Play against the engine
    Play(noughts::cli::commands::play::PlayArgs),

    /// Run agent-versus-agent games
    Selfplay(noughts::cli::commands::selfplay::SelfplayArgs),

    /// Check pruning against plain minimax
    Verify(noughts::cli::commands::verify::VerifyArgs),
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Solve(args) => noughts::cli::commands::solve::execute(args),
        Commands::Play(args) => noughts::cli::commands::play::execute(args),
        Commands::Selfplay(args) => noughts::cli::commands::selfplay::execute(args),
        Commands::Verify(args) => noughts::cli::commands::verify::execute(args),
    }
}
