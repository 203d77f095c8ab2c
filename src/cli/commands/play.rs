//! Play command - a human against the engine in the terminal

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use crate::{
    app::GameConfig,
    cli::output::render_board,
    search::FULL_DEPTH,
    tictactoe::{Game, Outcome, Phase, Player, Position},
};

#[derive(Parser, Debug)]
#[command(about = "Play against the engine")]
pub struct PlayArgs {
    /// Side you play (`x` moves first)
    #[arg(long, default_value = "x")]
    pub human: Player,

    /// Engine search depth in plies
    #[arg(long, short = 'd', default_value_t = FULL_DEPTH)]
    pub depth: u32,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = GameConfig::new()
        .with_human(args.human)
        .with_depth(args.depth);
    config.validate()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(config, stdin.lock(), stdout.lock())
}

/// Drive a [`Game`] from line-oriented input until the player quits or
/// input ends.
pub fn run<R: BufRead, W: Write>(config: GameConfig, mut input: R, mut out: W) -> Result<()> {
    let mut game = Game::new(config);
    writeln!(
        out,
        "You are {}. Enter moves as 'row col' (0-2), or 'q' to quit.",
        game.human()
    )?;

    loop {
        match game.phase() {
            Phase::AwaitingAi => {
                let position = game.play_ai()?;
                writeln!(out, "Machine plays {position}")?;
            }
            Phase::AwaitingHuman => {
                write!(out, "\n{}Your move: ", render_board(game.board()))?;
                out.flush()?;

                let Some(line) = read_line(&mut input)? else {
                    return Ok(());
                };
                if matches!(line.as_str(), "q" | "quit" | "exit") {
                    return Ok(());
                }

                let position = match line.parse::<Position>() {
                    Ok(position) => position,
                    Err(err) => {
                        writeln!(out, "{err}")?;
                        continue;
                    }
                };
                match game.play_human(position) {
                    Ok(_) => {}
                    Err(err) if err.is_invalid_move() => writeln!(out, "{err}")?,
                    Err(err) => return Err(err.into()),
                }
            }
            Phase::GameOver(outcome) => {
                write!(out, "\n{}", render_board(game.board()))?;
                writeln!(out, "{}", announce(outcome, game.human()))?;
                write!(out, "Play again? [y/N] ")?;
                out.flush()?;

                let answer = read_line(&mut input)?;
                if matches!(answer.as_deref(), Some("y" | "Y" | "yes")) {
                    game.reset();
                    writeln!(out, "New game.")?;
                } else {
                    return Ok(());
                }
            }
        }
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn announce(outcome: Outcome, human: Player) -> &'static str {
    match outcome {
        Outcome::Win(player) if player == human => "You win!",
        Outcome::Win(_) => "The machine wins.",
        Outcome::Draw | Outcome::InProgress => "Draw!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_script(config: GameConfig, script: &str) -> String {
        let mut out = Vec::new();
        run(config, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn scripted_game_against_engine() {
        let out = play_script(GameConfig::default(), "0 0\n0 1\n0 2\n1 0\nn\n");
        assert!(out.contains("Machine plays (1, 1)"));
        assert!(out.contains("Machine plays (0, 2)"));
        assert!(out.contains("cell is already occupied"));
        assert!(out.contains("Machine plays (2, 0)"));
        assert!(out.contains("The machine wins."));
        assert!(!out.contains("You win!"));
    }

    #[test]
    fn garbage_input_is_reported_and_quit_exits() {
        let out = play_script(GameConfig::default(), "hello\n5 5\nq\n");
        assert_eq!(out.matches("invalid position").count(), 2);
        assert!(!out.contains("Machine plays"));
    }

    #[test]
    fn play_again_resets() {
        let out = play_script(GameConfig::default(), "0 0\n0 1\n0 2\n1 0\ny\nq\n");
        assert!(out.contains("New game."));
        assert_eq!(out.matches("Play again?").count(), 1);
    }

    #[test]
    fn engine_opens_when_human_is_o() {
        let config = GameConfig::new().with_human(Player::O);
        let out = play_script(config, "");
        assert!(out.starts_with("You are O."));
        assert!(out.contains("Machine plays (0, 0)"));
    }

    #[test]
    fn announcements() {
        assert_eq!(announce(Outcome::Win(Player::X), Player::X), "You win!");
        assert_eq!(
            announce(Outcome::Win(Player::O), Player::X),
            "The machine wins."
        );
        assert_eq!(announce(Outcome::Draw, Player::O), "Draw!");
    }
}
