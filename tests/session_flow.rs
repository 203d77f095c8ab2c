//! Human-versus-machine sessions, explored exhaustively

use noughts::{Error, Game, Outcome, Phase, Player, Position, app::GameConfig};

/// Follow every sequence of human moves from `game`, letting the engine
/// reply, and collect how each finished game ended.
fn explore(game: Game, outcomes: &mut Vec<Outcome>) {
    match game.phase() {
        Phase::GameOver(outcome) => outcomes.push(outcome),
        Phase::AwaitingAi => {
            let mut next = game;
            next.play_ai().unwrap();
            explore(next, outcomes);
        }
        Phase::AwaitingHuman => {
            for position in game.board().legal_moves() {
                let mut next = game.clone();
                next.play_human(position).unwrap();
                explore(next, outcomes);
            }
        }
    }
}

fn all_outcomes(human: Player) -> Vec<Outcome> {
    let mut outcomes = Vec::new();
    explore(Game::new(GameConfig::new().with_human(human)), &mut outcomes);
    outcomes
}

#[test]
fn human_playing_x_never_beats_the_engine() {
    let outcomes = all_outcomes(Player::X);
    assert!(!outcomes.is_empty());
    assert!(outcomes.iter().all(|o| *o != Outcome::Win(Player::X)));
    assert!(outcomes.contains(&Outcome::Draw));
    assert!(outcomes.contains(&Outcome::Win(Player::O)));
}

#[test]
fn human_playing_o_never_beats_the_engine() {
    let outcomes = all_outcomes(Player::O);
    assert!(outcomes.iter().all(|o| *o != Outcome::Win(Player::O)));
    assert!(outcomes.contains(&Outcome::Win(Player::X)));
}

#[test]
fn history_alternates_and_matches_the_board() {
    let mut game = Game::new(GameConfig::default());
    game.play_human(Position::new(0, 0).unwrap()).unwrap();
    game.play_ai().unwrap();
    game.play_human(Position::new(2, 2).unwrap()).unwrap();
    game.play_ai().unwrap();

    let history = game.history();
    assert_eq!(history.len(), 4);
    for (i, mv) in history.iter().enumerate() {
        let expected = if i % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(mv.player, expected);
        assert_eq!(
            game.board().get(mv.position).and_then(|c| c.to_player()),
            Some(expected)
        );
    }
}

#[test]
fn finished_game_refuses_further_moves() {
    let mut game = Game::new(GameConfig::default());
    for (row, col) in [(0, 0), (0, 1), (1, 0)] {
        if game.phase() == Phase::AwaitingHuman {
            let _ = game.play_human(Position::new(row, col).unwrap());
        }
        if game.phase() == Phase::AwaitingAi {
            game.play_ai().unwrap();
        }
    }
    assert_eq!(game.phase(), Phase::GameOver(Outcome::Win(Player::O)));
    assert!(matches!(
        game.play_human(Position::new(2, 2).unwrap()),
        Err(Error::GameOver)
    ));
    assert!(matches!(game.play_ai(), Err(Error::GameOver)));
}
