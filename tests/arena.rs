//! Agent matches from the empty board and from mid-game positions

use noughts::{
    Board, Outcome, Player,
    pipeline::{OptimalAgent, RandomAgent, play_match, play_series},
};

#[test]
fn optimal_never_loses_to_random_as_either_side() {
    for seed in 0..10 {
        let mut optimal = OptimalAgent::default();
        let mut random = RandomAgent::with_seed("Random".to_string(), seed);

        let as_o = play_match(&mut random, &mut optimal, Board::empty()).unwrap();
        assert_ne!(as_o.outcome, Outcome::Win(Player::X), "seed {seed}");

        let as_x = play_match(&mut optimal, &mut random, Board::empty()).unwrap();
        assert_ne!(as_x.outcome, Outcome::Win(Player::O), "seed {seed}");
    }
}

#[test]
fn seeded_random_matches_replay_identically() {
    let run = || {
        let mut x = RandomAgent::with_seed("A".to_string(), 7);
        let mut o = RandomAgent::with_seed("B".to_string(), 8);
        play_match(&mut x, &mut o, Board::empty()).unwrap()
    };
    let first = run();
    let second = run();
    assert_eq!(first.moves, second.moves);
    assert_eq!(first.outcome, second.outcome);
}

#[test]
fn optimal_series_is_all_draws() {
    let mut x = OptimalAgent::default();
    let mut o = OptimalAgent::default();
    let summary = play_series(&mut x, &mut o, Board::empty(), 3).unwrap();
    assert_eq!(summary.games, 3);
    assert_eq!(summary.draws, 3);
}

#[test]
fn match_records_every_move_until_the_end() {
    let mut x = OptimalAgent::default();
    let mut o = OptimalAgent::default();
    let start = Board::from_string("X...O....").unwrap();
    let record = play_match(&mut x, &mut o, start).unwrap();

    let mut replay = start;
    for mv in &record.moves {
        replay = replay.apply_move(mv.position, mv.player).unwrap();
    }
    assert_eq!(replay, record.final_board);
    assert_eq!(record.outcome, record.final_board.outcome());
    assert!(record.outcome.is_over());
}
