//! Playing agents against each other

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{
    Result,
    ports::Agent,
    tictactoe::{Board, Move, Outcome, Player},
};

/// A finished game between two agents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub x_agent: String,
    pub o_agent: String,
    pub start: Board,
    pub moves: Vec<Move>,
    pub final_board: Board,
    pub outcome: Outcome,
}

/// Win/draw/loss tally over several games
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl SeriesSummary {
    pub fn record(&mut self, outcome: Outcome) {
        self.games += 1;
        match outcome {
            Outcome::Win(Player::X) => self.x_wins += 1,
            Outcome::Win(Player::O) => self.o_wins += 1,
            Outcome::Draw | Outcome::InProgress => self.draws += 1,
        }
    }
}

/// Alternate `x` and `o` from `start` until the board is terminal.
///
/// The side to move is inferred from the piece counts of `start`.
///
/// # Errors
///
/// - [`Error::InvalidPieceCounts`](crate::Error::InvalidPieceCounts) if `start`
///   cannot arise from X-first play
/// - any error an agent returns, including an illegal move it proposed
#[instrument(level = "debug", skip_all, fields(x = x.name(), o = o.name()))]
pub fn play_match(x: &mut dyn Agent, o: &mut dyn Agent, start: Board) -> Result<MatchRecord> {
    let mut board = start;
    let mut side = start.side_to_move()?;
    let mut moves = Vec::new();

    while !board.is_terminal() {
        let agent: &mut dyn Agent = match side {
            Player::X => &mut *x,
            Player::O => &mut *o,
        };
        let position = agent.select_move(&board, side)?;
        board = board.apply_move(position, side)?;
        debug!(agent = agent.name(), %side, %position, "agent moved");
        moves.push(Move {
            position,
            player: side,
        });
        side = side.opponent();
    }

    Ok(MatchRecord {
        x_agent: x.name().to_string(),
        o_agent: o.name().to_string(),
        start,
        moves,
        final_board: board,
        outcome: board.outcome(),
    })
}

/// Play `games` matches from the same start and tally the results
pub fn play_series(
    x: &mut dyn Agent,
    o: &mut dyn Agent,
    start: Board,
    games: usize,
) -> Result<SeriesSummary> {
    let mut summary = SeriesSummary::default();
    for _ in 0..games {
        let record = play_match(x, o, start)?;
        summary.record(record.outcome);
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Error,
        pipeline::{OptimalAgent, RandomAgent},
        tictactoe::Position,
    };

    #[test]
    fn optimal_self_play_draws() {
        let mut x = OptimalAgent::default();
        let mut o = OptimalAgent::default();
        let record = play_match(&mut x, &mut o, Board::empty()).unwrap();

        assert_eq!(record.outcome, Outcome::Draw);
        assert_eq!(record.moves.len(), 9);
        assert_eq!(record.moves[0].position, Position { row: 0, col: 0 });
        assert_eq!(record.x_agent, "Optimal");
    }

    #[test]
    fn match_continues_from_given_position() {
        // X to move and wins at once
        let start = Board::from_string("XX.OO....").unwrap();
        let mut x = OptimalAgent::default();
        let mut o = RandomAgent::with_seed("Random".to_string(), 3);
        let record = play_match(&mut x, &mut o, start).unwrap();

        assert_eq!(record.moves.len(), 1);
        assert_eq!(record.outcome, Outcome::Win(Player::X));
    }

    #[test]
    fn inconsistent_start_is_rejected() {
        let start = Board::from_string("XXX......").unwrap();
        let mut x = OptimalAgent::default();
        let mut o = OptimalAgent::default();
        assert!(matches!(
            play_match(&mut x, &mut o, start),
            Err(Error::InvalidPieceCounts { .. })
        ));
    }

    #[test]
    fn series_summary_tallies() {
        let mut summary = SeriesSummary::default();
        summary.record(Outcome::Win(Player::X));
        summary.record(Outcome::Draw);
        summary.record(Outcome::Win(Player::O));
        assert_eq!(
            summary,
            SeriesSummary {
                games: 3,
                x_wins: 1,
                o_wins: 1,
                draws: 1
            }
        );
    }
}
