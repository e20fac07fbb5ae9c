//! Frame statistics derived from the log: breaks, pot tallies, fouls.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Ball, BallList, Outcome, PlayerId};

use super::state::MatchState;

/// A maximal run of consecutive pots by one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Break {
    pub player: PlayerId,
    pub points: u32,
    pub balls: BallList,
}

/// Per-player figures for a frame.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub score: u32,
    pub highest_break: u32,
    pub fouls: u32,
    pub pots: FxHashMap<Ball, u32>,
}

impl PlayerSummary {
    /// How many times `ball` was potted.
    #[must_use]
    pub fn pots_of(&self, ball: Ball) -> u32 {
        self.pots.get(&ball).copied().unwrap_or(0)
    }
}

/// Statistics for both players.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSummary {
    pub player1: PlayerSummary,
    pub player2: PlayerSummary,
    pub winner: Option<PlayerId>,
}

impl FrameSummary {
    #[must_use]
    pub fn from_state(state: &MatchState) -> Self {
        let breaks = state.breaks();
        let summarise = |player: &PlayerId| {
            let mut summary = PlayerSummary {
                score: state.score(player),
                highest_break: breaks
                    .iter()
                    .filter(|b| b.player == *player)
                    .map(|b| b.points)
                    .max()
                    .unwrap_or(0),
                ..PlayerSummary::default()
            };

            for visit in state.visits().iter().filter(|v| v.player == *player) {
                match visit.outcome {
                    Outcome::Pot(ball) => *summary.pots.entry(ball).or_insert(0) += 1,
                    Outcome::Foul => summary.fouls += 1,
                    _ => {}
                }
            }
            summary
        };

        Self {
            player1: summarise(state.player1()),
            player2: summarise(state.player2()),
            winner: state.winner().cloned(),
        }
    }
}

impl MatchState {
    /// Every break in the frame, oldest first. The last one may still be
    /// in progress.
    #[must_use]
    pub fn breaks(&self) -> Vec<Break> {
        let mut breaks: Vec<Break> = Vec::new();
        let mut in_break = false;

        for visit in self.visits() {
            let Some(ball) = visit.outcome.potted() else {
                in_break = false;
                continue;
            };

            let extends = in_break && breaks.last().is_some_and(|b| b.player == visit.player);
            match breaks.last_mut() {
                Some(current) if extends => {
                    current.points += visit.value;
                    current.balls.push(ball);
                }
                _ => breaks.push(Break {
                    player: visit.player.clone(),
                    points: visit.value,
                    balls: BallList::from_slice(&[ball]),
                }),
            }
            in_break = true;
        }

        breaks
    }

    /// Highest completed or ongoing break for `player`.
    #[must_use]
    pub fn highest_break(&self, player: &PlayerId) -> u32 {
        self.breaks()
            .into_iter()
            .filter(|b| b.player == *player)
            .map(|b| b.points)
            .max()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn summary(&self) -> FrameSummary {
        FrameSummary::from_state(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(name: &str) -> PlayerId {
        PlayerId::new(name)
    }

    #[test]
    fn test_breaks_split_on_non_pots() {
        let mut frame = MatchState::new("a", "b");
        frame.pot(Ball::Red);
        frame.pot(Ball::Black);
        frame.miss();
        frame.pot(Ball::Red);
        frame.pot(Ball::Pink);
        frame.pot(Ball::Red);

        let breaks = frame.breaks();
        assert_eq!(breaks.len(), 2);
        assert_eq!(breaks[0].player, p("a"));
        assert_eq!(breaks[0].points, 8);
        assert_eq!(breaks[1].player, p("b"));
        assert_eq!(breaks[1].points, 8);
        assert_eq!(breaks[1].balls.as_slice(), &[Ball::Red, Ball::Pink, Ball::Red]);
    }

    #[test]
    fn test_last_break_matches_current_break() {
        let mut frame = MatchState::new("a", "b");
        frame.pot(Ball::Red);
        frame.pot(Ball::Blue);

        assert_eq!(frame.breaks().last().map(|b| b.points), Some(frame.current_break()));
    }

    #[test]
    fn test_foul_continue_starts_new_break() {
        let mut frame = MatchState::new("a", "b");
        frame.pot(Ball::Red);
        frame.foul();
        frame.foul_continue();
        frame.pot(Ball::Red);

        let breaks = frame.breaks();
        assert_eq!(breaks.len(), 2);
        assert_eq!(frame.highest_break(&p("a")), 1);
        assert_eq!(frame.highest_break(&p("b")), 1);
    }

    #[test]
    fn test_summary() {
        let mut frame = MatchState::new("a", "b");
        frame.pot(Ball::Red);
        frame.pot(Ball::Black);
        frame.pot(Ball::Red);
        frame.foul();
        frame.pot(Ball::Red);
        frame.pot(Ball::Pink);

        let summary = frame.summary();
        assert_eq!(summary.player1.score, 9);
        assert_eq!(summary.player1.highest_break, 9);
        assert_eq!(summary.player1.fouls, 1);
        assert_eq!(summary.player1.pots_of(Ball::Red), 2);
        assert_eq!(summary.player1.pots_of(Ball::Green), 0);

        assert_eq!(summary.player2.score, 11);
        assert_eq!(summary.player2.highest_break, 7);
        assert_eq!(summary.player2.fouls, 0);
        assert_eq!(summary.winner, None);
    }
}
