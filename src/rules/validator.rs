//! Shot validation for hosts that want real play enforced.
//!
//! `MatchState` accepts any sequence of shots. A `ShotValidator` inspects the
//! frame before a shot is applied and may reject it. Validators never touch
//! the log themselves; `Referee` applies accepted shots.
//!
//! ## Implementation Notes
//!
//! - `check` must be pure: same state and shot, same answer
//! - Validators see the frame *before* the shot is recorded

use serde::{Deserialize, Serialize};

use crate::core::{Ball, Outcome, Shot};
use crate::error::RuleViolation;
use crate::frame::MatchState;

/// Replays a fouling player can be forced into before the opponent must
/// play on.
pub const MAX_FOUL_REPLAYS: u32 = 3;

/// The ball the player at the table must pot next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BallOn {
    /// Any red.
    Red,
    /// Any colour (the colour after a red).
    AnyColour,
    /// One specific colour (clearing the colours in order).
    Colour(Ball),
}

impl BallOn {
    /// Is potting `ball` legal?
    #[must_use]
    pub fn allows(self, ball: Ball) -> bool {
        match self {
            BallOn::Red => ball.is_red(),
            BallOn::AnyColour => ball.is_colour(),
            BallOn::Colour(colour) => ball == colour,
        }
    }
}

impl std::fmt::Display for BallOn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BallOn::Red => f.write_str("a red"),
            BallOn::AnyColour => f.write_str("a colour"),
            BallOn::Colour(ball) => write!(f, "the {}", ball),
        }
    }
}

/// The ball on for the player at the table, or `None` once nothing is left.
#[must_use]
pub fn ball_on(state: &MatchState) -> Option<BallOn> {
    if let Some(last) = state.last_visit() {
        if last.is_red_pot() && last.player == *state.current_player() {
            return Some(BallOn::AnyColour);
        }
    }

    if state.red_remaining() > 0 {
        return Some(BallOn::Red);
    }

    match state.colours_remaining().first() {
        Some(&colour) => Some(BallOn::Colour(colour)),
        // Only reachable with a re-spotted black.
        None if state.points_remaining() > 0 => Some(BallOn::Colour(Ball::Black)),
        None => None,
    }
}

/// Decides whether a shot may be recorded.
pub trait ShotValidator {
    /// Check `shot` against the frame as it stands.
    fn check(&self, state: &MatchState, shot: &Shot) -> Result<(), RuleViolation>;
}

/// Standard snooker shot order and foul-response rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StandardRules {
    /// Consecutive replays a single fouler can be made to take.
    pub max_foul_replays: u32,
}

impl Default for StandardRules {
    fn default() -> Self {
        Self {
            max_foul_replays: MAX_FOUL_REPLAYS,
        }
    }
}

impl StandardRules {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_foul_replays(mut self, max: u32) -> Self {
        self.max_foul_replays = max;
        self
    }

    fn check_pot(&self, state: &MatchState, ball: Ball) -> Result<(), RuleViolation> {
        match ball_on(state) {
            Some(on) if on.allows(ball) => Ok(()),
            Some(on) => Err(RuleViolation::WrongBall {
                expected: on,
                potted: ball,
            }),
            None => Err(RuleViolation::FrameOver),
        }
    }

    fn check_replay(&self, state: &MatchState) -> Result<(), RuleViolation> {
        let log = state.visits();
        let Some(foul) = log.last() else {
            return Err(RuleViolation::NoFoulToAnswer);
        };

        // Walk back over earlier (foul, replay) pairs by the same offender.
        let mut replays = 0;
        let mut i = log.len() - 1;
        while i >= 2
            && log[i - 1].outcome == Outcome::FoulReplay
            && log[i - 2].outcome == Outcome::Foul
            && log[i - 2].player == foul.player
        {
            replays += 1;
            i -= 2;
        }

        if replays >= self.max_foul_replays {
            return Err(RuleViolation::ReplayLimitReached {
                player: foul.player.clone(),
                limit: self.max_foul_replays,
            });
        }
        Ok(())
    }
}

impl ShotValidator for StandardRules {
    fn check(&self, state: &MatchState, shot: &Shot) -> Result<(), RuleViolation> {
        if state.is_over() {
            return Err(RuleViolation::FrameOver);
        }

        match shot {
            Shot::Pot(ball) => self.check_pot(state, *ball),
            Shot::Miss | Shot::Foul => Ok(()),
            Shot::FoulReplay | Shot::FoulContinue => {
                let answers_foul = state
                    .last_visit()
                    .is_some_and(|visit| visit.outcome == Outcome::Foul);
                if !answers_foul {
                    return Err(RuleViolation::NoFoulToAnswer);
                }
                if *shot == Shot::FoulReplay {
                    self.check_replay(state)?;
                }
                Ok(())
            }
            Shot::Concede(player) if state.is_participant(player) => Ok(()),
            Shot::Concede(player) => Err(RuleViolation::UnknownPlayer(player.clone())),
        }
    }
}
