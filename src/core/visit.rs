//! Visit representation: who acted, what happened, and what it was worth.
//!
//! A `Visit` is one immutable entry of the frame's event log. The host
//! issues `Shot` commands; the frame turns each into a `Visit` stamped with
//! the player at the table.

use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::player::PlayerId;

/// What happened during one attempt at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A ball went in.
    Pot(Ball),
    /// Nothing went in, no infraction.
    Miss,
    /// A rule infraction. The penalty goes to the opponent.
    Foul,
    /// The opponent sends the fouling player back to the table.
    FoulReplay,
    /// The opponent plays on after a foul.
    FoulContinue,
    /// The recorded player forfeits the frame.
    Concede,
}

impl Outcome {
    /// Does the player who recorded this outcome stay at the table?
    #[must_use]
    pub const fn keeps_turn(self) -> bool {
        matches!(self, Outcome::Pot(_) | Outcome::FoulContinue)
    }

    /// The ball potted, if this is a pot.
    #[must_use]
    pub const fn potted(self) -> Option<Ball> {
        match self {
            Outcome::Pot(ball) => Some(ball),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Pot(ball) => write!(f, "pot {}", ball),
            Outcome::Miss => f.write_str("miss"),
            Outcome::Foul => f.write_str("foul"),
            Outcome::FoulReplay => f.write_str("foul replay"),
            Outcome::FoulContinue => f.write_str("foul continue"),
            Outcome::Concede => f.write_str("concede"),
        }
    }
}

/// One recorded event of the frame.
///
/// `value` is the ball value for a pot, the foul penalty for a foul,
/// and 0 for everything else.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Visit {
    /// The player this event is attributed to.
    pub player: PlayerId,

    /// What happened.
    pub outcome: Outcome,

    /// Points carried by the event.
    pub value: u32,
}

impl Visit {
    #[must_use]
    pub fn pot(player: PlayerId, ball: Ball) -> Self {
        Self {
            player,
            outcome: Outcome::Pot(ball),
            value: ball.value(),
        }
    }

    #[must_use]
    pub fn foul(player: PlayerId, penalty: u32) -> Self {
        Self {
            player,
            outcome: Outcome::Foul,
            value: penalty,
        }
    }

    /// A zero-valued event (miss, foul response, concession).
    #[must_use]
    pub fn scoreless(player: PlayerId, outcome: Outcome) -> Self {
        Self {
            player,
            outcome,
            value: 0,
        }
    }

    /// Is this a pot of `ball`?
    #[must_use]
    pub fn is_pot_of(&self, ball: Ball) -> bool {
        self.outcome == Outcome::Pot(ball)
    }

    #[must_use]
    pub fn is_red_pot(&self) -> bool {
        self.is_pot_of(Ball::Red)
    }

    #[must_use]
    pub fn is_pot(&self) -> bool {
        matches!(self.outcome, Outcome::Pot(_))
    }
}

/// A command issued by the host.
///
/// `Shot::Concede` names the conceding player explicitly; every other
/// shot is attributed to whoever is at the table.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shot {
    Pot(Ball),
    Miss,
    Foul,
    FoulReplay,
    FoulContinue,
    Concede(PlayerId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pot_visit_carries_ball_value() {
        let visit = Visit::pot(PlayerId::new("a"), Ball::Pink);
        assert_eq!(visit.value, 6);
        assert!(visit.is_pot());
        assert!(visit.is_pot_of(Ball::Pink));
        assert!(!visit.is_red_pot());
    }

    #[test]
    fn test_foul_visit_carries_penalty() {
        let visit = Visit::foul(PlayerId::new("a"), 4);
        assert_eq!(visit.outcome, Outcome::Foul);
        assert_eq!(visit.value, 4);
        assert!(!visit.is_pot());
    }

    #[test]
    fn test_scoreless_visit() {
        let visit = Visit::scoreless(PlayerId::new("a"), Outcome::Miss);
        assert_eq!(visit.value, 0);
    }

    #[test]
    fn test_keeps_turn() {
        assert!(Outcome::Pot(Ball::Red).keeps_turn());
        assert!(Outcome::FoulContinue.keeps_turn());
        assert!(!Outcome::Miss.keeps_turn());
        assert!(!Outcome::Foul.keeps_turn());
        assert!(!Outcome::FoulReplay.keeps_turn());
        assert!(!Outcome::Concede.keeps_turn());
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Pot(Ball::Black).to_string(), "pot black");
        assert_eq!(Outcome::FoulReplay.to_string(), "foul replay");
    }

    #[test]
    fn test_visit_serialization() {
        let visit = Visit::pot(PlayerId::new("a"), Ball::Green);
        let json = serde_json::to_string(&visit).unwrap();
        let deserialized: Visit = serde_json::from_str(&json).unwrap();
        assert_eq!(visit, deserialized);
    }
}
