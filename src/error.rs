//! Error types.
//!
//! The frame's own mutators never fail. Errors come from the edges: turning
//! raw host input into engine types, decoding records, and the optional
//! rules layer.

use thiserror::Error;

use crate::core::{Ball, PlayerId};
use crate::rules::BallOn;

/// Errors surfaced to hosts of the engine.
#[derive(Error, Debug)]
pub enum FrameError {
    #[error("no ball is worth {0} points")]
    UnknownBallValue(u32),

    #[error("failed to encode or decode frame record: {0}")]
    Codec(#[from] bincode::Error),

    #[error("illegal shot: {0}")]
    Rule(#[from] RuleViolation),
}

/// A shot rejected by a `ShotValidator`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleViolation {
    #[error("the frame is already decided")]
    FrameOver,

    #[error("{potted} potted but the ball on was {expected}")]
    WrongBall { expected: BallOn, potted: Ball },

    #[error("no foul to respond to")]
    NoFoulToAnswer,

    #[error("{player} has already been asked to replay {limit} times")]
    ReplayLimitReached { player: PlayerId, limit: u32 },

    #[error("{0} is not playing in this frame")]
    UnknownPlayer(PlayerId),
}

impl RuleViolation {
    /// Could a different shot from the same position be accepted?
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, RuleViolation::FrameOver)
    }
}
