//! Optional rules layer.
//!
//! The frame itself records whatever it is told. Hosts that want legal play
//! enforced put a `Referee` in front of it:
//! - `ball_on`: which ball the player at the table must pot
//! - `ShotValidator`: accept or reject a shot before it is recorded
//! - `StandardRules`: shot order, foul responses, replay limit, concessions
//!
//! Validation never changes how scores or turns are folded from the log.

pub mod referee;
pub mod validator;

pub use referee::Referee;
pub use validator::{ball_on, BallOn, ShotValidator, StandardRules, MAX_FOUL_REPLAYS};
