//! Core value types: balls, players, visits, configuration.
//!
//! Everything here is plain data. The frame aggregate in `frame` builds on
//! these without adding behaviour to them.

pub mod ball;
pub mod config;
pub mod player;
pub mod visit;

pub use ball::{Ball, BallList, FOUL_VALUE, MAXIMUM_BREAK, RED_COUNT, TOTAL_COLOURED_VALUES};
pub use config::FrameConfig;
pub use player::PlayerId;
pub use visit::{Outcome, Shot, Visit};
