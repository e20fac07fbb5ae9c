//! # snooker-scorer
//!
//! Scoring and turn management for a two-player snooker frame.
//!
//! ## Design Principles
//!
//! 1. **Event-Sourced**: The frame stores an append-only log of visits.
//!    Whose turn it is, the scores, the break, and what is left on the
//!    table are folded from the log on every read and never stored.
//!
//! 2. **Permissive Core**: `MatchState` records whatever the host tells it.
//!    Legal-play enforcement lives in the separate `rules` layer.
//!
//! 3. **Linear History**: Undo and redo move visits between two stacks.
//!    Any fresh visit discards the redo stack.
//!
//! ## Modules
//!
//! - `core`: Balls, players, visits, shots, configuration
//! - `frame`: The `MatchState` aggregate, its folds, statistics, records
//! - `rules`: Optional shot validation and the `Referee` wrapper
//! - `error`: Error types
//!
//! ## Example
//!
//! ```
//! use snooker_scorer::{Ball, MatchState};
//!
//! let mut frame = MatchState::new("player1", "player2");
//! frame.pot(Ball::Red);
//! frame.pot(Ball::Pink);
//! frame.pot(Ball::Red);
//!
//! assert_eq!(frame.current_break(), 8);
//! assert_eq!(frame.red_remaining(), 13);
//!
//! frame.foul();
//! assert_eq!(frame.current_player().as_str(), "player2");
//! assert_eq!(frame.score(&"player2".into()), 4);
//! ```

pub mod core;
pub mod error;
pub mod frame;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Ball, BallList, FrameConfig, Outcome, PlayerId, Shot, Visit,
    FOUL_VALUE, MAXIMUM_BREAK, RED_COUNT, TOTAL_COLOURED_VALUES,
};

pub use crate::error::{FrameError, RuleViolation};

pub use crate::frame::{Break, FrameRecord, FrameSummary, MatchState, PlayerSummary};

pub use crate::rules::{ball_on, BallOn, Referee, ShotValidator, StandardRules};
