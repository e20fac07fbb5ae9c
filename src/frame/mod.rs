//! The frame aggregate and everything folded from its log.
//!
//! - `state`: players, visit log, mutators, undo/redo, turn resolution
//! - `scoring`: scores, break, reds and points remaining, winner
//! - `summary`: breaks and per-player statistics
//! - `record`: serializable snapshot of the log

mod record;
mod scoring;
mod state;
mod summary;

pub use record::FrameRecord;
pub use state::MatchState;
pub use summary::{Break, FrameSummary, PlayerSummary};
