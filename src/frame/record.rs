//! Serializable snapshot of a frame's log.
//!
//! A `FrameRecord` carries the players, the rules, and the visit log. The
//! redo buffer is session state and is not recorded. Where the bytes end up
//! is up to the host.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{FrameConfig, PlayerId, Visit};
use crate::error::FrameError;

use super::state::MatchState;

/// Everything needed to rebuild a frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameRecord {
    pub player1: PlayerId,
    pub player2: PlayerId,
    pub config: FrameConfig,
    pub visits: Vector<Visit>,
}

impl FrameRecord {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, FrameError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a record produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FrameError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl MatchState {
    /// Capture the current log.
    #[must_use]
    pub fn record(&self) -> FrameRecord {
        FrameRecord {
            player1: self.player1().clone(),
            player2: self.player2().clone(),
            config: *self.config(),
            visits: self.visits().clone(),
        }
    }

    /// Rebuild a frame from a record.
    #[must_use]
    pub fn from_record(record: FrameRecord) -> Self {
        MatchState::from_visits(record.player1, record.player2, record.config, record.visits)
    }
}
