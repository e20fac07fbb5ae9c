//! Player identification.
//!
//! ## PlayerId
//!
//! An opaque identity supplied by the host (usually the player's name).
//! The engine only ever compares identities; it never interprets them.

use serde::{Deserialize, Serialize};

/// Identity of one of the two players in a frame.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw identity.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for PlayerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p1 = PlayerId::new("ronnie");
        let p2: PlayerId = "judd".into();

        assert_eq!(p1.as_str(), "ronnie");
        assert_ne!(p1, p2);
        assert_eq!(format!("{}", p2), "judd");
    }

    #[test]
    fn test_player_id_from_string() {
        let id = PlayerId::from(String::from("mark"));
        assert_eq!(id, PlayerId::new("mark"));
    }

    #[test]
    fn test_player_id_serialization() {
        let id = PlayerId::new("player1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"player1\"");
        let deserialized: PlayerId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
