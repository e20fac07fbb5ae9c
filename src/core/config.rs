//! Frame configuration.
//!
//! The defaults reproduce a standard fifteen-red frame. Hosts can change
//! the red count (six-red snooker), the foul penalty, or opt into
//! re-spotting the black on a tie. The configuration is fixed for the
//! lifetime of a frame.
//!
//! ```
//! use snooker_scorer::core::FrameConfig;
//!
//! let six_reds = FrameConfig::default().with_red_count(6);
//! assert_eq!(six_reds.red_count, 6);
//! assert_eq!(six_reds.maximum_break(), 6 + 6 * 7 + 27);
//! ```

use serde::{Deserialize, Serialize};

use super::ball::{Ball, FOUL_VALUE, RED_COUNT, TOTAL_COLOURED_VALUES};

/// Rules that parameterise the scoring folds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Reds racked at the start of the frame.
    pub red_count: u32,

    /// Points awarded to the opponent for every foul.
    pub foul_value: u32,

    /// Keep the frame open on a tie after the final black.
    pub respot_black_on_tie: bool,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            red_count: RED_COUNT,
            foul_value: FOUL_VALUE,
            respot_black_on_tie: false,
        }
    }
}

impl FrameConfig {
    /// Set the number of reds.
    #[must_use]
    pub fn with_red_count(mut self, red_count: u32) -> Self {
        self.red_count = red_count;
        self
    }

    /// Set the foul penalty.
    #[must_use]
    pub fn with_foul_value(mut self, foul_value: u32) -> Self {
        self.foul_value = foul_value;
        self
    }

    /// Re-spot the black when the scores are level at the end.
    #[must_use]
    pub fn with_respot_black(mut self) -> Self {
        self.respot_black_on_tie = true;
        self
    }

    /// Points available from a full rack.
    #[must_use]
    pub fn maximum_break(&self) -> u32 {
        self.red_count + self.red_count * Ball::Black.value() + TOTAL_COLOURED_VALUES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FrameConfig::default();
        assert_eq!(config.red_count, 15);
        assert_eq!(config.foul_value, 4);
        assert!(!config.respot_black_on_tie);
        assert_eq!(config.maximum_break(), 147);
    }

    #[test]
    fn test_builder() {
        let config = FrameConfig::default()
            .with_red_count(10)
            .with_foul_value(5)
            .with_respot_black();

        assert_eq!(config.red_count, 10);
        assert_eq!(config.foul_value, 5);
        assert!(config.respot_black_on_tie);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: FrameConfig = serde_json::from_str(r#"{ "red_count": 6 }"#).unwrap();
        assert_eq!(config.red_count, 6);
        assert_eq!(config.foul_value, FOUL_VALUE);
        assert!(!config.respot_black_on_tie);
    }
}
