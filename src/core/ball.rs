//! Balls on the table and the fixed values the scoring folds rely on.
//!
//! ## Values
//!
//! | Ball   | Points |
//! |--------|--------|
//! | Red    | 1      |
//! | Yellow | 2      |
//! | Green  | 3      |
//! | Brown  | 4      |
//! | Blue   | 5      |
//! | Pink   | 6      |
//! | Black  | 7      |
//!
//! Colours are cleared in ascending value order once the reds are gone,
//! so "every colour worth more than the last one potted" is exactly the
//! set still on the table.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::FrameError;

/// Penalty awarded to the opponent for a foul.
pub const FOUL_VALUE: u32 = 4;

/// Reds on the table at the start of a frame.
pub const RED_COUNT: u32 = 15;

/// Yellow + Green + Brown + Blue + Pink + Black.
pub const TOTAL_COLOURED_VALUES: u32 = 2 + 3 + 4 + 5 + 6 + 7;

/// Highest possible break: every red followed by the black, then all colours.
pub const MAXIMUM_BREAK: u32 = RED_COUNT + RED_COUNT * 7 + TOTAL_COLOURED_VALUES;

/// A ball that can be potted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Ball {
    Red,
    Yellow,
    Green,
    Brown,
    Blue,
    Pink,
    Black,
}

/// A short list of balls, inline up to seven.
pub type BallList = SmallVec<[Ball; 7]>;

impl Ball {
    /// Every ball kind, cheapest first.
    pub const ALL: [Ball; 7] = [
        Ball::Red,
        Ball::Yellow,
        Ball::Green,
        Ball::Brown,
        Ball::Blue,
        Ball::Pink,
        Ball::Black,
    ];

    /// The colours in the order they must be cleared.
    pub const COLOURS: [Ball; 6] = [
        Ball::Yellow,
        Ball::Green,
        Ball::Brown,
        Ball::Blue,
        Ball::Pink,
        Ball::Black,
    ];

    /// Point value of this ball.
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Ball::Red => 1,
            Ball::Yellow => 2,
            Ball::Green => 3,
            Ball::Brown => 4,
            Ball::Blue => 5,
            Ball::Pink => 6,
            Ball::Black => 7,
        }
    }

    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Ball::Red)
    }

    #[must_use]
    pub const fn is_colour(self) -> bool {
        !self.is_red()
    }

    /// Colours worth strictly more than `value`, in clearance order.
    ///
    /// ```
    /// use snooker_scorer::core::Ball;
    ///
    /// let left = Ball::colours_above(Ball::Blue.value());
    /// assert_eq!(left.as_slice(), &[Ball::Pink, Ball::Black]);
    /// ```
    #[must_use]
    pub fn colours_above(value: u32) -> BallList {
        Ball::COLOURS
            .iter()
            .copied()
            .filter(|ball| ball.value() > value)
            .collect()
    }

    /// Sum of the values of a set of balls.
    #[must_use]
    pub fn total(balls: &[Ball]) -> u32 {
        balls.iter().map(|ball| ball.value()).sum()
    }
}

impl TryFrom<u32> for Ball {
    type Error = FrameError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Ball::ALL
            .iter()
            .copied()
            .find(|ball| ball.value() == value)
            .ok_or(FrameError::UnknownBallValue(value))
    }
}

impl std::fmt::Display for Ball {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Ball::Red => "red",
            Ball::Yellow => "yellow",
            Ball::Green => "green",
            Ball::Brown => "brown",
            Ball::Blue => "blue",
            Ball::Pink => "pink",
            Ball::Black => "black",
        };
        f.write_str(name)
    }
}
