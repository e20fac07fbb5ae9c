//! A frame guarded by a validator.

use tracing::warn;

use crate::core::{PlayerId, Shot};
use crate::error::FrameError;
use crate::frame::MatchState;

use super::validator::{ShotValidator, StandardRules};

/// Owns a `MatchState` and only records shots its validator accepts.
///
/// ```
/// use snooker_scorer::core::{Ball, Shot};
/// use snooker_scorer::rules::Referee;
///
/// let mut referee = Referee::new("player1", "player2");
/// referee.submit(Shot::Pot(Ball::Red)).unwrap();
/// assert!(referee.submit(Shot::Pot(Ball::Red)).is_err());
/// assert_eq!(referee.state().current_break(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Referee<V = StandardRules> {
    state: MatchState,
    validator: V,
}

impl Referee<StandardRules> {
    /// Standard frame under standard rules.
    #[must_use]
    pub fn new(player1: impl Into<PlayerId>, player2: impl Into<PlayerId>) -> Self {
        Self::with_validator(MatchState::new(player1, player2), StandardRules::default())
    }
}

impl<V: ShotValidator> Referee<V> {
    #[must_use]
    pub fn with_validator(state: MatchState, validator: V) -> Self {
        Self { state, validator }
    }

    /// Validate and record a shot.
    pub fn submit(&mut self, shot: Shot) -> Result<(), FrameError> {
        if let Err(violation) = self.validator.check(&self.state, &shot) {
            warn!(
                player = %self.state.current_player(),
                ?shot,
                %violation,
                "shot rejected"
            );
            return Err(violation.into());
        }
        self.state.apply(&shot);
        Ok(())
    }

    pub fn undo(&mut self) {
        self.state.undo();
    }

    pub fn redo(&mut self) {
        self.state.redo();
    }

    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Give up validation and hand back the frame.
    #[must_use]
    pub fn into_state(self) -> MatchState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Ball;
    use crate::error::RuleViolation;

    #[test]
    fn test_rejected_shot_leaves_log_untouched() {
        let mut referee = Referee::new("a", "b");
        let err = referee.submit(Shot::Pot(Ball::Pink)).unwrap_err();

        assert!(matches!(err, FrameError::Rule(RuleViolation::WrongBall { .. })));
        assert!(referee.state().visits().is_empty());
    }

    #[test]
    fn test_accepted_shots_are_recorded() {
        let mut referee = Referee::new("a", "b");
        referee.submit(Shot::Pot(Ball::Red)).unwrap();
        referee.submit(Shot::Pot(Ball::Pink)).unwrap();
        referee.submit(Shot::Miss).unwrap();

        assert_eq!(referee.state().score(&"a".into()), 7);
        assert_eq!(referee.state().current_player().as_str(), "b");
    }

    #[test]
    fn test_undo_passes_through() {
        let mut referee = Referee::new("a", "b");
        referee.submit(Shot::Pot(Ball::Red)).unwrap();
        referee.undo();
        assert!(referee.state().visits().is_empty());
        referee.redo();
        assert_eq!(referee.state().visits().len(), 1);
    }

    struct NoFouls;

    impl ShotValidator for NoFouls {
        fn check(&self, _state: &MatchState, shot: &Shot) -> Result<(), RuleViolation> {
            match shot {
                Shot::Foul => Err(RuleViolation::NoFoulToAnswer),
                _ => Ok(()),
            }
        }
    }

    #[test]
    fn test_custom_validator() {
        let mut referee = Referee::with_validator(MatchState::new("a", "b"), NoFouls);
        assert!(referee.submit(Shot::Pot(Ball::Black)).is_ok());
        assert!(referee.submit(Shot::Foul).is_err());
        assert_eq!(referee.into_state().visits().len(), 1);
    }
}
