//! The frame aggregate: two players, a visit log, and a redo buffer.
//!
//! ## Event log
//!
//! Every mutator appends exactly one `Visit` attributed to the player at the
//! table when it was called. Nothing else is stored: whose turn it is, the
//! scores, and the break are all folded from the log on read (see
//! `scoring`).
//!
//! ## Undo / redo
//!
//! Two stacks with move-on-pop semantics. `undo` moves the last visit to
//! the redo buffer, `redo` moves it back. Appending a fresh visit clears
//! the redo buffer, so history is linear.
//!
//! The log is an `im::Vector` so a whole frame can be snapshotted in O(1)
//! (e.g. for "what if" previews in a host UI).

use im::Vector;
use tracing::{debug, trace};

use crate::core::{Ball, FrameConfig, Outcome, PlayerId, Shot, Visit};

/// Event-sourced state of a single frame.
#[derive(Clone, Debug)]
pub struct MatchState {
    player1: PlayerId,
    player2: PlayerId,
    config: FrameConfig,

    /// Append-only except for `undo`.
    log: Vector<Visit>,

    /// Visits popped by `undo`, most recent last.
    redo_buffer: Vec<Visit>,
}

impl MatchState {
    /// Start a standard frame. `player1` breaks off.
    #[must_use]
    pub fn new(player1: impl Into<PlayerId>, player2: impl Into<PlayerId>) -> Self {
        Self::with_config(player1, player2, FrameConfig::default())
    }

    /// Start a frame with custom rules.
    #[must_use]
    pub fn with_config(
        player1: impl Into<PlayerId>,
        player2: impl Into<PlayerId>,
        config: FrameConfig,
    ) -> Self {
        Self {
            player1: player1.into(),
            player2: player2.into(),
            config,
            log: Vector::new(),
            redo_buffer: Vec::new(),
        }
    }

    /// Rebuild a frame from an existing log. The redo buffer starts empty.
    #[must_use]
    pub fn from_visits(
        player1: PlayerId,
        player2: PlayerId,
        config: FrameConfig,
        visits: impl IntoIterator<Item = Visit>,
    ) -> Self {
        Self {
            player1,
            player2,
            config,
            log: visits.into_iter().collect(),
            redo_buffer: Vec::new(),
        }
    }

    // === Players ===

    #[must_use]
    pub fn player1(&self) -> &PlayerId {
        &self.player1
    }

    #[must_use]
    pub fn player2(&self) -> &PlayerId {
        &self.player2
    }

    /// The other player. Any identity that is not `player1` maps to `player1`.
    #[must_use]
    pub fn opponent_of(&self, player: &PlayerId) -> &PlayerId {
        if *player == self.player1 {
            &self.player2
        } else {
            &self.player1
        }
    }

    /// Is `player` one of the two participants?
    #[must_use]
    pub fn is_participant(&self, player: &PlayerId) -> bool {
        *player == self.player1 || *player == self.player2
    }

    /// Whose turn it is, derived from the last visit only.
    ///
    /// A pot or a foul-continue keeps the recorded player at the table;
    /// anything else hands the table to the other player. A foul-replay is
    /// recorded against the opponent who asked for it, so the turn returns
    /// to the player who fouled.
    #[must_use]
    pub fn current_player(&self) -> &PlayerId {
        match self.log.last() {
            None => &self.player1,
            Some(visit) if visit.outcome.keeps_turn() => &visit.player,
            Some(visit) => self.opponent_of(&visit.player),
        }
    }

    // === Log access ===

    #[must_use]
    pub fn config(&self) -> &FrameConfig {
        &self.config
    }

    /// The visit log, oldest first.
    #[must_use]
    pub fn visits(&self) -> &Vector<Visit> {
        &self.log
    }

    #[must_use]
    pub fn last_visit(&self) -> Option<&Visit> {
        self.log.last()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.log.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo_buffer.is_empty()
    }

    // === Mutators ===

    /// The player at the table potted `ball`.
    pub fn pot(&mut self, ball: Ball) {
        let visit = Visit::pot(self.current_player().clone(), ball);
        self.append(visit);
    }

    /// The player at the table missed.
    pub fn miss(&mut self) {
        self.append_scoreless(Outcome::Miss);
    }

    /// The player at the table fouled. The penalty goes to the opponent.
    pub fn foul(&mut self) {
        let visit = Visit::foul(self.current_player().clone(), self.config.foul_value);
        self.append(visit);
    }

    /// After a foul, the opponent sends the offender back to the table.
    pub fn foul_replay(&mut self) {
        self.append_scoreless(Outcome::FoulReplay);
    }

    /// After a foul, the opponent elects to play on.
    pub fn foul_continue(&mut self) {
        self.append_scoreless(Outcome::FoulContinue);
    }

    /// `player` forfeits the frame. The identity is not checked.
    pub fn concede(&mut self, player: impl Into<PlayerId>) {
        self.append(Visit::scoreless(player.into(), Outcome::Concede));
    }

    /// Dispatch a host command to the matching mutator.
    pub fn apply(&mut self, shot: &Shot) {
        match shot {
            Shot::Pot(ball) => self.pot(*ball),
            Shot::Miss => self.miss(),
            Shot::Foul => self.foul(),
            Shot::FoulReplay => self.foul_replay(),
            Shot::FoulContinue => self.foul_continue(),
            Shot::Concede(player) => self.concede(player.clone()),
        }
    }

    /// Take back the most recent visit. No-op on an empty log.
    pub fn undo(&mut self) {
        if let Some(visit) = self.log.pop_back() {
            trace!(player = %visit.player, outcome = %visit.outcome, "undo");
            self.redo_buffer.push(visit);
        }
    }

    /// Restore the most recently undone visit. No-op if nothing was undone.
    pub fn redo(&mut self) {
        if let Some(visit) = self.redo_buffer.pop() {
            trace!(player = %visit.player, outcome = %visit.outcome, "redo");
            self.log.push_back(visit);
        }
    }

    fn append_scoreless(&mut self, outcome: Outcome) {
        let visit = Visit::scoreless(self.current_player().clone(), outcome);
        self.append(visit);
    }

    fn append(&mut self, visit: Visit) {
        debug!(
            player = %visit.player,
            outcome = %visit.outcome,
            value = visit.value,
            "visit recorded"
        );
        self.log.push_back(visit);
        self.redo_buffer.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> MatchState {
        MatchState::new("player1", "player2")
    }

    #[test]
    fn test_player1_breaks_off() {
        let frame = frame();
        assert_eq!(frame.current_player().as_str(), "player1");
        assert!(frame.visits().is_empty());
    }

    #[test]
    fn test_pot_keeps_turn() {
        let mut frame = frame();
        frame.pot(Ball::Red);
        assert_eq!(frame.current_player().as_str(), "player1");
    }

    #[test]
    fn test_miss_passes_turn() {
        let mut frame = frame();
        frame.miss();
        assert_eq!(frame.current_player().as_str(), "player2");
        frame.miss();
        assert_eq!(frame.current_player().as_str(), "player1");
    }

    #[test]
    fn test_foul_passes_turn() {
        let mut frame = frame();
        frame.foul();
        assert_eq!(frame.current_player().as_str(), "player2");
    }

    #[test]
    fn test_foul_continue_keeps_opponent_at_table() {
        let mut frame = frame();
        frame.foul();
        frame.foul_continue();

        let last = frame.last_visit().unwrap();
        assert_eq!(last.player.as_str(), "player2");
        assert_eq!(frame.current_player().as_str(), "player2");
    }

    #[test]
    fn test_foul_replay_returns_table_to_offender() {
        let mut frame = frame();
        frame.foul();
        frame.foul_replay();

        let last = frame.last_visit().unwrap();
        assert_eq!(last.player.as_str(), "player2");
        assert_eq!(frame.current_player().as_str(), "player1");
    }

    #[test]
    fn test_visit_stamped_with_player_before_append() {
        let mut frame = frame();
        frame.miss();
        frame.pot(Ball::Red);

        let players: Vec<_> = frame.visits().iter().map(|v| v.player.as_str()).collect();
        assert_eq!(players, vec!["player1", "player2"]);
    }

    #[test]
    fn test_foul_uses_configured_penalty() {
        let config = FrameConfig::default().with_foul_value(7);
        let mut frame = MatchState::with_config("a", "b", config);
        frame.foul();
        assert_eq!(frame.last_visit().unwrap().value, 7);
    }

    #[test]
    fn test_concede_records_named_player() {
        let mut frame = frame();
        frame.concede("player2");
        let last = frame.last_visit().unwrap();
        assert_eq!(last.outcome, Outcome::Concede);
        assert_eq!(last.player.as_str(), "player2");
        assert_eq!(last.value, 0);
    }

    #[test]
    fn test_opponent_of_unknown_maps_to_player1() {
        let frame = frame();
        assert_eq!(frame.opponent_of(&"player1".into()).as_str(), "player2");
        assert_eq!(frame.opponent_of(&"player2".into()).as_str(), "player1");
        assert_eq!(frame.opponent_of(&"stranger".into()).as_str(), "player1");
        assert!(!frame.is_participant(&"stranger".into()));
    }

    #[test]
    fn test_undo_redo_round_trip() {
        let mut frame = frame();
        frame.pot(Ball::Red);
        frame.pot(Ball::Black);
        let before = frame.visits().clone();

        frame.undo();
        assert_eq!(frame.visits().len(), 1);
        assert!(frame.can_redo());

        frame.redo();
        assert_eq!(frame.visits(), &before);
        assert!(!frame.can_redo());
    }

    #[test]
    fn test_undo_redo_on_empty_are_noops() {
        let mut frame = frame();
        frame.undo();
        frame.redo();
        assert!(frame.visits().is_empty());
        assert!(!frame.can_undo());
    }

    #[test]
    fn test_new_visit_clears_redo() {
        let mut frame = frame();
        frame.pot(Ball::Red);
        frame.undo();
        frame.miss();
        frame.redo();

        assert_eq!(frame.visits().len(), 1);
        assert_eq!(frame.last_visit().unwrap().outcome, Outcome::Miss);
    }

    #[test]
    fn test_apply_dispatches() {
        let mut frame = frame();
        frame.apply(&Shot::Pot(Ball::Red));
        frame.apply(&Shot::Miss);
        frame.apply(&Shot::Concede("player1".into()));

        let outcomes: Vec<_> = frame.visits().iter().map(|v| v.outcome).collect();
        assert_eq!(
            outcomes,
            vec![Outcome::Pot(Ball::Red), Outcome::Miss, Outcome::Concede]
        );
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut frame = frame();
        frame.pot(Ball::Red);
        let snapshot = frame.clone();
        frame.pot(Ball::Black);

        assert_eq!(snapshot.visits().len(), 1);
        assert_eq!(frame.visits().len(), 2);
    }
}
