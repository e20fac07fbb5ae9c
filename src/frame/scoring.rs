//! Derived values: scores, the current break, what is left on the table,
//! and the winner.
//!
//! All of these are pure folds over the visit log and are recomputed on
//! every read.

use crate::core::{Ball, BallList, Outcome, PlayerId, TOTAL_COLOURED_VALUES};

use super::state::MatchState;

impl MatchState {
    /// Points scored by `player`.
    ///
    /// A visit counts for `player` when it is their own non-foul visit, or
    /// when it is a foul by anyone else.
    #[must_use]
    pub fn score(&self, player: &PlayerId) -> u32 {
        self.visits()
            .iter()
            .filter(|visit| {
                let is_foul = visit.outcome == Outcome::Foul;
                let own = visit.player == *player;
                own != is_foul
            })
            .map(|visit| visit.value)
            .sum()
    }

    /// `score(player1) - score(player2)`. Positive means player1 leads.
    #[must_use]
    pub fn score_difference(&self) -> i64 {
        i64::from(self.score(self.player1())) - i64::from(self.score(self.player2()))
    }

    /// The current player's unbroken run of pots at the end of the log.
    #[must_use]
    pub fn current_break(&self) -> u32 {
        let current = self.current_player();
        self.visits()
            .iter()
            .rev()
            .take_while(|visit| visit.is_pot() && visit.player == *current)
            .map(|visit| visit.value)
            .sum()
    }

    /// Reds not yet potted. Never negative, however many reds were entered.
    #[must_use]
    pub fn red_remaining(&self) -> u32 {
        let potted = self.visits().iter().filter(|visit| visit.is_red_pot()).count();
        let potted = u32::try_from(potted).unwrap_or(u32::MAX);
        self.config().red_count.saturating_sub(potted)
    }

    /// The colours that could still be scored.
    ///
    /// While reds remain every colour is available. Once they are gone, the
    /// log is scanned from the end: a red potted by the same player as the
    /// visit after it means the colour following the last red is still to
    /// come (or was just taken) and every colour is back on the table.
    /// Otherwise the colours worth more than the last ball potted remain.
    #[must_use]
    pub fn colours_remaining(&self) -> BallList {
        if self.red_remaining() > 0 {
            return Ball::COLOURS.iter().copied().collect();
        }

        let log = self.visits();
        for i in (1..log.len()).rev() {
            let visit = &log[i];
            let previous = &log[i - 1];

            if previous.is_red_pot() && previous.player == visit.player {
                return Ball::COLOURS.iter().copied().collect();
            }
            if let Some(ball) = visit.outcome.potted() {
                return Ball::colours_above(ball.value());
            }
        }

        // A colours-only frame: the first visit is the only one left to look at.
        if self.config().red_count == 0 {
            return match log.front().and_then(|visit| visit.outcome.potted()) {
                Some(ball) => Ball::colours_above(ball.value()),
                None => Ball::COLOURS.iter().copied().collect(),
            };
        }

        BallList::new()
    }

    /// Theoretical maximum still obtainable by either player.
    ///
    /// With reds on the table, every red is assumed to be followed by the
    /// black and all colours to follow.
    #[must_use]
    pub fn points_remaining(&self) -> u32 {
        let reds = self.red_remaining();
        if reds > 0 {
            return reds + reds * Ball::Black.value() + TOTAL_COLOURED_VALUES;
        }

        let remaining = Ball::total(&self.colours_remaining());
        if remaining == 0 && self.black_respotted() {
            return Ball::Black.value();
        }
        remaining
    }

    /// The winner, or `None` while the frame is undecided.
    ///
    /// A concession decides the frame immediately. Otherwise the frame ends
    /// when nothing is left to score; a level score goes to player2.
    #[must_use]
    pub fn winner(&self) -> Option<&PlayerId> {
        if let Some(visit) = self.last_visit() {
            if visit.outcome == Outcome::Concede {
                return Some(self.opponent_of(&visit.player));
            }
        }

        if self.points_remaining() == 0 {
            if self.score_difference() > 0 {
                Some(self.player1())
            } else {
                Some(self.player2())
            }
        } else {
            None
        }
    }

    /// Has the frame been decided?
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// The table is cleared with the scores level and the rules re-spot the
    /// black.
    fn black_respotted(&self) -> bool {
        self.config().respot_black_on_tie
            && !self.visits().is_empty()
            && self.score_difference() == 0
    }
}
