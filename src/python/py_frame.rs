//! Frame bindings for Python.
//!
//! Balls cross the boundary as their point values (1 = red ... 7 = black).

use pyo3::prelude::*;

use crate::core::{Ball, FrameConfig, Shot};
use crate::frame::{FrameRecord, MatchState};
use crate::rules::Referee;

/// Python wrapper for MatchState.
#[pyclass(name = "Frame")]
#[derive(Clone)]
pub struct PyFrame(pub MatchState);

#[pymethods]
impl PyFrame {
    /// Create a new frame. `player1` breaks off.
    #[new]
    #[pyo3(signature = (player1, player2, red_count = 15, foul_value = 4, respot_black_on_tie = false))]
    fn new(
        player1: String,
        player2: String,
        red_count: u32,
        foul_value: u32,
        respot_black_on_tie: bool,
    ) -> Self {
        let config = FrameConfig {
            red_count,
            foul_value,
            respot_black_on_tie,
        };
        Self(MatchState::with_config(player1, player2, config))
    }

    /// Restore a frame from bytes produced by `to_bytes`.
    #[staticmethod]
    fn from_bytes(bytes: &[u8]) -> PyResult<Self> {
        let record = FrameRecord::from_bytes(bytes)?;
        Ok(Self(MatchState::from_record(record)))
    }

    fn to_bytes(&self) -> PyResult<Vec<u8>> {
        Ok(self.0.record().to_bytes()?)
    }

    fn pot(&mut self, ball_value: u32) -> PyResult<()> {
        self.0.pot(Ball::try_from(ball_value)?);
        Ok(())
    }

    fn miss(&mut self) {
        self.0.miss();
    }

    fn foul(&mut self) {
        self.0.foul();
    }

    fn foul_replay(&mut self) {
        self.0.foul_replay();
    }

    fn foul_continue(&mut self) {
        self.0.foul_continue();
    }

    fn concede(&mut self, player: String) {
        self.0.concede(player);
    }

    fn undo(&mut self) {
        self.0.undo();
    }

    fn redo(&mut self) {
        self.0.redo();
    }

    #[getter]
    fn current_player(&self) -> String {
        self.0.current_player().to_string()
    }

    fn score(&self, player: String) -> u32 {
        self.0.score(&player.into())
    }

    fn current_break(&self) -> u32 {
        self.0.current_break()
    }

    #[getter]
    fn red_remaining(&self) -> u32 {
        self.0.red_remaining()
    }

    fn points_remaining(&self) -> u32 {
        self.0.points_remaining()
    }

    #[getter]
    fn score_difference(&self) -> i64 {
        self.0.score_difference()
    }

    /// The winner's name, or None while the frame is undecided.
    #[getter]
    fn winner(&self) -> Option<String> {
        self.0.winner().map(ToString::to_string)
    }

    fn __len__(&self) -> usize {
        self.0.visits().len()
    }

    fn __repr__(&self) -> String {
        format!(
            "Frame({} {} - {} {})",
            self.0.player1(),
            self.0.score(self.0.player1()),
            self.0.score(self.0.player2()),
            self.0.player2()
        )
    }
}

/// A frame that rejects illegal shots with `ValueError`.
#[pyclass(name = "RefereedFrame")]
pub struct PyRefereedFrame(Referee);

#[pymethods]
impl PyRefereedFrame {
    #[new]
    fn new(player1: String, player2: String) -> Self {
        Self(Referee::new(player1, player2))
    }

    fn pot(&mut self, ball_value: u32) -> PyResult<()> {
        let ball = Ball::try_from(ball_value)?;
        Ok(self.0.submit(Shot::Pot(ball))?)
    }

    fn miss(&mut self) -> PyResult<()> {
        Ok(self.0.submit(Shot::Miss)?)
    }

    fn foul(&mut self) -> PyResult<()> {
        Ok(self.0.submit(Shot::Foul)?)
    }

    fn foul_replay(&mut self) -> PyResult<()> {
        Ok(self.0.submit(Shot::FoulReplay)?)
    }

    fn foul_continue(&mut self) -> PyResult<()> {
        Ok(self.0.submit(Shot::FoulContinue)?)
    }

    fn concede(&mut self, player: String) -> PyResult<()> {
        Ok(self.0.submit(Shot::Concede(player.into()))?)
    }

    fn undo(&mut self) {
        self.0.undo();
    }

    fn redo(&mut self) {
        self.0.redo();
    }

    /// A read-only copy of the underlying frame.
    fn frame(&self) -> PyFrame {
        PyFrame(self.0.state().clone())
    }
}
