//! One bowling game: ten frames filled strictly in order.

use serde::Serialize;

use crate::domain::errors::RollRejection;
use crate::domain::frame::{Frame, FrameState, FRAMES_PER_GAME};
use crate::domain::frame_machine::apply_roll;
use crate::domain::scoring::{score_frames, total_score, FrameScore};
use crate::domain::validator::validate_roll;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Complete,
}

/// Authoritative state of a single game.
///
/// Only [`GameState::submit_roll`] mutates it, and a rejected roll leaves it
/// exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    frames: Vec<Frame>,
    status: GameStatus,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            frames: (1..=FRAMES_PER_GAME).map(Frame::new).collect(),
            status: GameStatus::InProgress,
        }
    }

    /// Rebuild a game by re-submitting stored rolls, frame by frame.
    ///
    /// `frame_rolls[0]` holds the pins of frame 1, and so on. Any sequence the
    /// rules would not have accepted is returned as the first rejection.
    pub fn replay<R: AsRef<[u8]>>(frame_rolls: &[R]) -> Result<Self, RollRejection> {
        let mut game = Self::new();
        for (number, rolls) in (1i32..).zip(frame_rolls) {
            for &pins in rolls.as_ref() {
                game.submit_roll(number, i32::from(pins))?;
            }
        }
        Ok(game)
    }

    /// Record `pins` in frame `frame_number` (1-based).
    ///
    /// Returns the frame's new state. Game-level guards run before the
    /// per-frame validator: a finished game, then a frame number outside 1–10.
    pub fn submit_roll(&mut self, frame_number: i32, pins: i32) -> Result<FrameState, RollRejection> {
        let active = match (self.status, self.active_frame()) {
            (GameStatus::InProgress, Some(active)) => active,
            _ => return Err(RollRejection::GameComplete),
        };

        let index = u8::try_from(frame_number)
            .ok()
            .filter(|n| (1..=FRAMES_PER_GAME).contains(n))
            .ok_or(RollRejection::InvalidFrameNumber {
                frame: frame_number,
            })?;

        let frame = &mut self.frames[usize::from(index - 1)];
        let roll = validate_roll(frame, active, pins)?;
        let state = apply_roll(frame, roll)?;

        if self.frames.last().is_some_and(Frame::is_complete) {
            self.status = GameStatus::Complete;
        }

        Ok(state)
    }

    /// Lowest-indexed incomplete frame, `None` once the game is over.
    pub fn active_frame(&self) -> Option<u8> {
        self.frames
            .iter()
            .find(|f| !f.is_complete())
            .map(Frame::index)
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn frame(&self, number: u8) -> Option<&Frame> {
        number
            .checked_sub(1)
            .and_then(|i| self.frames.get(usize::from(i)))
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_complete(&self) -> bool {
        self.status == GameStatus::Complete
    }

    pub fn scores(&self) -> Vec<FrameScore> {
        score_frames(&self.frames)
    }

    /// Cumulative total of resolved frames.
    pub fn total_score(&self) -> u16 {
        total_score(&self.scores())
    }

    pub fn rolls_thrown(&self) -> usize {
        self.frames.iter().map(|f| f.rolls().len()).sum()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
