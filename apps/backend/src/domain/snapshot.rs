//! Read model of a game's frames, as exposed to callers.

use serde::Serialize;

use crate::domain::frame::{FrameKind, FrameState};
use crate::domain::game::GameState;
use crate::domain::scoring::running_totals;

/// One frame as reported to clients.
///
/// `score` is `None` while the frame is pending, which is distinct from a
/// resolved score of zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameSnapshot {
    pub index: u8,
    pub rolls: Vec<u8>,
    pub score: Option<u16>,
    pub cumulative: Option<u16>,
    pub complete: bool,
    pub kind: FrameKind,
    pub state: FrameState,
}

/// Snapshot all ten frames with their resolved or pending scores.
pub fn frame_snapshots(game: &GameState) -> Vec<FrameSnapshot> {
    let scores = game.scores();
    let cumulative = running_totals(&scores);

    game.frames()
        .iter()
        .zip(scores)
        .zip(cumulative)
        .map(|((frame, score), cumulative)| FrameSnapshot {
            index: frame.index(),
            rolls: frame.pin_counts(),
            score: score.value(),
            cumulative,
            complete: frame.is_complete(),
            kind: frame.kind(),
            state: frame.state(),
        })
        .collect()
}
