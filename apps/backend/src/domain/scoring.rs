//! Frame scores derived from the raw rolls of every frame.
//!
//! Scores are recomputed from scratch on every call. Strike and spare bonuses
//! look ahead at most two throws in throw order, so the pass stays linear in
//! the number of frames.

use serde::Serialize;

use crate::domain::frame::{Frame, FrameKind};

/// Score of one frame: either final, or waiting on rolls not thrown yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameScore {
    Resolved(u16),
    Pending,
}

impl FrameScore {
    pub fn value(self) -> Option<u16> {
        match self {
            FrameScore::Resolved(v) => Some(v),
            FrameScore::Pending => None,
        }
    }

    pub fn is_resolved(self) -> bool {
        matches!(self, FrameScore::Resolved(_))
    }
}

/// Score every frame of a game, in order.
pub fn score_frames(frames: &[Frame]) -> Vec<FrameScore> {
    let throws: Vec<u16> = frames
        .iter()
        .flat_map(|f| f.rolls().iter().map(|r| u16::from(r.pins())))
        .collect();

    let mut cursor = 0;
    frames
        .iter()
        .map(|frame| {
            let start = cursor;
            cursor += frame.rolls().len();
            score_frame(frame, &throws[start..cursor], &throws[cursor..])
        })
        .collect()
}

fn score_frame(frame: &Frame, own: &[u16], after: &[u16]) -> FrameScore {
    let base: u16 = own.iter().sum();

    // The tenth frame carries its own bonus rolls.
    if frame.is_tenth() {
        return if frame.is_complete() {
            FrameScore::Resolved(base)
        } else {
            FrameScore::Pending
        };
    }

    let bonus_rolls = match frame.kind() {
        FrameKind::Strike => 2,
        FrameKind::Spare => 1,
        FrameKind::Open => 0,
        FrameKind::Empty | FrameKind::InProgress => return FrameScore::Pending,
    };

    match after.get(..bonus_rolls) {
        Some(bonus) => FrameScore::Resolved(base + bonus.iter().sum::<u16>()),
        None => FrameScore::Pending,
    }
}

/// Sum of resolved frames. Pending frames contribute nothing.
pub fn total_score(scores: &[FrameScore]) -> u16 {
    scores.iter().filter_map(|s| s.value()).sum()
}

/// Cumulative score through each frame, `None` from the first pending frame on.
pub fn running_totals(scores: &[FrameScore]) -> Vec<Option<u16>> {
    scores
        .iter()
        .scan(Some(0u16), |acc, score| {
            *acc = acc.zip(score.value()).map(|(sum, v)| sum + v);
            Some(*acc)
        })
        .collect()
}
