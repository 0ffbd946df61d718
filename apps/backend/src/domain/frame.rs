//! Frame model shared by all ten slots of a game.
//!
//! Frames 1–9 and frame 10 are the same struct; the [`FrameVariant`] tag
//! carries the extra bonus-path state the tenth frame needs.

use serde::Serialize;

use crate::domain::roll::{Roll, PINS_PER_RACK};

/// Frames in one game.
pub const FRAMES_PER_GAME: u8 = 10;

/// Outcome tag derived from the rolls recorded so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameKind {
    Empty,
    InProgress,
    Open,
    Spare,
    Strike,
}

/// Position of a frame in its state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameState {
    Empty,
    InProgress,
    AwaitingSpareBonus,
    AwaitingStrikeBonus1,
    AwaitingStrikeBonus2,
    Complete,
}

/// Where the tenth frame stands on its bonus path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TenthProgress {
    /// Taking the (up to) two base rolls.
    Base,
    AwaitingSpareBonus,
    AwaitingStrikeBonus1,
    AwaitingStrikeBonus2,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameVariant {
    Regular,
    Tenth(TenthProgress),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub(crate) index: u8,
    pub(crate) rolls: Vec<Roll>,
    pub(crate) complete: bool,
    pub(crate) variant: FrameVariant,
}

impl Frame {
    /// Create an empty frame for slot `index` (1-based).
    pub fn new(index: u8) -> Self {
        let variant = if index == FRAMES_PER_GAME {
            FrameVariant::Tenth(TenthProgress::Base)
        } else {
            FrameVariant::Regular
        };
        Self {
            index,
            rolls: Vec::with_capacity(3),
            complete: false,
            variant,
        }
    }

    pub fn index(&self) -> u8 {
        self.index
    }

    pub fn rolls(&self) -> &[Roll] {
        &self.rolls
    }

    pub fn pin_counts(&self) -> Vec<u8> {
        self.rolls.iter().map(|r| r.pins()).collect()
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn is_tenth(&self) -> bool {
        matches!(self.variant, FrameVariant::Tenth(_))
    }

    pub fn pins_knocked(&self) -> u16 {
        self.rolls.iter().map(|r| u16::from(r.pins())).sum()
    }

    /// Classify the frame from its first one or two rolls.
    ///
    /// For the tenth frame this describes the base rolls; bonus rolls do not
    /// change the tag.
    pub fn kind(&self) -> FrameKind {
        match self.rolls.as_slice() {
            [] => FrameKind::Empty,
            [first, ..] if first.is_strike() => FrameKind::Strike,
            [first, second, ..] if first.pins() + second.pins() == PINS_PER_RACK => {
                FrameKind::Spare
            }
            [_, _, ..] => FrameKind::Open,
            [_] => FrameKind::InProgress,
        }
    }

    pub fn state(&self) -> FrameState {
        if self.complete {
            return FrameState::Complete;
        }
        match self.variant {
            FrameVariant::Tenth(TenthProgress::AwaitingSpareBonus) => {
                FrameState::AwaitingSpareBonus
            }
            FrameVariant::Tenth(TenthProgress::AwaitingStrikeBonus1) => {
                FrameState::AwaitingStrikeBonus1
            }
            FrameVariant::Tenth(TenthProgress::AwaitingStrikeBonus2) => {
                FrameState::AwaitingStrikeBonus2
            }
            _ if self.rolls.is_empty() => FrameState::Empty,
            _ => FrameState::InProgress,
        }
    }

    /// Pins still standing, i.e. the most the next roll in this frame may knock down.
    ///
    /// Regular frames share a single rack across both rolls. In the tenth
    /// frame a cleared rack (strike or spare) is reset to a fresh ten.
    pub fn pins_standing(&self) -> u8 {
        match self.variant {
            FrameVariant::Regular => {
                let knocked: u8 = self.rolls.iter().map(|r| r.pins()).sum();
                PINS_PER_RACK.saturating_sub(knocked)
            }
            FrameVariant::Tenth(_) => self.rolls.iter().fold(PINS_PER_RACK, |standing, roll| {
                match standing.saturating_sub(roll.pins()) {
                    0 => PINS_PER_RACK,
                    left => left,
                }
            }),
        }
    }
}
