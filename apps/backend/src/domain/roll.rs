use serde::Serialize;

use crate::domain::errors::RollRejection;

/// Pins in a full rack.
pub const PINS_PER_RACK: u8 = 10;

/// Pins knocked down by one throw. Always within `0..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Roll(u8);

impl Roll {
    pub const GUTTER: Roll = Roll(0);
    pub const STRIKE: Roll = Roll(PINS_PER_RACK);

    pub fn new(pins: i32) -> Result<Self, RollRejection> {
        u8::try_from(pins)
            .ok()
            .filter(|p| *p <= PINS_PER_RACK)
            .map(Roll)
            .ok_or(RollRejection::InvalidPinCount { pins })
    }

    pub fn pins(self) -> u8 {
        self.0
    }

    pub fn is_strike(self) -> bool {
        self.0 == PINS_PER_RACK
    }
}

impl From<Roll> for u8 {
    fn from(roll: Roll) -> Self {
        roll.0
    }
}
