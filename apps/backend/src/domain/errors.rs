use thiserror::Error;

/// Reason a submitted roll was refused.
///
/// Every variant carries the context a caller needs to correct and retry the
/// submission. A rejection never mutates the game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RollRejection {
    #[error("game is already complete")]
    GameComplete,
    #[error("invalid frame number {frame}: must be between 1 and 10")]
    InvalidFrameNumber { frame: i32 },
    #[error("invalid pin count {pins}: must be between 0 and 10")]
    InvalidPinCount { pins: i32 },
    #[error("frame {frame} is already complete")]
    FrameAlreadyComplete { frame: u8 },
    #[error("frame {requested} is not the active frame (active frame is {active})")]
    FrameMismatch { requested: u8, active: u8 },
    #[error("{pins} pins exceeds the {remaining} pins remaining in frame {frame}")]
    RollExceedsRemainingPins { frame: u8, pins: u8, remaining: u8 },
}
