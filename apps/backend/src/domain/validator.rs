use crate::domain::errors::RollRejection;
use crate::domain::frame::Frame;
use crate::domain::roll::Roll;

/// Decide whether `pins` may be recorded in `frame` while `active_frame` is the
/// lowest incomplete frame of the game.
///
/// Checks run in a fixed order and the first failure wins:
/// pin range, frame already complete, frame is not the active one, then the
/// remaining-pins cap. Pure: the frame is only read.
pub fn validate_roll(frame: &Frame, active_frame: u8, pins: i32) -> Result<Roll, RollRejection> {
    let roll = Roll::new(pins)?;

    if frame.is_complete() {
        return Err(RollRejection::FrameAlreadyComplete {
            frame: frame.index(),
        });
    }

    if frame.index() != active_frame {
        return Err(RollRejection::FrameMismatch {
            requested: frame.index(),
            active: active_frame,
        });
    }

    let remaining = frame.pins_standing();
    if roll.pins() > remaining {
        return Err(RollRejection::RollExceedsRemainingPins {
            frame: frame.index(),
            pins: roll.pins(),
            remaining,
        });
    }

    Ok(roll)
}
