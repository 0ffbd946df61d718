//! Per-frame transition function.
//!
//! Frames 1–9: `Empty -> InProgress -> Complete`, or `Empty -> Complete` on a strike.
//! Frame 10: `Empty -> InProgress -> Complete` for an open frame, otherwise
//! through `AwaitingSpareBonus` (one bonus roll) or
//! `AwaitingStrikeBonus1 -> AwaitingStrikeBonus2` (two bonus rolls).

use crate::domain::errors::RollRejection;
use crate::domain::frame::{Frame, FrameState, FrameVariant, TenthProgress};
use crate::domain::roll::{Roll, PINS_PER_RACK};

/// Append an already validated roll and advance the frame's state.
///
/// A complete frame is never mutated; the call fails with
/// [`RollRejection::FrameAlreadyComplete`] instead.
pub fn apply_roll(frame: &mut Frame, roll: Roll) -> Result<FrameState, RollRejection> {
    if frame.complete || frame.variant == FrameVariant::Tenth(TenthProgress::Done) {
        return Err(RollRejection::FrameAlreadyComplete { frame: frame.index });
    }
    debug_assert!(roll.pins() <= frame.pins_standing());

    frame.rolls.push(roll);

    match frame.variant {
        FrameVariant::Regular => {
            frame.complete = roll.is_strike() || frame.rolls.len() == 2;
        }
        FrameVariant::Tenth(progress) => {
            let next = advance_tenth(progress, &frame.rolls);
            frame.variant = FrameVariant::Tenth(next);
            frame.complete = next == TenthProgress::Done;
        }
    }

    Ok(frame.state())
}

fn advance_tenth(progress: TenthProgress, rolls: &[Roll]) -> TenthProgress {
    match progress {
        TenthProgress::Base => match rolls {
            [first] if first.is_strike() => TenthProgress::AwaitingStrikeBonus1,
            [_] => TenthProgress::Base,
            [first, second] if first.pins() + second.pins() == PINS_PER_RACK => {
                TenthProgress::AwaitingSpareBonus
            }
            _ => TenthProgress::Done,
        },
        TenthProgress::AwaitingStrikeBonus1 => TenthProgress::AwaitingStrikeBonus2,
        TenthProgress::AwaitingStrikeBonus2
        | TenthProgress::AwaitingSpareBonus
        | TenthProgress::Done => TenthProgress::Done,
    }
}
