//! Domain layer: the ten-pin bowling engine. Pure, synchronous, no I/O.

pub mod errors;
pub mod frame;
pub mod frame_machine;
pub mod game;
pub mod roll;
pub mod scoring;
pub mod snapshot;
pub mod validator;

#[cfg(test)]
mod tests_props;

// Re-exports for ergonomics
pub use errors::RollRejection;
pub use frame::{Frame, FrameKind, FrameState, FRAMES_PER_GAME};
pub use game::{GameState, GameStatus};
pub use roll::{Roll, PINS_PER_RACK};
pub use scoring::FrameScore;
pub use snapshot::{frame_snapshots, FrameSnapshot};
