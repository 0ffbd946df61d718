//! JSON shapes exchanged over HTTP.

pub mod game_view;

pub use game_view::{GameView, RecordRollRequest, ScoreView};
