use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::{frame_snapshots, FrameSnapshot, GameStatus};
use crate::repos::games::Game;

/// Full game as returned by create, get and record-roll.
#[derive(Clone, Debug, Serialize)]
pub struct GameView {
    pub id: i64,
    pub status: GameStatus,
    pub total_score: u16,
    /// Frame that accepts the next roll; `None` once the game is complete.
    pub active_frame: Option<u8>,
    #[serde(serialize_with = "time::serde::rfc3339::serialize")]
    pub created_at: OffsetDateTime,
    #[serde(serialize_with = "time::serde::rfc3339::serialize")]
    pub updated_at: OffsetDateTime,
    pub frames: Vec<FrameSnapshot>,
}

impl From<&Game> for GameView {
    fn from(game: &Game) -> Self {
        Self {
            id: game.id,
            status: game.state.status(),
            total_score: game.state.total_score(),
            active_frame: game.state.active_frame(),
            created_at: game.created_at,
            updated_at: game.updated_at,
            frames: frame_snapshots(&game.state),
        }
    }
}

/// Cumulative score of resolved frames.
#[derive(Clone, Debug, Serialize)]
pub struct ScoreView {
    pub game_id: i64,
    pub total_score: u16,
    pub complete: bool,
}

impl From<&Game> for ScoreView {
    fn from(game: &Game) -> Self {
        Self {
            game_id: game.id,
            total_score: game.state.total_score(),
            complete: game.state.is_complete(),
        }
    }
}

/// Body of `POST /api/games/{game_id}/rolls`.
///
/// Fields are signed so out-of-range values reach the engine and are
/// rejected with a specific error rather than a JSON parse failure.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecordRollRequest {
    pub frame_number: i32,
    pub pins: i32,
}
