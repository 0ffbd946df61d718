//! DTOs for games_sea adapter.

use crate::entities::games::GameStatus;

/// Post-roll update of a game row, applied only if `expected_version` still matches.
#[derive(Debug, Clone)]
pub struct GameProgressUpdate {
    pub id: i64,
    pub status: GameStatus,
    pub total_score: i32,
    pub expected_version: i32,
}

impl GameProgressUpdate {
    pub fn new(id: i64, expected_version: i32) -> Self {
        Self {
            id,
            status: GameStatus::InProgress,
            total_score: 0,
            expected_version,
        }
    }

    pub fn with_status(mut self, status: GameStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_total_score(mut self, total_score: i32) -> Self {
        self.total_score = total_score;
        self
    }
}
