use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::services::game_locks::GameLocks;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (optional for test scenarios)
    db: Option<DatabaseConnection>,
    /// Per-game mutexes serializing roll submission
    pub game_locks: Arc<GameLocks>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db: Some(db),
            game_locks: Arc::new(GameLocks::new()),
        }
    }

    /// State with no database; every data route answers 503.
    pub fn new_without_db() -> Self {
        Self {
            db: None,
            game_locks: Arc::new(GameLocks::new()),
        }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
