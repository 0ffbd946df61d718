//! Per-game mutual exclusion for roll submission.
//!
//! Rolls for one game must apply strictly in order; rolls for different
//! games never contend. Entries are dropped once nobody holds or awaits them.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

type LockMap = DashMap<i64, Arc<Mutex<()>>>;

#[derive(Debug, Default)]
pub struct GameLocks {
    locks: Arc<LockMap>,
}

/// Held while a roll is validated, applied and persisted. Releasing it
/// (on drop) also removes the game's entry if no one else is waiting.
#[derive(Debug)]
pub struct GameLockGuard {
    guard: Option<OwnedMutexGuard<()>>,
    locks: Arc<LockMap>,
    game_id: i64,
}

impl GameLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `game_id`.
    pub async fn acquire(&self, game_id: i64) -> GameLockGuard {
        // Clone the Arc out so the map shard isn't held across the await.
        let mutex = Arc::clone(self.locks.entry(game_id).or_default().value());
        let guard = mutex.lock_owned().await;
        GameLockGuard {
            guard: Some(guard),
            locks: Arc::clone(&self.locks),
            game_id,
        }
    }

    /// Number of games with a live lock entry.
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}

impl GameLockGuard {
    pub fn game_id(&self) -> i64 {
        self.game_id
    }
}

impl Drop for GameLockGuard {
    fn drop(&mut self) {
        // Release the mutex first so our own guard no longer counts.
        self.guard.take();
        self.locks
            .remove_if(&self.game_id, |_, mutex| Arc::strong_count(mutex) == 1);
    }
}
