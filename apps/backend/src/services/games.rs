//! Game service: bridges the bowling engine with persistence.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use tracing::{debug, info, warn};

use crate::db::txn::{with_read_txn, with_txn};
use crate::domain::RollRejection;
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::repos::games::{self, Game};
use crate::state::app_state::AppState;

/// Game domain service.
#[derive(Debug, Default, Clone, Copy)]
pub struct GameService;

impl GameService {
    pub fn new() -> Self {
        Self
    }

    /// Create a game with ten empty frames.
    pub async fn create_game(&self, txn: &DatabaseTransaction) -> Result<Game, AppError> {
        let game = games::create_game(txn).await?;
        info!(game_id = game.id, "Game created");
        Ok(game)
    }

    pub async fn get_game<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: i64,
    ) -> Result<Game, AppError> {
        Ok(games::require_game(conn, game_id).await?)
    }

    /// Validate and apply one roll, then persist the touched frame.
    ///
    /// A rejected roll returns before anything is written. Callers must hold
    /// the game's lock; see [`record_roll`].
    pub async fn record_roll(
        &self,
        txn: &DatabaseTransaction,
        game_id: i64,
        frame_number: i32,
        pins: i32,
    ) -> Result<Game, AppError> {
        debug!(game_id, frame = frame_number, pins, "Submitting roll");

        let mut game = games::require_game(txn, game_id).await?;

        let frame_state = match game.state.submit_roll(frame_number, pins) {
            Ok(state) => state,
            Err(rejection) => {
                log_rejection(game_id, frame_number, pins, &rejection);
                return Err(DomainError::from(rejection).into());
            }
        };

        // submit_roll only accepts 1..=10, so the cast cannot truncate.
        let frame = frame_number as u8;
        let game = games::save_frame(txn, game, frame).await?;

        info!(
            game_id,
            frame,
            pins,
            frame_state = ?frame_state,
            total_score = game.state.total_score(),
            "Roll recorded"
        );
        if game.state.is_complete() {
            info!(
                game_id,
                final_score = game.state.total_score(),
                "Game complete"
            );
        }

        Ok(game)
    }
}

fn log_rejection(game_id: i64, frame: i32, pins: i32, rejection: &RollRejection) {
    match rejection {
        // Client mistakes a well-behaved UI never makes.
        RollRejection::FrameMismatch { .. }
        | RollRejection::FrameAlreadyComplete { .. }
        | RollRejection::GameComplete => {
            warn!(game_id, frame, pins, %rejection, "Roll rejected");
        }
        _ => {
            debug!(game_id, frame, pins, %rejection, "Roll rejected");
        }
    }
}

/// Create a game in its own transaction.
pub async fn create_game(state: &AppState) -> Result<Game, AppError> {
    with_txn(state, |txn| Box::pin(async move { GameService::new().create_game(txn).await })).await
}

/// Load a game from one read snapshot. Takes no game lock: a committed
/// roll is visible in full or not at all.
pub async fn load_game(state: &AppState, game_id: i64) -> Result<Game, AppError> {
    with_read_txn(state, move |txn| {
        Box::pin(async move { GameService::new().get_game(txn, game_id).await })
    })
    .await
}

/// Record a roll with the game's lock held for the whole
/// load, validate, apply, rescore, save and commit sequence.
pub async fn record_roll(
    state: &AppState,
    game_id: i64,
    frame_number: i32,
    pins: i32,
) -> Result<Game, AppError> {
    let _guard = state.game_locks.acquire(game_id).await;
    with_txn(state, move |txn| {
        Box::pin(async move {
            GameService::new()
                .record_roll(txn, game_id, frame_number, pins)
                .await
        })
    })
    .await
}
