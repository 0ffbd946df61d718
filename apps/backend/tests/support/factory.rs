//! Shortcuts for putting games into a known state through the service layer.

use bowling_backend::repos::games::Game;
use bowling_backend::services::games as game_service;
use bowling_backend::{AppError, AppState};

/// Twelve strikes.
pub const PERFECT_GAME: [i32; 12] = [10; 12];

/// Create a game and feed it `rolls`, each to the then-active frame.
pub async fn game_with_rolls(state: &AppState, rolls: &[i32]) -> Result<Game, AppError> {
    let mut game = game_service::create_game(state).await?;
    for &pins in rolls {
        let frame = game
            .state
            .active_frame()
            .ok_or_else(|| AppError::internal("game completed before all rolls were fed"))?;
        game = game_service::record_roll(state, game.id, i32::from(frame), pins).await?;
    }
    Ok(game)
}
