//! Game HTTP routes.

use actix_web::{web, HttpResponse, Result};
use tracing::debug;

use crate::domain::frame_snapshots;
use crate::error::AppError;
use crate::extractors::game_id::GameId;
use crate::extractors::validated_json::ValidatedJson;
use crate::protocol::{GameView, RecordRollRequest, ScoreView};
use crate::services::games as game_service;
use crate::state::app_state::AppState;

/// POST /api/games
///
/// Creates a game with ten empty frames and returns it with 201.
async fn create_game(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let game = game_service::create_game(&app_state).await?;
    Ok(HttpResponse::Created().json(GameView::from(&game)))
}

/// GET /api/games/{game_id}
async fn get_game(
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let game = game_service::load_game(&app_state, game_id.0).await?;
    Ok(HttpResponse::Ok().json(GameView::from(&game)))
}

/// GET /api/games/{game_id}/frames
///
/// Frames in order, each with its rolls, its score (`null` while a bonus
/// is pending) and completion flag.
async fn get_frames(
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let game = game_service::load_game(&app_state, game_id.0).await?;
    Ok(HttpResponse::Ok().json(frame_snapshots(&game.state)))
}

/// GET /api/games/{game_id}/score
async fn get_score(
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let game = game_service::load_game(&app_state, game_id.0).await?;
    Ok(HttpResponse::Ok().json(ScoreView::from(&game)))
}

/// POST /api/games/{game_id}/rolls
///
/// Records one roll for the active frame. Any rejection leaves the game
/// untouched and comes back as a 400 Problem Details with a specific code.
async fn record_roll(
    game_id: GameId,
    body: ValidatedJson<RecordRollRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let RecordRollRequest { frame_number, pins } = body.into_inner();
    debug!(game_id = game_id.0, frame = frame_number, pins, "Roll request");

    let game = game_service::record_roll(&app_state, game_id.0, frame_number, pins).await?;
    Ok(HttpResponse::Ok().json(GameView::from(&game)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(create_game))
        .route("/{game_id}", web::get().to(get_game))
        .route("/{game_id}/frames", web::get().to(get_frames))
        .route("/{game_id}/score", web::get().to(get_score))
        .route("/{game_id}/rolls", web::post().to(record_roll));
}
