use bowling_backend::domain::{GameStatus, RollRejection};
use bowling_backend::services::games as game_service;
use bowling_backend::{AppError, ErrorCode};

use crate::support::build_test_state;
use crate::support::factory::{game_with_rolls, PERFECT_GAME};

#[tokio::test]
async fn create_game_persists_ten_empty_frames() -> Result<(), AppError> {
    let state = build_test_state().await?;

    let created = game_service::create_game(&state).await?;
    assert_eq!(created.lock_version, 1);
    assert_eq!(created.state.status(), GameStatus::InProgress);

    let loaded = game_service::load_game(&state, created.id).await?;
    assert_eq!(loaded.state.frames().len(), 10);
    assert_eq!(loaded.state.rolls_thrown(), 0);
    assert_eq!(loaded.state.active_frame(), Some(1));
    Ok(())
}

#[tokio::test]
async fn each_roll_bumps_the_lock_version() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let game = game_service::create_game(&state).await?;

    let after_one = game_service::record_roll(&state, game.id, 1, 4).await?;
    assert_eq!(after_one.lock_version, game.lock_version + 1);

    let after_two = game_service::record_roll(&state, game.id, 1, 5).await?;
    assert_eq!(after_two.lock_version, game.lock_version + 2);
    assert_eq!(after_two.state.total_score(), 9);
    Ok(())
}

#[tokio::test]
async fn perfect_game_completes_at_300() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let game = game_with_rolls(&state, &PERFECT_GAME).await?;

    assert!(game.state.is_complete());
    assert_eq!(game.state.total_score(), 300);

    let loaded = game_service::load_game(&state, game.id).await?;
    assert_eq!(loaded.state, game.state);
    Ok(())
}

#[tokio::test]
async fn all_spares_with_five_bonus() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let game = game_with_rolls(&state, &[5; 21]).await?;

    assert!(game.state.is_complete());
    assert_eq!(game.state.total_score(), 150);
    Ok(())
}

#[tokio::test]
async fn rejected_roll_leaves_the_stored_game_unchanged() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let game = game_with_rolls(&state, &[8]).await?;

    let err = game_service::record_roll(&state, game.id, 1, 3)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::RollExceedsRemainingPins);
    assert_eq!(
        err.detail(),
        RollRejection::RollExceedsRemainingPins {
            frame: 1,
            pins: 3,
            remaining: 2
        }
        .to_string()
    );

    let loaded = game_service::load_game(&state, game.id).await?;
    assert_eq!(loaded.state, game.state);
    assert_eq!(loaded.lock_version, game.lock_version);
    Ok(())
}

#[tokio::test]
async fn rolls_after_completion_are_rejected() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let game = game_with_rolls(&state, &[0; 20]).await?;
    assert!(game.state.is_complete());
    assert_eq!(game.state.total_score(), 0);

    let err = game_service::record_roll(&state, game.id, 10, 0)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::GameComplete);
    Ok(())
}

#[tokio::test]
async fn missing_game_is_not_found() -> Result<(), AppError> {
    let state = build_test_state().await?;

    let err = game_service::load_game(&state, 77).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::GameNotFound);

    let err = game_service::record_roll(&state, 77, 1, 1)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::GameNotFound);
    Ok(())
}
