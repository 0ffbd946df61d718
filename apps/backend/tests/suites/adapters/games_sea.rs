//! Adapter tests for games_sea: CRUD and optimistic locking.

use bowling_backend::adapters::games_sea::{self, GameProgressUpdate};
use bowling_backend::db::txn::with_txn;
use bowling_backend::entities::games::GameStatus;
use bowling_backend::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use bowling_backend::AppError;

use crate::support::build_test_state;

#[tokio::test]
async fn create_and_find_by_id() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let created = games_sea::create_game(txn).await?;
            assert!(created.id > 0);
            assert_eq!(created.status, GameStatus::InProgress);
            assert_eq!(created.total_score, 0);
            assert_eq!(created.lock_version, 1);

            let found = games_sea::find_by_id(txn, created.id)
                .await?
                .expect("game should exist");
            assert_eq!(found.id, created.id);
            assert_eq!(found.status, created.status);
            assert_eq!(found.lock_version, created.lock_version);

            assert!(games_sea::find_by_id(txn, created.id + 1000).await?.is_none());
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn update_progress_bumps_version() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let created = games_sea::create_game(txn).await?;

            let update = GameProgressUpdate::new(created.id, created.lock_version)
                .with_status(GameStatus::Complete)
                .with_total_score(300);
            let updated = games_sea::update_progress(txn, update).await?;

            assert_eq!(updated.status, GameStatus::Complete);
            assert_eq!(updated.total_score, 300);
            assert_eq!(updated.lock_version, created.lock_version + 1);
            assert!(updated.updated_at >= created.updated_at);
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn stale_version_is_optimistic_lock_conflict() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let created = games_sea::create_game(txn).await?;
            games_sea::update_progress(
                txn,
                GameProgressUpdate::new(created.id, created.lock_version).with_total_score(5),
            )
            .await?;

            // Second writer still holds version 1.
            let stale = GameProgressUpdate::new(created.id, created.lock_version)
                .with_total_score(9);
            let err: DomainError = games_sea::update_progress(txn, stale)
                .await
                .unwrap_err()
                .into();

            match err {
                DomainError::Conflict(ConflictKind::OptimisticLock, detail) => {
                    assert!(detail.contains("expected version 1"), "detail: {detail}");
                    assert!(detail.contains("actual version 2"), "detail: {detail}");
                }
                other => panic!("expected optimistic lock conflict, got {other:?}"),
            }
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn update_of_missing_game_is_not_found() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let err: DomainError =
                games_sea::update_progress(txn, GameProgressUpdate::new(999_999, 1))
                    .await
                    .unwrap_err()
                    .into();
            assert!(matches!(err, DomainError::NotFound(NotFoundKind::Game, _)));

            let err: DomainError = games_sea::require_game(txn, 999_999)
                .await
                .unwrap_err()
                .into();
            assert!(matches!(err, DomainError::NotFound(NotFoundKind::Game, _)));
            Ok::<_, AppError>(())
        })
    })
    .await
}
