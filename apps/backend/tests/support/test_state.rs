use bowling_backend::config::db::DbKind;
use bowling_backend::infra::state::build_state;
use bowling_backend::{AppError, AppState};
use migration::{migrate, MigrationCommand};
use tempfile::TempDir;

/// Fresh, migrated in-memory SQLite database per call.
pub async fn build_test_state() -> Result<AppState, AppError> {
    build_state().with_db(DbKind::SqliteMemory).build().await
}

/// State backed by a pooled database, for tests that need two transactions
/// open at once.
pub struct SharedDb {
    pub state: AppState,
    _dir: Option<TempDir>,
}

/// Postgres when `BOWLING_TEST_DB=postgres` (connection settings from the
/// usual `POSTGRES_*` / `APP_DB_*` variables), otherwise a SQLite file in
/// a temporary directory.
pub async fn build_shared_state() -> Result<SharedDb, AppError> {
    if std::env::var("BOWLING_TEST_DB").is_ok_and(|v| v == "postgres") {
        let state = build_state().with_db(DbKind::Postgres).build().await?;
        return Ok(SharedDb { state, _dir: None });
    }

    let dir = tempfile::tempdir()
        .map_err(|e| AppError::internal(format!("temp dir: {e}")))?;
    let url = format!(
        "sqlite://{}?mode=rwc",
        dir.path().join("bowling.sqlite").display()
    );
    let conn = sea_orm::Database::connect(url).await?;
    migrate(&conn, MigrationCommand::Up).await?;

    Ok(SharedDb {
        state: AppState::new(conn),
        _dir: Some(dir),
    })
}
