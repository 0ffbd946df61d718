use futures_util::future::BoxFuture;
use sea_orm::{
    AccessMode, ConnectionTrait, DatabaseBackend, DatabaseTransaction, IsolationLevel,
    TransactionTrait,
};
use tracing::warn;

use super::require_db;
use crate::error::AppError;
use crate::state::app_state::AppState;

/// Execute `f` within a database transaction.
///
/// Commits when `f` returns `Ok`, rolls back when it returns `Err`. The
/// closure receives the transaction by reference and must return a boxed
/// future borrowing it:
///
/// ```rust,ignore
/// with_txn(&state, move |txn| Box::pin(async move { games::require_game(txn, id).await.map_err(Into::into) })).await
/// ```
pub async fn with_txn<R, F>(state: &AppState, f: F) -> Result<R, AppError>
where
    F: for<'t> FnOnce(&'t DatabaseTransaction) -> BoxFuture<'t, Result<R, AppError>>,
{
    let db = require_db(state)?;
    let txn = db.begin().await?;
    finish(txn, f).await
}

/// Like [`with_txn`], but every statement in `f` reads from one snapshot.
///
/// Loading a game takes two statements (game row, then frame rows); at
/// Postgres' default READ COMMITTED a roll committing between them would
/// be seen by one and not the other.
pub async fn with_read_txn<R, F>(state: &AppState, f: F) -> Result<R, AppError>
where
    F: for<'t> FnOnce(&'t DatabaseTransaction) -> BoxFuture<'t, Result<R, AppError>>,
{
    let db = require_db(state)?;
    let (isolation, access) = snapshot_config(db.get_database_backend());
    let txn = db.begin_with_config(isolation, access).await?;
    finish(txn, f).await
}

/// SQLite transactions already read from a single snapshot and reject
/// explicit settings.
fn snapshot_config(backend: DatabaseBackend) -> (Option<IsolationLevel>, Option<AccessMode>) {
    match backend {
        DatabaseBackend::Sqlite => (None, None),
        _ => (
            Some(IsolationLevel::RepeatableRead),
            Some(AccessMode::ReadOnly),
        ),
    }
}

async fn finish<R, F>(txn: DatabaseTransaction, f: F) -> Result<R, AppError>
where
    F: for<'t> FnOnce(&'t DatabaseTransaction) -> BoxFuture<'t, Result<R, AppError>>,
{
    match f(&txn).await {
        Ok(val) => {
            txn.commit().await?;
            Ok(val)
        }
        Err(err) => {
            // Preserve the original error even if rollback fails.
            if let Err(rollback_err) = txn.rollback().await {
                warn!(error = %rollback_err, "Rollback failed");
            }
            Err(err)
        }
    }
}
