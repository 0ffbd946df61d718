//! SeaORM -> DomainError translation helpers.
//!
//! Adapters return `sea_orm::DbErr`; repos convert here, and higher layers
//! map `DomainError` to `AppError` via `From`.

use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::trace_ctx;

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

fn map_custom(msg: &str) -> Option<DomainError> {
    let trace_id = trace_ctx::trace_id();

    if let Some(raw_id) = msg.strip_prefix("GAME_NOT_FOUND:") {
        return Some(match raw_id.parse::<i64>() {
            Ok(game_id) => {
                warn!(trace_id = %trace_id, game_id, "Game not found");
                DomainError::game_not_found(game_id)
            }
            Err(_) => DomainError::not_found(NotFoundKind::Game, "Game not found"),
        });
    }

    if let Some(json_str) = msg.strip_prefix("OPTIMISTIC_LOCK:") {
        #[derive(serde::Deserialize)]
        struct LockInfo {
            expected: i32,
            actual: i32,
        }

        return Some(match serde_json::from_str::<LockInfo>(json_str) {
            Ok(info) => {
                warn!(
                    trace_id = %trace_id,
                    expected = info.expected,
                    actual = info.actual,
                    "Optimistic lock conflict detected"
                );
                DomainError::conflict(
                    ConflictKind::OptimisticLock,
                    format!(
                        "Game was modified concurrently (expected version {}, actual version {}). Please refresh and retry.",
                        info.expected, info.actual
                    ),
                )
            }
            Err(_) => {
                warn!(trace_id = %trace_id, "Optimistic lock conflict detected (version info unavailable)");
                DomainError::conflict(
                    ConflictKind::OptimisticLock,
                    "Game was modified by another transaction; please retry",
                )
            }
        });
    }

    None
}

/// Translate a `DbErr` into a `DomainError` with a client-safe detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(what) => {
            warn!(trace_id = %trace_id, what = %what, "Record not found");
            return DomainError::not_found(
                NotFoundKind::Other("Record".into()),
                "Record not found",
            );
        }
        sea_orm::DbErr::Custom(msg) => {
            if let Some(mapped) = map_custom(msg) {
                return mapped;
            }
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %error_msg, "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if mentions_sqlstate(&error_msg, "23505")
        || error_msg.contains("duplicate key value violates unique constraint")
        || error_msg.contains("UNIQUE constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Unique constraint violation");
        return DomainError::conflict(
            ConflictKind::Other("Unique".into()),
            "Unique constraint violation",
        );
    }

    if mentions_sqlstate(&error_msg, "23503") || error_msg.contains("FOREIGN KEY constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Foreign key constraint violation");
        return DomainError::validation_other("Foreign key constraint violation");
    }

    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Database timeout");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(trace_id = %trace_id, raw_error = %error_msg, "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        map_db_err(e)
    }
}
