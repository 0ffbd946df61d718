use actix_web::{web, HttpResponse};
use migration::get_latest_migration_version;
use serde::Serialize;
use time::OffsetDateTime;

use crate::db::require_db;
use crate::error::AppError;
use crate::state::app_state::AppState;

pub async fn root() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().body("Hello from the Bowling Backend! 🎳"))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    app_version: &'static str,
    db: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    db_error: Option<String>,
    migrations: String,
    time: String,
}

/// Always 200: a broken database is reported in the body, not the status.
/// The migration lookup doubles as the connectivity check.
async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let time = OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    let lookup = match require_db(&app_state) {
        Ok(conn) => get_latest_migration_version(conn)
            .await
            .map_err(|e| format!("DB query failed: {e}")),
        Err(e) => Err(format!("DB unavailable: {e}")),
    };

    let (db, db_error, migrations) = match lookup {
        Ok(version) => ("ok", None, version.unwrap_or_else(|| "no_migrations".to_string())),
        Err(message) => ("error", Some(message), "unknown".to_string()),
    };

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        app_version: env!("CARGO_PKG_VERSION"),
        db,
        db_error,
        migrations,
        time,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root))
        .route("/health", web::get().to(health));
}
