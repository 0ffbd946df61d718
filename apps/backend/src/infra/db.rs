use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, max_connections, DbKind};
use crate::error::AppError;

/// Open a connection pool for `kind`. Does NOT run migrations.
pub async fn connect_db(kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let database_url = db_url(kind)?;
    let max = max_connections(kind)?;

    let mut opts = ConnectOptions::new(database_url);
    opts.max_connections(max)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);
    if kind == DbKind::SqliteMemory {
        // Every pooled connection to `sqlite::memory:` is a separate database.
        opts.min_connections(1);
    }

    let conn = Database::connect(opts).await?;
    info!(db_kind = %kind, max_connections = max, "Database connected");
    Ok(conn)
}

/// Connect and bring the schema up to date.
pub async fn bootstrap_db(kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(kind).await?;
    migrate(&conn, MigrationCommand::Up).await?;
    Ok(conn)
}
