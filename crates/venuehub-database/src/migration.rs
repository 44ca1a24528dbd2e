//! Embedded schema migrations for the PostgreSQL store.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::info;

use venuehub_core::error::{AppError, ErrorKind};

/// Migrations compiled in from the workspace `migrations/` directory.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Bring the schema up to date.
///
/// Safe to call from several processes at once; sqlx serializes runs with
/// an advisory lock.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    let latest = MIGRATOR.iter().map(|m| m.version).max().unwrap_or_default();
    info!(
        embedded = MIGRATOR.iter().count(),
        latest, "Applying schema migrations"
    );

    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(ErrorKind::Database, "Schema migration failed", e)
    })?;

    info!(version = latest, "Schema is current");
    Ok(())
}
