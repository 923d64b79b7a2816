//! Database schema migrations

use tracing::info;

use super::connection::DatabasePool;
use super::DatabaseError;

mod sqlite;

/// Run all pending migrations against the given pool
pub fn run(pool: &DatabasePool) -> Result<(), DatabaseError> {
    info!("Running database migrations");

    let conn = pool
        .inner()
        .get()
        .map_err(|e| DatabaseError::MigrationError(e.to_string()))?;

    sqlite::run_migrations(&conn)?;

    info!("Database migrations completed successfully");
    Ok(())
}
