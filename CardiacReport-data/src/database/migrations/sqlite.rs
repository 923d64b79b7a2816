//! SQLite schema for study snapshot storage

use crate::database::DatabaseError;

/// Create the studies table and its indexes
pub fn run_migrations(conn: &rusqlite::Connection) -> Result<(), DatabaseError> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS studies (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            patient_id TEXT,
            study_type TEXT NOT NULL,
            study_datetime TEXT,
            source TEXT,
            payload TEXT NOT NULL,
            created_at TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_studies_patient_created
        ON studies (patient_id, created_at);
        CREATE INDEX IF NOT EXISTS idx_studies_type
        ON studies (study_type);",
    )
    .map_err(|e| DatabaseError::MigrationError(e.to_string()))?;

    Ok(())
}
