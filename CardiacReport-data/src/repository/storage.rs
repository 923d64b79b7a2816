use tracing::debug;

use crate::database::DatabasePool;
use crate::models::study::StudyRecord;
use super::errors::RepositoryError;

/// Database storage operations for study records
pub struct DatabaseStorage;

impl DatabaseStorage {
    /// Store a study in the database and return it with the allocated id
    pub async fn store_study(
        pool: &DatabasePool,
        study: &StudyRecord,
    ) -> Result<StudyRecord, RepositoryError> {
        debug!("Storing study in database: type={}", study.study_type);

        let conn = pool.inner().get().map_err(RepositoryError::Pool)?;
        let payload_text = serde_json::to_string(&study.payload)?;

        conn.execute(
            "INSERT INTO studies
             (patient_id, study_type, study_datetime, source, payload, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            (
                &study.patient_id,
                &study.study_type,
                &study.study_datetime,
                &study.source,
                &payload_text,
                &study.created_at,
            ),
        )
        .map_err(RepositoryError::Sqlite)?;

        let mut stored = study.clone();
        stored.id = conn.last_insert_rowid();
        Ok(stored)
    }

    /// Get a study by id
    pub async fn get_by_id(
        pool: &DatabasePool,
        id: i64,
    ) -> Result<Option<StudyRecord>, RepositoryError> {
        debug!("Getting study by id from database: {}", id);

        let conn = pool.inner().get().map_err(RepositoryError::Pool)?;

        let mut stmt = conn.prepare(
            "SELECT id, patient_id, study_type, study_datetime, source, payload, created_at
             FROM studies WHERE id = ?1",
        )?;

        let mut rows = stmt.query_map([id], Self::map_row)?;
        match rows.next() {
            Some(row) => Ok(Some(row?)),
            None => Ok(None),
        }
    }

    /// Get all studies for a patient, oldest first
    pub async fn list_for_patient(
        pool: &DatabasePool,
        patient_id: &str,
    ) -> Result<Vec<StudyRecord>, RepositoryError> {
        debug!("Getting studies for patient from database: {}", patient_id);

        let conn = pool.inner().get().map_err(RepositoryError::Pool)?;

        let mut stmt = conn.prepare(
            "SELECT id, patient_id, study_type, study_datetime, source, payload, created_at
             FROM studies WHERE patient_id = ?1
             ORDER BY COALESCE(study_datetime, created_at) ASC, id ASC",
        )?;

        let rows = stmt.query_map([patient_id], Self::map_row)?;
        let mut studies = Vec::new();
        for row in rows {
            studies.push(row?);
        }
        Ok(studies)
    }

    /// Get filtered studies with a total count for pagination
    pub async fn get_filtered(
        pool: &DatabasePool,
        study_type: Option<&str>,
        limit: Option<usize>,
        offset: Option<usize>,
        sort_desc: Option<bool>,
    ) -> Result<(Vec<StudyRecord>, usize), RepositoryError> {
        debug!("Getting filtered studies from database");

        let conn = pool.inner().get().map_err(RepositoryError::Pool)?;
        let sort_desc = sort_desc.unwrap_or(true);

        let total: usize = match study_type {
            Some(wanted) => conn.query_row(
                "SELECT COUNT(*) FROM studies WHERE study_type = ?1",
                [wanted],
                |row| row.get::<_, i64>(0),
            )? as usize,
            None => {
                conn.query_row("SELECT COUNT(*) FROM studies", [], |row| row.get::<_, i64>(0))?
                    as usize
            }
        };

        let order = if sort_desc { "DESC" } else { "ASC" };
        let limit = limit.unwrap_or(total) as i64;
        let offset = offset.unwrap_or(0) as i64;

        let sql = format!(
            "SELECT id, patient_id, study_type, study_datetime, source, payload, created_at
             FROM studies {}
             ORDER BY COALESCE(study_datetime, created_at) {order}, id {order}
             LIMIT ?1 OFFSET ?2",
            if study_type.is_some() { "WHERE study_type = ?3" } else { "" },
        );

        let mut stmt = conn.prepare(&sql)?;
        let mut studies = Vec::new();
        match study_type {
            Some(wanted) => {
                let rows = stmt.query_map(
                    rusqlite::params![limit, offset, wanted],
                    Self::map_row,
                )?;
                for row in rows {
                    studies.push(row?);
                }
            }
            None => {
                let rows = stmt.query_map(rusqlite::params![limit, offset], Self::map_row)?;
                for row in rows {
                    studies.push(row?);
                }
            }
        }

        Ok((studies, total))
    }

    /// Map a studies row to a StudyRecord
    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<StudyRecord> {
        let payload_text: String = row.get(5)?;
        let payload = serde_json::from_str(&payload_text).unwrap_or(serde_json::Value::Null);

        Ok(StudyRecord {
            id: row.get(0)?,
            patient_id: row.get(1)?,
            study_type: row.get(2)?,
            study_datetime: row.get(3)?,
            source: row.get(4)?,
            payload,
            created_at: row.get(6)?,
        })
    }
}
