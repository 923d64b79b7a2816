use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use cardiac_report_data::models::study::StudyRecord;
use cardiac_report_domain::entities::StudySnapshot;

/// Request body for storing a study snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct StoreSnapshotRequest {
    /// When the study was performed (RFC 3339), if known
    pub study_datetime: Option<String>,

    /// Where the snapshot came from (e.g. "manual", "pdf-import")
    pub source: Option<String>,

    /// The snapshot payload to store
    pub payload: StudySnapshot,
}

/// Response after storing a study snapshot
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StoreSnapshotResponse {
    /// Identifier of the stored study
    pub id: i64,
}

/// Public representation of a stored study
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StudyResponse {
    /// Study identifier
    pub id: i64,

    /// Identifier of the patient this study belongs to
    pub patient_id: Option<String>,

    /// Study modality ("echo", "ecg", "fietstest", "holter", "cied")
    pub study_type: String,

    /// When the study was performed (RFC 3339), if known
    pub study_datetime: Option<String>,

    /// Where the snapshot came from
    pub source: Option<String>,

    /// The stored snapshot payload
    #[schema(value_type = Object)]
    pub payload: serde_json::Value,

    /// When the record was stored (RFC 3339)
    pub created_at: String,
}

impl From<StudyRecord> for StudyResponse {
    fn from(record: StudyRecord) -> Self {
        Self {
            id: record.id,
            patient_id: record.patient_id,
            study_type: record.study_type,
            study_datetime: record.study_datetime,
            source: record.source,
            payload: record.payload,
            created_at: record.created_at,
        }
    }
}
