use serde::{Deserialize, Serialize};

/// Storage model for a stored study snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyRecord {
    /// Row identifier, allocated by the storage backend
    pub id: i64,

    /// Identifier of the patient this study belongs to
    pub patient_id: Option<String>,

    /// Study modality ("echo", "ecg", "fietstest", "holter", "cied")
    pub study_type: String,

    /// When the study was performed (RFC 3339), if known
    pub study_datetime: Option<String>,

    /// Where the snapshot came from (e.g. "manual", "pdf-import")
    pub source: Option<String>,

    /// Full snapshot payload as submitted by the client
    pub payload: serde_json::Value,

    /// When the record was stored (RFC 3339)
    pub created_at: String,
}

/// Input data for storing a new study snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStudyRequest {
    /// Identifier of the patient this study belongs to
    pub patient_id: Option<String>,

    /// Study modality ("echo", "ecg", "fietstest", "holter", "cied")
    pub study_type: String,

    /// When the study was performed (RFC 3339), if known
    pub study_datetime: Option<String>,

    /// Where the snapshot came from (e.g. "manual", "pdf-import")
    pub source: Option<String>,

    /// Full snapshot payload to store
    pub payload: serde_json::Value,
}
