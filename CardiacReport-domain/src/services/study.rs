//! Study snapshot service: validation and persistence orchestration.

use thiserror::Error;
use tracing::instrument;
use async_trait::async_trait;
use validator::Validate;

use crate::entities::snapshot::StudySnapshot;
use cardiac_report_data::models::study::{CreateStudyRequest, StudyRecord};
use cardiac_report_data::repository::{RepositoryError, StudyRepository, StudyRepositoryTrait};

/// Study modalities the service accepts
pub const STUDY_TYPES: [&str; 5] = ["echo", "ecg", "fietstest", "holter", "cied"];

/// Study service errors
#[derive(Debug, Error)]
pub enum StudyServiceError {
    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Not found error
    #[error("Study not found: {0}")]
    NotFound(String),

    /// Repository error
    #[error("Repository error: {0}")]
    Repository(String),
}

/// Trait for study service operations
#[async_trait]
pub trait StudyServiceTrait {
    /// Validate and store a study snapshot, returning the stored record
    async fn store_snapshot(
        &self,
        study_type: &str,
        snapshot: StudySnapshot,
        study_datetime: Option<String>,
        source: Option<String>,
    ) -> Result<StudyRecord, StudyServiceError>;

    /// Get a stored study by id
    async fn get_study(&self, id: i64) -> Result<StudyRecord, StudyServiceError>;

    /// Get all studies for a patient, oldest first
    async fn studies_for_patient(&self, patient_id: &str)
        -> Result<Vec<StudyRecord>, StudyServiceError>;

    /// Get filtered studies with a total count
    async fn get_filtered_studies(
        &self,
        study_type: Option<String>,
        limit: Option<usize>,
        offset: Option<usize>,
        sort_desc: Option<bool>,
    ) -> Result<(Vec<StudyRecord>, usize), StudyServiceError>;
}

/// Study service for domain logic
pub struct StudyService<R: StudyRepositoryTrait> {
    repository: R,
}

impl<R: StudyRepositoryTrait> StudyService<R> {
    /// Create a new study service
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Map repository errors to service errors
    fn map_repo_error(&self, err: RepositoryError) -> StudyServiceError {
        match err {
            RepositoryError::NotFound(msg) => StudyServiceError::NotFound(msg),
            RepositoryError::Validation(msg) => StudyServiceError::Validation(msg),
            _ => StudyServiceError::Repository(err.to_string()),
        }
    }

    /// Validate the study type and snapshot contents
    fn validate_snapshot(
        &self,
        study_type: &str,
        snapshot: &StudySnapshot,
    ) -> Result<(), StudyServiceError> {
        if !STUDY_TYPES.contains(&study_type) {
            return Err(StudyServiceError::Validation(format!(
                "Unknown study type '{}'; expected one of: {}",
                study_type,
                STUDY_TYPES.join(", ")
            )));
        }
        if snapshot.is_empty() {
            return Err(StudyServiceError::Validation(
                "Snapshot contains no patient data, measurements or report texts".to_string(),
            ));
        }
        if let Some(patient) = snapshot.effective_patient() {
            if let Err(validation_errors) = patient.validate() {
                let message = validation_errors
                    .field_errors()
                    .iter()
                    .map(|(field, errors)| {
                        let messages: Vec<String> = errors
                            .iter()
                            .map(|error| match &error.message {
                                Some(message) => message.to_string(),
                                None => format!("Invalid {}", field),
                            })
                            .collect();
                        format!("{}: {}", field, messages.join(", "))
                    })
                    .collect::<Vec<String>>()
                    .join("; ");
                return Err(StudyServiceError::Validation(message));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl<R: StudyRepositoryTrait + Send + Sync> StudyServiceTrait for StudyService<R> {
    #[instrument(skip(self, snapshot))]
    async fn store_snapshot(
        &self,
        study_type: &str,
        snapshot: StudySnapshot,
        study_datetime: Option<String>,
        source: Option<String>,
    ) -> Result<StudyRecord, StudyServiceError> {
        self.validate_snapshot(study_type, &snapshot)?;

        let patient_id = snapshot
            .effective_patient()
            .and_then(|patient| patient.patient_id.clone());

        let payload = serde_json::to_value(&snapshot)
            .map_err(|e| StudyServiceError::Validation(format!("Snapshot not serializable: {}", e)))?;

        let request = CreateStudyRequest {
            patient_id,
            study_type: study_type.to_string(),
            study_datetime,
            source,
            payload,
        };

        self.repository
            .create(request)
            .await
            .map_err(|e| self.map_repo_error(e))
    }

    async fn get_study(&self, id: i64) -> Result<StudyRecord, StudyServiceError> {
        self.repository
            .get_by_id(id)
            .await
            .map_err(|e| self.map_repo_error(e))?
            .ok_or_else(|| StudyServiceError::NotFound(format!("Study with id {} not found", id)))
    }

    async fn studies_for_patient(
        &self,
        patient_id: &str,
    ) -> Result<Vec<StudyRecord>, StudyServiceError> {
        if patient_id.trim().is_empty() {
            return Err(StudyServiceError::Validation(
                "Patient id must not be empty".to_string(),
            ));
        }
        self.repository
            .list_for_patient(patient_id)
            .await
            .map_err(|e| self.map_repo_error(e))
    }

    async fn get_filtered_studies(
        &self,
        study_type: Option<String>,
        limit: Option<usize>,
        offset: Option<usize>,
        sort_desc: Option<bool>,
    ) -> Result<(Vec<StudyRecord>, usize), StudyServiceError> {
        if let Some(study_type) = study_type.as_deref() {
            if !STUDY_TYPES.contains(&study_type) {
                return Err(StudyServiceError::Validation(format!(
                    "Unknown study type '{}'",
                    study_type
                )));
            }
        }
        self.repository
            .get_filtered(study_type, limit, offset, sort_desc)
            .await
            .map_err(|e| self.map_repo_error(e))
    }
}

/// Create a default study service backed by the data-layer repository
pub fn create_default_study_service() -> impl StudyServiceTrait + Send + Sync {
    StudyService::new(StudyRepository::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::patient::PatientContext;
    use cardiac_report_data::repository::tests::MockStudyRepository;

    fn snapshot_with_patient(patient_id: &str) -> StudySnapshot {
        let mut snapshot = StudySnapshot::default();
        snapshot.patient = Some(PatientContext {
            patient_id: Some(patient_id.to_string()),
            ..Default::default()
        });
        snapshot
            .report_texts
            .insert("echo".to_string(), "LV: Normotroof.".to_string());
        snapshot
    }

    #[tokio::test]
    async fn test_store_snapshot_rejects_unknown_type() {
        let service = StudyService::new(MockStudyRepository::new());
        let result = service
            .store_snapshot("angiogram", snapshot_with_patient("p1"), None, None)
            .await;

        assert!(matches!(result, Err(StudyServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn test_store_snapshot_rejects_empty_snapshot() {
        let service = StudyService::new(MockStudyRepository::new());
        let result = service
            .store_snapshot("echo", StudySnapshot::default(), None, None)
            .await;

        let err = result.unwrap_err().to_string();
        assert!(err.contains("no patient data"));
    }

    #[tokio::test]
    async fn test_store_snapshot_extracts_patient_id() {
        let service = StudyService::new(MockStudyRepository::new());
        let stored = service
            .store_snapshot("echo", snapshot_with_patient("p42"), None, Some("manual".to_string()))
            .await
            .unwrap();

        assert_eq!(stored.patient_id.as_deref(), Some("p42"));
        assert_eq!(stored.source.as_deref(), Some("manual"));
        assert_eq!(stored.study_type, "echo");
        assert!(stored.payload.get("report_texts").is_some());
    }

    #[tokio::test]
    async fn test_store_snapshot_rejects_out_of_range_patient() {
        let service = StudyService::new(MockStudyRepository::new());
        let mut snapshot = snapshot_with_patient("p1");
        if let Some(patient) = snapshot.patient.as_mut() {
            patient.leeftijd = Some(300.0);
        }

        let result = service.store_snapshot("echo", snapshot, None, None).await;
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Leeftijd buiten bereik"));
    }

    #[tokio::test]
    async fn test_get_study_not_found() {
        let service = StudyService::new(MockStudyRepository::new());
        let result = service.get_study(99).await;
        assert!(matches!(result, Err(StudyServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_studies_for_patient_requires_id() {
        let service = StudyService::new(MockStudyRepository::new());
        let result = service.studies_for_patient("  ").await;
        assert!(matches!(result, Err(StudyServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn test_filtered_studies_validates_type() {
        let service = StudyService::new(MockStudyRepository::new());
        let result = service
            .get_filtered_studies(Some("angiogram".to_string()), None, None, None)
            .await;
        assert!(matches!(result, Err(StudyServiceError::Validation(_))));

        let (studies, total) = service
            .get_filtered_studies(Some("echo".to_string()), None, None, None)
            .await
            .unwrap();
        assert!(studies.is_empty());
        assert_eq!(total, 0);
    }
}
