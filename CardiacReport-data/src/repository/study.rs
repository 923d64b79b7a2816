use chrono::Utc;
use tracing::{debug, error};
use async_trait::async_trait;

use crate::models::study::{CreateStudyRequest, StudyRecord};
use crate::database::get_db_pool;
use super::errors::RepositoryError;
use super::in_memory::InMemoryStorage;
use super::storage::DatabaseStorage;

/// Ordering key for study listings: performed-at when known, otherwise
/// stored-at, with the row id as a tiebreaker.
pub(super) fn study_order_key(study: &StudyRecord) -> (String, i64) {
    let stamp = study
        .study_datetime
        .clone()
        .unwrap_or_else(|| study.created_at.clone());
    (stamp, study.id)
}

/// Repository trait for study snapshots
#[async_trait]
pub trait StudyRepositoryTrait {
    /// Store a new study snapshot
    async fn create(&self, request: CreateStudyRequest) -> Result<StudyRecord, RepositoryError>;

    /// Get a study by id
    async fn get_by_id(&self, id: i64) -> Result<Option<StudyRecord>, RepositoryError>;

    /// Get all studies for a patient, oldest first
    async fn list_for_patient(&self, patient_id: &str) -> Result<Vec<StudyRecord>, RepositoryError>;

    /// Get filtered studies with a total count
    async fn get_filtered(
        &self,
        study_type: Option<String>,
        limit: Option<usize>,
        offset: Option<usize>,
        sort_desc: Option<bool>,
    ) -> Result<(Vec<StudyRecord>, usize), RepositoryError>;
}

/// Repository for study snapshots.
/// Uses the SQLite pool when available and falls back to in-memory storage.
#[derive(Debug, Clone, Default)]
pub struct StudyRepository {
    /// In-memory storage for when the database is not available
    storage: InMemoryStorage,
}

impl StudyRepository {
    /// Create a new repository
    pub fn new() -> Self {
        Self {
            storage: InMemoryStorage::new(),
        }
    }
}

#[async_trait]
impl StudyRepositoryTrait for StudyRepository {
    /// Store a new study snapshot
    async fn create(&self, request: CreateStudyRequest) -> Result<StudyRecord, RepositoryError> {
        let study = StudyRecord {
            id: 0,
            patient_id: request.patient_id,
            study_type: request.study_type,
            study_datetime: request.study_datetime,
            source: request.source,
            payload: request.payload,
            created_at: Utc::now().to_rfc3339(),
        };

        match get_db_pool() {
            Ok(pool) => {
                debug!("Storing study in database: type={}", study.study_type);
                match DatabaseStorage::store_study(&pool, &study).await {
                    Ok(stored) => Ok(stored),
                    Err(e) => {
                        error!("Failed to store study in database: {}", e);
                        let mut fallback = study;
                        fallback.id = self.storage.allocate_id();
                        self.storage.store_study(&fallback).await
                    }
                }
            }
            Err(e) => {
                debug!("Database not available ({}), using in-memory storage", e);
                let mut fallback = study;
                fallback.id = self.storage.allocate_id();
                self.storage.store_study(&fallback).await
            }
        }
    }

    /// Get a study by id
    async fn get_by_id(&self, id: i64) -> Result<Option<StudyRecord>, RepositoryError> {
        match get_db_pool() {
            Ok(pool) => {
                debug!("Getting study by id from database: {}", id);
                match DatabaseStorage::get_by_id(&pool, id).await {
                    Ok(study) => Ok(study),
                    Err(e) => {
                        error!("Failed to get study by id from database: {}", e);
                        self.storage.get_by_id(id).await
                    }
                }
            }
            Err(e) => {
                debug!("Database not available ({}), using in-memory storage for get_by_id", e);
                self.storage.get_by_id(id).await
            }
        }
    }

    /// Get all studies for a patient, oldest first
    async fn list_for_patient(&self, patient_id: &str) -> Result<Vec<StudyRecord>, RepositoryError> {
        match get_db_pool() {
            Ok(pool) => {
                debug!("Getting studies for patient from database: {}", patient_id);
                match DatabaseStorage::list_for_patient(&pool, patient_id).await {
                    Ok(studies) => Ok(studies),
                    Err(e) => {
                        error!("Failed to get patient studies from database: {}", e);
                        self.storage.list_for_patient(patient_id).await
                    }
                }
            }
            Err(e) => {
                debug!(
                    "Database not available ({}), using in-memory storage for list_for_patient",
                    e
                );
                self.storage.list_for_patient(patient_id).await
            }
        }
    }

    /// Get filtered studies with a total count
    async fn get_filtered(
        &self,
        study_type: Option<String>,
        limit: Option<usize>,
        offset: Option<usize>,
        sort_desc: Option<bool>,
    ) -> Result<(Vec<StudyRecord>, usize), RepositoryError> {
        match get_db_pool() {
            Ok(pool) => {
                debug!("Getting filtered studies from database");
                match DatabaseStorage::get_filtered(
                    &pool,
                    study_type.as_deref(),
                    limit,
                    offset,
                    sort_desc,
                )
                .await
                {
                    Ok(result) => Ok(result),
                    Err(e) => {
                        error!("Failed to get filtered studies from database: {}", e);
                        self.storage
                            .get_filtered(study_type.as_deref(), limit, offset, sort_desc)
                            .await
                    }
                }
            }
            Err(e) => {
                debug!("Database not available ({}), using in-memory storage for get_filtered", e);
                self.storage
                    .get_filtered(study_type.as_deref(), limit, offset, sort_desc)
                    .await
            }
        }
    }
}

/// Mock study repository for testing
#[cfg(any(test, feature = "mock"))]
pub mod tests {
    use super::*;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Mutex;

    /// Mock implementation of StudyRepository for testing
    pub struct MockStudyRepository {
        studies: Mutex<Vec<StudyRecord>>,
        next_id: AtomicI64,
    }

    impl Default for MockStudyRepository {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockStudyRepository {
        /// Create a new empty mock repository
        pub fn new() -> Self {
            Self {
                studies: Mutex::new(Vec::new()),
                next_id: AtomicI64::new(1),
            }
        }

        /// Create a mock repository with predefined studies
        pub fn with_studies(studies: Vec<StudyRecord>) -> Self {
            let next_id = studies.iter().map(|s| s.id).max().unwrap_or(0) + 1;
            Self {
                studies: Mutex::new(studies),
                next_id: AtomicI64::new(next_id),
            }
        }
    }

    #[async_trait]
    impl StudyRepositoryTrait for MockStudyRepository {
        async fn create(&self, request: CreateStudyRequest) -> Result<StudyRecord, RepositoryError> {
            let study = StudyRecord {
                id: self.next_id.fetch_add(1, Ordering::SeqCst),
                patient_id: request.patient_id,
                study_type: request.study_type,
                study_datetime: request.study_datetime,
                source: request.source,
                payload: request.payload,
                created_at: Utc::now().to_rfc3339(),
            };

            self.studies.lock()?.push(study.clone());
            Ok(study)
        }

        async fn get_by_id(&self, id: i64) -> Result<Option<StudyRecord>, RepositoryError> {
            Ok(self.studies.lock()?.iter().find(|s| s.id == id).cloned())
        }

        async fn list_for_patient(&self, patient_id: &str) -> Result<Vec<StudyRecord>, RepositoryError> {
            let mut studies: Vec<StudyRecord> = self
                .studies
                .lock()?
                .iter()
                .filter(|s| s.patient_id.as_deref() == Some(patient_id))
                .cloned()
                .collect();

            studies.sort_by(|a, b| study_order_key(a).cmp(&study_order_key(b)));
            Ok(studies)
        }

        async fn get_filtered(
            &self,
            study_type: Option<String>,
            limit: Option<usize>,
            offset: Option<usize>,
            sort_desc: Option<bool>,
        ) -> Result<(Vec<StudyRecord>, usize), RepositoryError> {
            let sort_desc = sort_desc.unwrap_or(true);

            let mut filtered: Vec<StudyRecord> = self
                .studies
                .lock()?
                .iter()
                .filter(|s| match &study_type {
                    Some(wanted) => &s.study_type == wanted,
                    None => true,
                })
                .cloned()
                .collect();

            filtered.sort_by(|a, b| {
                let cmp = study_order_key(a).cmp(&study_order_key(b));
                if sort_desc {
                    cmp.reverse()
                } else {
                    cmp
                }
            });

            let total = filtered.len();
            let paged = filtered
                .into_iter()
                .skip(offset.unwrap_or(0))
                .take(limit.unwrap_or(usize::MAX))
                .collect();

            Ok((paged, total))
        }
    }

    #[cfg(test)]
    mod mock_tests {
        use super::*;

        #[tokio::test]
        async fn test_mock_repository_create_and_list() {
            let repo = MockStudyRepository::new();

            let request = CreateStudyRequest {
                patient_id: Some("12345".to_string()),
                study_type: "echo".to_string(),
                study_datetime: Some("2024-03-01T10:00:00Z".to_string()),
                source: Some("manual".to_string()),
                payload: serde_json::json!({"report_texts": {"echo": "LV: Normotroof."}}),
            };

            let created = repo.create(request).await.unwrap();
            assert_eq!(created.id, 1);
            assert_eq!(created.study_type, "echo");

            let studies = repo.list_for_patient("12345").await.unwrap();
            assert_eq!(studies.len(), 1);
            assert_eq!(studies[0].id, created.id);

            let missing = repo.list_for_patient("99999").await.unwrap();
            assert!(missing.is_empty());
        }

        #[tokio::test]
        async fn test_mock_repository_ordering() {
            let repo = MockStudyRepository::new();

            for (stamp, kind) in [
                ("2024-03-02T09:00:00Z", "ecg"),
                ("2024-03-01T09:00:00Z", "echo"),
                ("2024-03-03T09:00:00Z", "holter"),
            ] {
                repo.create(CreateStudyRequest {
                    patient_id: Some("p1".to_string()),
                    study_type: kind.to_string(),
                    study_datetime: Some(stamp.to_string()),
                    source: None,
                    payload: serde_json::json!({}),
                })
                .await
                .unwrap();
            }

            let studies = repo.list_for_patient("p1").await.unwrap();
            let kinds: Vec<&str> = studies.iter().map(|s| s.study_type.as_str()).collect();
            assert_eq!(kinds, vec!["echo", "ecg", "holter"]);

            let (page, total) = repo
                .get_filtered(None, Some(2), Some(0), Some(true))
                .await
                .unwrap();
            assert_eq!(total, 3);
            assert_eq!(page.len(), 2);
            assert_eq!(page[0].study_type, "holter");
        }
    }
}
