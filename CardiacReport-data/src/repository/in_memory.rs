use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use crate::models::study::StudyRecord;
use super::errors::RepositoryError;
use super::study::study_order_key;

/// In-memory storage implementation for study records
#[derive(Debug, Clone)]
pub struct InMemoryStorage {
    /// Stored studies keyed by id
    studies: Arc<Mutex<BTreeMap<i64, StudyRecord>>>,
    /// Next id to allocate; monotonic within the process like a rowid
    next_id: Arc<AtomicI64>,
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStorage {
    /// Create a new in-memory storage
    pub fn new() -> Self {
        Self {
            studies: Arc::new(Mutex::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    /// Allocate the next study id
    pub fn allocate_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    /// Store a study in memory
    pub async fn store_study(&self, study: &StudyRecord) -> Result<StudyRecord, RepositoryError> {
        let mut store = self.studies.lock().map_err(|e| RepositoryError::MutexLock(e.to_string()))?;
        store.insert(study.id, study.clone());
        Ok(study.clone())
    }

    /// Get a study by id from memory
    pub async fn get_by_id(&self, id: i64) -> Result<Option<StudyRecord>, RepositoryError> {
        let store = self.studies.lock().map_err(|e| RepositoryError::MutexLock(e.to_string()))?;
        Ok(store.get(&id).cloned())
    }

    /// Get all studies for a patient, oldest first
    pub async fn list_for_patient(&self, patient_id: &str) -> Result<Vec<StudyRecord>, RepositoryError> {
        let store = self.studies.lock().map_err(|e| RepositoryError::MutexLock(e.to_string()))?;

        let mut studies: Vec<StudyRecord> = store
            .values()
            .filter(|study| study.patient_id.as_deref() == Some(patient_id))
            .cloned()
            .collect();

        studies.sort_by(|a, b| study_order_key(a).cmp(&study_order_key(b)));
        Ok(studies)
    }

    /// Get filtered studies from memory
    pub async fn get_filtered(
        &self,
        study_type: Option<&str>,
        limit: Option<usize>,
        offset: Option<usize>,
        sort_desc: Option<bool>,
    ) -> Result<(Vec<StudyRecord>, usize), RepositoryError> {
        let store = self.studies.lock().map_err(|e| RepositoryError::MutexLock(e.to_string()))?;
        let sort_desc = sort_desc.unwrap_or(true);

        let mut studies: Vec<StudyRecord> = store
            .values()
            .filter(|study| match study_type {
                Some(wanted) => study.study_type == wanted,
                None => true,
            })
            .cloned()
            .collect();

        studies.sort_by(|a, b| {
            let cmp = study_order_key(a).cmp(&study_order_key(b));
            if sort_desc {
                cmp.reverse()
            } else {
                cmp
            }
        });

        let total = studies.len();
        let offset = offset.unwrap_or(0);
        let limit = limit.unwrap_or(total);

        let page = studies.into_iter().skip(offset).take(limit).collect();

        Ok((page, total))
    }
}
