use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::models::patient::PatientRecord;
use super::errors::RepositoryError;

/// In-memory storage implementation for patient records
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    /// Storage for patient records, keyed by patient id
    patients: Arc<Mutex<HashMap<String, PatientRecord>>>,
}

impl InMemoryStorage {
    /// Create a new in-memory storage
    pub fn new() -> Self {
        Self {
            patients: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Store a patient record in memory, replacing any record with the same id
    pub async fn store_patient(&self, record: &PatientRecord) -> Result<PatientRecord, RepositoryError> {
        let mut store = self.patients.lock().map_err(|e| RepositoryError::MutexLock(e.to_string()))?;
        store.insert(record.id.clone(), record.clone());
        Ok(record.clone())
    }

    /// Get a patient record by id from memory
    pub async fn get_by_id(&self, id: &str) -> Result<Option<PatientRecord>, RepositoryError> {
        let store = self.patients.lock().map_err(|e| RepositoryError::MutexLock(e.to_string()))?;
        Ok(store.get(id).cloned())
    }

    /// Get all patient records from memory
    pub async fn get_all(&self) -> Result<Vec<PatientRecord>, RepositoryError> {
        let store = self.patients.lock().map_err(|e| RepositoryError::MutexLock(e.to_string()))?;
        let records: Vec<PatientRecord> = store.values().cloned().collect();
        Ok(records)
    }
}
