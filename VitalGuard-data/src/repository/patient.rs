use async_trait::async_trait;
use tracing::debug;

use crate::models::patient::PatientRecord;
use super::errors::RepositoryError;
use super::in_memory::InMemoryStorage;

/// Repository trait for patient records.
///
/// The trait covers lookups only; how records get into a store is the
/// concern of the concrete implementation.
#[async_trait]
pub trait PatientRepositoryTrait {
    /// Get a patient record by id
    async fn get_by_id(&self, id: &str) -> Result<Option<PatientRecord>, RepositoryError>;

    /// Get all patient records
    async fn get_all(&self) -> Result<Vec<PatientRecord>, RepositoryError>;
}

/// Repository for patient records backed by in-memory storage
#[derive(Debug, Clone, Default)]
pub struct PatientRepository {
    storage: InMemoryStorage,
}

impl PatientRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            storage: InMemoryStorage::new(),
        }
    }

    /// Create a repository seeded with patient records
    pub async fn with_patients(records: Vec<PatientRecord>) -> Result<Self, RepositoryError> {
        let repository = Self::new();
        for record in records {
            repository.insert(&record).await?;
        }
        Ok(repository)
    }

    /// Store a patient record, replacing any record with the same id
    pub async fn insert(&self, record: &PatientRecord) -> Result<PatientRecord, RepositoryError> {
        debug!("Storing patient record: {}", record.id);
        self.storage.store_patient(record).await
    }
}

#[async_trait]
impl PatientRepositoryTrait for PatientRepository {
    /// Get a patient record by id
    async fn get_by_id(&self, id: &str) -> Result<Option<PatientRecord>, RepositoryError> {
        debug!("Getting patient record by id: {}", id);
        self.storage.get_by_id(id).await
    }

    /// Get all patient records
    async fn get_all(&self) -> Result<Vec<PatientRecord>, RepositoryError> {
        self.storage.get_all().await
    }
}

/// Mock patient repository for testing
#[cfg(any(test, feature = "mock"))]
pub mod tests {
    use super::*;

    /// Mock implementation of the patient repository for testing
    pub struct MockPatientRepository {
        patients: Vec<PatientRecord>,
    }

    impl Default for MockPatientRepository {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockPatientRepository {
        /// Create a new empty mock repository
        pub fn new() -> Self {
            Self { patients: Vec::new() }
        }

        /// Create a mock repository with predefined patient records
        pub fn with_patients(patients: Vec<PatientRecord>) -> Self {
            Self { patients }
        }
    }

    #[async_trait]
    impl PatientRepositoryTrait for MockPatientRepository {
        async fn get_by_id(&self, id: &str) -> Result<Option<PatientRecord>, RepositoryError> {
            let record = self.patients.iter()
                .find(|p| p.id == id)
                .cloned();

            Ok(record)
        }

        async fn get_all(&self) -> Result<Vec<PatientRecord>, RepositoryError> {
            Ok(self.patients.clone())
        }
    }
}
