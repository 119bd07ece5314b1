use async_trait::async_trait;
use exam_core::model::{ExamCategory, ExamResult, IndividualCertificate, MasterCertificate};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::exam_store::ExamStore;

/// Logical key holding the category → latest result mapping.
pub const RESULTS_KEY: &str = "cybersecurity_exams";
/// Logical key holding the category → individual certificate mapping.
pub const INDIVIDUAL_CERTIFICATES_KEY: &str = "individual_certificates";
/// Logical key holding the single master certificate record.
pub const MASTER_CERTIFICATE_KEY: &str = "cybersecurity_certificate";

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

//
// ─── KEY-VALUE PORT ────────────────────────────────────────────────────────────
//

/// Durable string store. Each `set` is a single atomic write of one key.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value for a key.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write or replace the value for a key.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Simple in-memory store for tests and throwaway runs.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

//
// ─── TYPED REPOSITORIES ────────────────────────────────────────────────────────
//
// Reads never fail: missing, unreadable, or malformed data comes back as
// absent and is logged. Writes report errors to the caller.
//

#[async_trait]
pub trait ExamResultRepository: Send + Sync {
    /// Latest result per category, in catalog order.
    async fn load_results(&self) -> BTreeMap<ExamCategory, ExamResult>;

    async fn load_result(&self, category: ExamCategory) -> Option<ExamResult>;

    /// Store `result` as the only result for its category, replacing any
    /// earlier attempt.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write fails.
    async fn save_result(&self, result: &ExamResult) -> Result<(), StorageError>;
}

#[async_trait]
pub trait CertificateRepository: Send + Sync {
    async fn load_individual_certificates(&self) -> BTreeMap<ExamCategory, IndividualCertificate>;

    async fn load_individual_certificate(
        &self,
        category: ExamCategory,
    ) -> Option<IndividualCertificate>;

    /// Store a certificate, replacing any earlier one for the same category.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write fails.
    async fn save_individual_certificate(
        &self,
        certificate: &IndividualCertificate,
    ) -> Result<(), StorageError>;

    async fn load_master_certificate(&self) -> Option<MasterCertificate>;

    /// Store the master certificate, replacing any earlier one.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write fails.
    async fn save_master_certificate(
        &self,
        certificate: &MasterCertificate,
    ) -> Result<(), StorageError>;
}

/// Progress reported by a lab simulator under `<lab>_completed` and
/// `<lab>_timeSpent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LabProgress {
    pub completed: bool,
    pub seconds_spent: u64,
}

#[async_trait]
pub trait LabProgressRepository: Send + Sync {
    async fn lab_progress(&self, lab: &str) -> LabProgress;

    /// Write progress for a lab in the format the simulators use.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if either key cannot be written.
    async fn record_lab_progress(
        &self,
        lab: &str,
        progress: LabProgress,
    ) -> Result<(), StorageError>;
}

/// Aggregates the persistence ports behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub kv: Arc<dyn KeyValueStore>,
    pub results: Arc<dyn ExamResultRepository>,
    pub certificates: Arc<dyn CertificateRepository>,
    pub labs: Arc<dyn LabProgressRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_store(Arc::new(InMemoryStore::new()))
    }

    /// Wire the typed repositories over any key-value backend.
    #[must_use]
    pub fn from_store(kv: Arc<dyn KeyValueStore>) -> Self {
        let store = ExamStore::new(Arc::clone(&kv));
        let results: Arc<dyn ExamResultRepository> = Arc::new(store.clone());
        let certificates: Arc<dyn CertificateRepository> = Arc::new(store.clone());
        let labs: Arc<dyn LabProgressRepository> = Arc::new(store);
        Self {
            kv,
            results,
            certificates,
            labs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn in_memory_store_set_overwrites() {
        let store = InMemoryStore::new();
        assert_eq!(store.get("k").await.unwrap(), None);

        store.set("k", "v1").await.unwrap();
        store.set("k", "v2").await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v2"));
        assert_eq!(store.get("other").await.unwrap(), None);
    }

    #[tokio::test]
    async fn clones_share_entries() {
        let store = InMemoryStore::new();
        let other = store.clone();
        store.set("shared", "yes").await.unwrap();
        assert_eq!(other.get("shared").await.unwrap().as_deref(), Some("yes"));
    }

    #[test]
    fn storage_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Storage>();
    }
}
