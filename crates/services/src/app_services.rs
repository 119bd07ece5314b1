use std::sync::Arc;

use exam_core::bank::QuestionBank;
use storage::repository::Storage;

use crate::Clock;
use crate::catalog::ExamCatalog;
use crate::certification::CertificationService;
use crate::error::AppServicesError;
use crate::observers::CompletionHub;
use crate::results_service::ResultService;

/// Assembles app-facing services over one storage backend.
///
/// The certification service is registered on the completion hub, so every
/// stored exam result refreshes its status.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<ExamCatalog>,
    results: Arc<ResultService>,
    certification: Arc<CertificationService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails or the
    /// built-in question bank is malformed.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        lab_names: Vec<String>,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::from_storage(&storage, clock, lab_names)
    }

    /// Build services over process-local storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Bank` if the built-in question bank is malformed.
    pub fn in_memory(clock: Clock, lab_names: Vec<String>) -> Result<Self, AppServicesError> {
        Self::from_storage(&Storage::in_memory(), clock, lab_names)
    }

    /// Build services over an already-open storage aggregate.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Bank` if the built-in question bank is malformed.
    pub fn from_storage(
        storage: &Storage,
        clock: Clock,
        lab_names: Vec<String>,
    ) -> Result<Self, AppServicesError> {
        let bank = Arc::new(QuestionBank::builtin()?);
        let results = ResultService::new(Arc::clone(&storage.results));
        let hub = CompletionHub::new();

        let certification = Arc::new(CertificationService::new(
            clock,
            Arc::clone(&bank),
            Arc::clone(&storage.results),
            Arc::clone(&storage.certificates),
            Arc::clone(&storage.labs),
            lab_names,
        ));
        hub.register(certification.clone());

        let catalog = Arc::new(ExamCatalog::new(clock, bank, results.clone(), hub));

        Ok(Self {
            catalog,
            results: Arc::new(results),
            certification,
        })
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<ExamCatalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn results(&self) -> Arc<ResultService> {
        Arc::clone(&self.results)
    }

    #[must_use]
    pub fn certification(&self) -> Arc<CertificationService> {
        Arc::clone(&self.certification)
    }
}
