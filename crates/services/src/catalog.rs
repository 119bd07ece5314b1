use std::sync::{Arc, Mutex, PoisonError, Weak};

use exam_core::Clock;
use exam_core::bank::QuestionBank;
use exam_core::model::{ExamCategory, ExamConfig, ExamResult, ExamSession};

use crate::error::ExamError;
use crate::observers::{CompletionHub, ExamCompletionObserver};
use crate::results_service::ResultService;
use crate::sessions::{ExamRunner, RunnerShared};

/// One row of the exam selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub category: ExamCategory,
    pub config: ExamConfig,
    pub question_count: usize,
    pub latest_result: Option<ExamResult>,
}

/// Lists exams with their latest results and launches sessions.
///
/// At most one session launched through a catalog is live at a time:
/// launching another tears the previous one down.
pub struct ExamCatalog {
    clock: Clock,
    bank: Arc<QuestionBank>,
    results: ResultService,
    hub: CompletionHub,
    active: Mutex<Weak<RunnerShared>>,
}

impl ExamCatalog {
    #[must_use]
    pub fn new(
        clock: Clock,
        bank: Arc<QuestionBank>,
        results: ResultService,
        hub: CompletionHub,
    ) -> Self {
        Self {
            clock,
            bank,
            results,
            hub,
            active: Mutex::new(Weak::new()),
        }
    }

    /// Every exam in catalog order with its latest stored result.
    pub async fn list_categories(&self) -> Vec<CatalogEntry> {
        let mut latest = self.results.all().await;
        let mut entries = Vec::with_capacity(ExamCategory::COUNT);
        for category in self.bank.categories() {
            let Ok(config) = self.bank.config(category) else {
                continue;
            };
            entries.push(CatalogEntry {
                category,
                config: config.clone(),
                question_count: self.bank.question_count(category),
                latest_result: latest.remove(&category),
            });
        }
        entries
    }

    /// Build a fresh, not-yet-started session for `category`.
    ///
    /// # Errors
    ///
    /// Returns `ExamError::UnknownCategory` if the bank has no such exam.
    pub fn new_session(&self, category: ExamCategory) -> Result<ExamSession, ExamError> {
        let config = self.bank.config(category)?.clone();
        let questions = self.bank.questions(category)?;
        Ok(ExamSession::new(config, questions)?)
    }

    /// Launch a runner for `category` in the `NotStarted` phase, tearing
    /// down any session launched earlier.
    ///
    /// # Errors
    ///
    /// Returns `ExamError::UnknownCategory` if the bank has no such exam.
    pub fn launch(&self, category: ExamCategory) -> Result<ExamRunner, ExamError> {
        let session = self.new_session(category)?;
        let runner = ExamRunner::new(
            session,
            self.clock,
            self.results.clone(),
            self.hub.clone(),
        );

        let previous = {
            let mut active = self.active.lock().unwrap_or_else(PoisonError::into_inner);
            std::mem::replace(&mut *active, runner.downgrade())
        };
        if let Some(previous) = previous.upgrade() {
            previous.close();
        }

        tracing::info!(%category, "exam launched");
        Ok(runner)
    }

    /// Launch by raw category key such as `"websecurity"`.
    ///
    /// # Errors
    ///
    /// Returns `ExamError::UnknownCategory` for keys outside the enumerated set.
    pub fn launch_key(&self, key: &str) -> Result<ExamRunner, ExamError> {
        let category = key
            .parse::<ExamCategory>()
            .map_err(|err| ExamError::UnknownCategory(err.raw().to_owned()))?;
        self.launch(category)
    }

    /// Subscribe to exam completions (after the result is stored).
    pub fn on_completion(&self, observer: Arc<dyn ExamCompletionObserver>) {
        self.hub.register(observer);
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exam_core::model::ExamPhase;
    use exam_core::time::{fixed_clock, fixed_now};
    use storage::repository::Storage;

    fn catalog() -> (ExamCatalog, Storage) {
        let storage = Storage::in_memory();
        let catalog = ExamCatalog::new(
            fixed_clock(),
            Arc::new(QuestionBank::builtin().unwrap()),
            ResultService::new(Arc::clone(&storage.results)),
            CompletionHub::new(),
        );
        (catalog, storage)
    }

    #[tokio::test]
    async fn lists_all_categories_with_latest_results() {
        let (catalog, storage) = catalog();
        let config = ExamConfig::builtin(ExamCategory::Networking);
        let result = ExamResult::new(&config, 71, fixed_now(), 100).unwrap();
        storage.results.save_result(&result).await.unwrap();

        let entries = catalog.list_categories().await;
        let summary: Vec<_> = entries
            .iter()
            .map(|e| {
                (
                    e.category,
                    e.question_count,
                    e.config.time_limit_minutes(),
                    e.config.passing_score_percent(),
                )
            })
            .collect();
        assert_eq!(
            summary,
            vec![
                (ExamCategory::Programming, 50, 30, 70),
                (ExamCategory::Linux, 50, 25, 70),
                (ExamCategory::Networking, 50, 35, 70),
                (ExamCategory::Cryptography, 15, 30, 75),
                (ExamCategory::WebSecurity, 50, 30, 70),
            ]
        );
        assert_eq!(entries[2].latest_result, Some(result));
        assert!(entries[0].latest_result.is_none());
    }

    #[tokio::test]
    async fn launch_returns_not_started_runner() {
        let (catalog, _) = catalog();
        let runner = catalog.launch(ExamCategory::Linux).unwrap();
        assert_eq!(runner.phase(), ExamPhase::NotStarted);
        assert_eq!(runner.category(), ExamCategory::Linux);
        assert_eq!(runner.progress().total_pages, 10);
    }

    #[tokio::test]
    async fn unknown_key_is_rejected() {
        let (catalog, _) = catalog();
        assert!(matches!(
            catalog.launch_key("forensics"),
            Err(ExamError::UnknownCategory(key)) if key == "forensics"
        ));
        assert!(catalog.launch_key("cryptography").is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn launching_again_tears_down_the_previous_session() {
        let (catalog, _) = catalog();
        let first = catalog.launch(ExamCategory::Linux).unwrap();
        first.start().unwrap();

        let second = catalog.launch(ExamCategory::Programming).unwrap();
        assert!(first.is_closed());
        assert!(!second.is_closed());
        assert!(matches!(first.submit().await, Err(ExamError::Closed)));

        let remaining = first.remaining_seconds();
        tokio::time::sleep(std::time::Duration::from_secs(5)).await;
        assert_eq!(first.remaining_seconds(), remaining);
    }
}
