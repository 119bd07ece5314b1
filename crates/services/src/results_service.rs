use std::collections::BTreeMap;
use std::sync::Arc;

use exam_core::model::{ExamCategory, ExamResult, ExamSession};
use exam_core::scoring::{self, ScoreReport};
use storage::repository::{ExamResultRepository, StorageError};

use crate::error::ExamError;

/// Scores completed sessions and reads/writes the latest result per category.
#[derive(Clone)]
pub struct ResultService {
    results: Arc<dyn ExamResultRepository>,
}

impl ResultService {
    #[must_use]
    pub fn new(results: Arc<dyn ExamResultRepository>) -> Self {
        Self { results }
    }

    /// Score a completed session without touching storage.
    ///
    /// # Errors
    ///
    /// Returns `ExamError::Scoring` if the session is not completed.
    pub fn score(&self, session: &ExamSession) -> Result<ScoreReport, ExamError> {
        Ok(scoring::score_report(session)?)
    }

    /// Replace the stored result for the result's category.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write fails.
    pub async fn persist(&self, result: &ExamResult) -> Result<(), StorageError> {
        self.results.save_result(result).await?;
        tracing::info!(
            category = %result.category(),
            score = result.score_percent(),
            passed = result.passed(),
            "exam result persisted"
        );
        Ok(())
    }

    /// Latest stored result, or `None` if never taken or unreadable.
    pub async fn latest(&self, category: ExamCategory) -> Option<ExamResult> {
        self.results.load_result(category).await
    }

    pub async fn all(&self) -> BTreeMap<ExamCategory, ExamResult> {
        self.results.load_results().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exam_core::bank::QuestionBank;
    use exam_core::time::fixed_now;
    use storage::repository::Storage;

    #[tokio::test]
    async fn retake_replaces_previous_result() {
        let storage = Storage::in_memory();
        let service = ResultService::new(Arc::clone(&storage.results));
        let bank = QuestionBank::builtin().unwrap();
        let config = bank.config(ExamCategory::Linux).unwrap();

        let fail = ExamResult::new(config, 30, fixed_now(), 1_500).unwrap();
        let pass = ExamResult::new(config, 90, fixed_now(), 700).unwrap();
        service.persist(&fail).await.unwrap();
        service.persist(&pass).await.unwrap();

        assert_eq!(service.latest(ExamCategory::Linux).await, Some(pass));
        assert_eq!(service.all().await.len(), 1);
    }

    #[test]
    fn scoring_requires_completion() {
        let bank = QuestionBank::builtin().unwrap();
        let session = ExamSession::new(
            bank.config(ExamCategory::Cryptography).unwrap().clone(),
            bank.questions(ExamCategory::Cryptography).unwrap(),
        )
        .unwrap();
        let service = ResultService::new(Arc::clone(&Storage::in_memory().results));
        assert!(matches!(
            service.score(&session),
            Err(ExamError::Scoring(scoring::ScoringError::NotCompleted))
        ));
    }
}
