use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use exam_core::Clock;
use exam_core::bank::QuestionBank;
use exam_core::model::{
    ExamCategory, ExamResult, IndividualCertificate, MasterCertificate, MasterStats,
};
use exam_core::scoring::percent_rounded;
use storage::repository::{CertificateRepository, ExamResultRepository, LabProgressRepository};
use tokio::sync::watch;

use crate::error::CertificationError;
use crate::observers::ExamCompletionObserver;

/// Snapshot of credential eligibility, derived from storage.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CertificationStatus {
    pub passed_count: usize,
    pub required_count: usize,
    pub eligible_for_master: bool,
    /// Pass flag per category; `None` if never taken.
    pub categories: Vec<(ExamCategory, Option<bool>)>,
    pub individual_certificates: Vec<ExamCategory>,
    pub has_master_certificate: bool,
}

/// Derives credential eligibility from stored results and issues certificates.
///
/// Nothing is cached: every query re-reads storage.
pub struct CertificationService {
    clock: Clock,
    bank: Arc<QuestionBank>,
    results: Arc<dyn ExamResultRepository>,
    certificates: Arc<dyn CertificateRepository>,
    labs: Arc<dyn LabProgressRepository>,
    lab_names: Vec<String>,
    status: watch::Sender<CertificationStatus>,
}

impl CertificationService {
    #[must_use]
    pub fn new(
        clock: Clock,
        bank: Arc<QuestionBank>,
        results: Arc<dyn ExamResultRepository>,
        certificates: Arc<dyn CertificateRepository>,
        labs: Arc<dyn LabProgressRepository>,
        lab_names: Vec<String>,
    ) -> Self {
        let (status, _) = watch::channel(CertificationStatus {
            required_count: ExamCategory::COUNT,
            ..CertificationStatus::default()
        });
        Self {
            clock,
            bank,
            results,
            certificates,
            labs,
            lab_names,
            status,
        }
    }

    async fn passed_results(&self) -> BTreeMap<ExamCategory, ExamResult> {
        let mut results = self.results.load_results().await;
        results.retain(|_, result| result.passed());
        results
    }

    /// Number of categories whose latest result passed.
    pub async fn passed_category_count(&self) -> usize {
        self.passed_results().await.len()
    }

    /// True only when every category has a passing latest result.
    pub async fn eligible_for_master_certificate(&self) -> bool {
        self.passed_category_count().await >= ExamCategory::COUNT
    }

    /// Issue and store a certificate for a passed category.
    ///
    /// # Errors
    ///
    /// Returns `CertificationError::NotPassed` if the latest result for the
    /// category is missing or failed, `CertificationError::Certificate` for a
    /// blank name, or `CertificationError::Storage` if the write fails.
    pub async fn issue_individual_certificate(
        &self,
        category: ExamCategory,
        holder_name: &str,
    ) -> Result<IndividualCertificate, CertificationError> {
        let Some(result) = self.results.load_result(category).await.filter(ExamResult::passed)
        else {
            return Err(CertificationError::NotPassed { category });
        };
        let config = self.bank.config(category)?;
        let certificate =
            IndividualCertificate::issue(config, &result, holder_name, self.clock.now())?;
        self.certificates
            .save_individual_certificate(&certificate)
            .await?;

        tracing::info!(%category, id = %certificate.id(), "individual certificate issued");
        self.refresh().await;
        Ok(certificate)
    }

    /// Aggregates for the master certificate from results and lab progress.
    pub async fn master_stats(&self) -> MasterStats {
        let results = self.results.load_results().await;
        let exams_passed = results.values().filter(|r| r.passed()).count();
        let total_exam_seconds = results
            .values()
            .map(|r| u64::from(r.seconds_spent()))
            .sum();

        let mut labs_completed = 0;
        let mut total_lab_seconds = 0;
        for lab in &self.lab_names {
            let progress = self.labs.lab_progress(lab).await;
            if progress.completed {
                labs_completed += 1;
            }
            total_lab_seconds += progress.seconds_spent;
        }

        MasterStats {
            completion_percentage: percent_rounded(labs_completed, self.lab_names.len()),
            exams_passed,
            total_lab_seconds,
            total_exam_seconds,
        }
    }

    /// Issue and store the master certificate.
    ///
    /// # Errors
    ///
    /// Returns `CertificationError::InsufficientExams` unless every category
    /// is passed, `CertificationError::Certificate` for a blank name, or
    /// `CertificationError::Storage` if the write fails.
    pub async fn issue_master_certificate(
        &self,
        holder_name: &str,
    ) -> Result<MasterCertificate, CertificationError> {
        let stats = self.master_stats().await;
        let certificate = MasterCertificate::issue(holder_name, stats, self.clock.now())?;
        self.certificates.save_master_certificate(&certificate).await?;

        tracing::info!(id = %certificate.id(), "master certificate issued");
        self.refresh().await;
        Ok(certificate)
    }

    pub async fn individual_certificate(
        &self,
        category: ExamCategory,
    ) -> Option<IndividualCertificate> {
        self.certificates.load_individual_certificate(category).await
    }

    pub async fn master_certificate(&self) -> Option<MasterCertificate> {
        self.certificates.load_master_certificate().await
    }

    /// Current status, read fresh from storage.
    pub async fn status(&self) -> CertificationStatus {
        let results = self.results.load_results().await;
        let categories: Vec<_> = ExamCategory::ALL
            .into_iter()
            .map(|category| (category, results.get(&category).map(ExamResult::passed)))
            .collect();
        let passed_count = categories
            .iter()
            .filter(|(_, passed)| *passed == Some(true))
            .count();

        CertificationStatus {
            passed_count,
            required_count: ExamCategory::COUNT,
            eligible_for_master: passed_count >= ExamCategory::COUNT,
            categories,
            individual_certificates: self
                .certificates
                .load_individual_certificates()
                .await
                .into_keys()
                .collect(),
            has_master_certificate: self.certificates.load_master_certificate().await.is_some(),
        }
    }

    /// Receive a new status whenever results or certificates change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<CertificationStatus> {
        self.status.subscribe()
    }

    /// Re-derive the status and publish it to subscribers.
    pub async fn refresh(&self) -> CertificationStatus {
        let status = self.status().await;
        self.status.send_replace(status.clone());
        status
    }
}

#[async_trait]
impl ExamCompletionObserver for CertificationService {
    async fn on_exam_completed(&self, result: &ExamResult) {
        let status = self.refresh().await;
        tracing::debug!(
            category = %result.category(),
            passed = status.passed_count,
            eligible = status.eligible_for_master,
            "certification status refreshed"
        );
    }
}
