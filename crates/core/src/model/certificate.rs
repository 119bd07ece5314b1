use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::model::{ExamCategory, ExamConfig, ExamResult};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CertificateError {
    #[error("holder name cannot be empty")]
    EmptyHolderName,

    #[error("no passing result for {0}")]
    NotPassed(ExamCategory),

    #[error("{passed} of {required} exams passed")]
    InsufficientExams { passed: usize, required: usize },

    #[error("completion percentage must be in [0, 100], got {0}")]
    InvalidCompletion(u8),
}

/// Formats the human-readable earned date printed on certificates.
#[must_use]
pub fn format_certificate_date(at: DateTime<Utc>) -> String {
    at.format("%B %-d, %Y").to_string()
}

fn normalize_holder(name: &str) -> Result<String, CertificateError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CertificateError::EmptyHolderName);
    }
    Ok(trimmed.to_string())
}

//
// ─── INDIVIDUAL ────────────────────────────────────────────────────────────────
//

/// Snapshot credential for one passed category.
///
/// Never re-linked to later results: a retake does not change or revoke it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndividualCertificate {
    id: Uuid,
    category: ExamCategory,
    holder_name: String,
    title: String,
    score_percent: u8,
    date_earned: String,
}

impl IndividualCertificate {
    /// Issue a certificate from a passing result.
    ///
    /// # Errors
    ///
    /// Returns `CertificateError::NotPassed` if `result` did not pass.
    /// Returns `CertificateError::EmptyHolderName` for a blank name.
    pub fn issue(
        config: &ExamConfig,
        result: &ExamResult,
        holder_name: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<Self, CertificateError> {
        if !result.passed() || result.category() != config.category() {
            return Err(CertificateError::NotPassed(result.category()));
        }
        let holder_name = normalize_holder(holder_name)?;

        Ok(Self {
            id: Uuid::new_v4(),
            category: result.category(),
            holder_name,
            title: config.title().to_string(),
            score_percent: result.score_percent(),
            date_earned: format_certificate_date(issued_at),
        })
    }

    /// Rehydrate a certificate from persisted storage.
    ///
    /// # Errors
    ///
    /// Returns `CertificateError::EmptyHolderName` if the stored name is blank.
    pub fn from_persisted(
        id: Uuid,
        category: ExamCategory,
        holder_name: &str,
        title: impl Into<String>,
        score_percent: u8,
        date_earned: impl Into<String>,
    ) -> Result<Self, CertificateError> {
        Ok(Self {
            id,
            category,
            holder_name: normalize_holder(holder_name)?,
            title: title.into(),
            score_percent,
            date_earned: date_earned.into(),
        })
    }

    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn category(&self) -> ExamCategory {
        self.category
    }

    #[must_use]
    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn score_percent(&self) -> u8 {
        self.score_percent
    }

    #[must_use]
    pub fn date_earned(&self) -> &str {
        &self.date_earned
    }
}

//
// ─── MASTER ────────────────────────────────────────────────────────────────────
//

/// Aggregate figures snapshotted onto a master certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MasterStats {
    /// Share of lab challenges completed, 0..=100.
    pub completion_percentage: u8,
    pub exams_passed: usize,
    pub total_lab_seconds: u64,
    pub total_exam_seconds: u64,
}

/// All-categories credential. A single record, not keyed by category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasterCertificate {
    id: Uuid,
    holder_name: String,
    stats: MasterStats,
    date_earned: String,
}

impl MasterCertificate {
    /// Issue a master certificate.
    ///
    /// # Errors
    ///
    /// Returns `CertificateError::InsufficientExams` unless every category is passed.
    /// Returns `CertificateError::EmptyHolderName` for a blank name.
    pub fn issue(
        holder_name: &str,
        stats: MasterStats,
        issued_at: DateTime<Utc>,
    ) -> Result<Self, CertificateError> {
        if stats.exams_passed < ExamCategory::COUNT {
            return Err(CertificateError::InsufficientExams {
                passed: stats.exams_passed,
                required: ExamCategory::COUNT,
            });
        }
        Self::from_persisted(
            Uuid::new_v4(),
            holder_name,
            stats,
            format_certificate_date(issued_at),
        )
    }

    /// Rehydrate a master certificate from persisted storage.
    ///
    /// # Errors
    ///
    /// Returns `CertificateError` if the name is blank or the completion exceeds 100.
    pub fn from_persisted(
        id: Uuid,
        holder_name: &str,
        stats: MasterStats,
        date_earned: impl Into<String>,
    ) -> Result<Self, CertificateError> {
        if stats.completion_percentage > 100 {
            return Err(CertificateError::InvalidCompletion(
                stats.completion_percentage,
            ));
        }
        Ok(Self {
            id,
            holder_name: normalize_holder(holder_name)?,
            stats,
            date_earned: date_earned.into(),
        })
    }

    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    #[must_use]
    pub fn stats(&self) -> MasterStats {
        self.stats
    }

    #[must_use]
    pub fn completion_percentage(&self) -> u8 {
        self.stats.completion_percentage
    }

    #[must_use]
    pub fn exams_passed(&self) -> usize {
        self.stats.exams_passed
    }

    #[must_use]
    pub fn date_earned(&self) -> &str {
        &self.date_earned
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
