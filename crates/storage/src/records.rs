//! JSON shapes stored under the logical keys, and their conversion to and
//! from domain values.

use chrono::{DateTime, Utc};
use exam_core::model::{
    ExamCategory, ExamConfig, ExamResult, IndividualCertificate, MasterCertificate, MasterStats,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::repository::StorageError;

pub(crate) fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamResultRecord {
    pub score: u8,
    pub passed: bool,
    pub completed_at: DateTime<Utc>,
    pub time_spent: u32,
}

impl ExamResultRecord {
    #[must_use]
    pub fn from_result(result: &ExamResult) -> Self {
        Self {
            score: result.score_percent(),
            passed: result.passed(),
            completed_at: result.completed_at(),
            time_spent: result.seconds_spent(),
        }
    }

    /// Validate against the category's built-in config.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if the record is inconsistent
    /// (score over 100, pass flag disagreeing with the threshold, time over limit).
    pub fn into_result(self, category: ExamCategory) -> Result<ExamResult, StorageError> {
        ExamResult::from_persisted(
            &ExamConfig::builtin(category),
            category,
            self.score,
            self.passed,
            self.completed_at,
            self.time_spent,
        )
        .map_err(ser)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndividualCertificateRecord {
    pub id: Uuid,
    pub holder_name: String,
    pub title: String,
    pub score: u8,
    pub date_earned: String,
}

impl IndividualCertificateRecord {
    #[must_use]
    pub fn from_certificate(certificate: &IndividualCertificate) -> Self {
        Self {
            id: certificate.id(),
            holder_name: certificate.holder_name().to_owned(),
            title: certificate.title().to_owned(),
            score: certificate.score_percent(),
            date_earned: certificate.date_earned().to_owned(),
        }
    }

    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if the stored holder name is blank.
    pub fn into_certificate(
        self,
        category: ExamCategory,
    ) -> Result<IndividualCertificate, StorageError> {
        IndividualCertificate::from_persisted(
            self.id,
            category,
            &self.holder_name,
            self.title,
            self.score,
            self.date_earned,
        )
        .map_err(ser)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasterCertificateRecord {
    pub id: Uuid,
    pub holder_name: String,
    pub completion_percentage: u8,
    pub exams_passed: usize,
    pub total_lab_time: u64,
    pub total_exam_time: u64,
    pub date_earned: String,
}

impl MasterCertificateRecord {
    #[must_use]
    pub fn from_certificate(certificate: &MasterCertificate) -> Self {
        let stats = certificate.stats();
        Self {
            id: certificate.id(),
            holder_name: certificate.holder_name().to_owned(),
            completion_percentage: stats.completion_percentage,
            exams_passed: stats.exams_passed,
            total_lab_time: stats.total_lab_seconds,
            total_exam_time: stats.total_exam_seconds,
            date_earned: certificate.date_earned().to_owned(),
        }
    }

    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if the name is blank or the
    /// completion percentage exceeds 100.
    pub fn into_certificate(self) -> Result<MasterCertificate, StorageError> {
        MasterCertificate::from_persisted(
            self.id,
            &self.holder_name,
            MasterStats {
                completion_percentage: self.completion_percentage,
                exams_passed: self.exams_passed,
                total_lab_seconds: self.total_lab_time,
                total_exam_seconds: self.total_exam_time,
            },
            self.date_earned,
        )
        .map_err(ser)
    }
}

/// `<lab>_completed` holds a positive integer or `true` once the lab is done.
pub(crate) fn parse_lab_completed(raw: &str) -> bool {
    let raw = raw.trim();
    raw.eq_ignore_ascii_case("true") || raw.parse::<i64>().is_ok_and(|n| n > 0)
}

/// `<lab>_timeSpent` holds whole seconds; anything else reads as zero.
pub(crate) fn parse_lab_seconds(raw: &str) -> u64 {
    raw.trim().parse::<u64>().unwrap_or(0)
}

pub(crate) fn lab_completed_key(lab: &str) -> String {
    format!("{lab}_completed")
}

pub(crate) fn lab_time_key(lab: &str) -> String {
    format!("{lab}_timeSpent")
}
