//! Shared error types for the services crate.

use thiserror::Error;

use exam_core::bank::QuestionBankError;
use exam_core::model::{CertificateError, ExamCategory, SessionError};
use exam_core::scoring::ScoringError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted while launching or running an exam.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExamError {
    #[error("unknown exam category: {0}")]
    UnknownCategory(String),
    #[error("exam session was closed before completion")]
    Closed,
    #[error(transparent)]
    Bank(QuestionBankError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<QuestionBankError> for ExamError {
    fn from(err: QuestionBankError) -> Self {
        match err {
            QuestionBankError::UnknownCategory(key) => Self::UnknownCategory(key),
            other => Self::Bank(other),
        }
    }
}

/// Errors emitted by `CertificationService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CertificationError {
    #[error("no passing result for {category}")]
    NotPassed { category: ExamCategory },
    #[error("{passed} of {required} exams passed; all are required")]
    InsufficientExams { passed: usize, required: usize },
    #[error("unknown exam category: {0}")]
    UnknownCategory(String),
    #[error(transparent)]
    Certificate(CertificateError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<CertificateError> for CertificationError {
    fn from(err: CertificateError) -> Self {
        match err {
            CertificateError::NotPassed(category) => Self::NotPassed { category },
            CertificateError::InsufficientExams { passed, required } => {
                Self::InsufficientExams { passed, required }
            }
            other => Self::Certificate(other),
        }
    }
}

impl From<QuestionBankError> for CertificationError {
    fn from(err: QuestionBankError) -> Self {
        match err {
            QuestionBankError::UnknownCategory(key) => Self::UnknownCategory(key),
            other => Self::UnknownCategory(other.to_string()),
        }
    }
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Bank(#[from] QuestionBankError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_category_is_lifted_out_of_bank_errors() {
        let err: ExamError = QuestionBankError::UnknownCategory("forensics".into()).into();
        assert!(matches!(err, ExamError::UnknownCategory(key) if key == "forensics"));
    }

    #[test]
    fn certificate_rule_failures_map_to_business_errors() {
        let err: CertificationError = CertificateError::NotPassed(ExamCategory::Networking).into();
        assert!(matches!(
            err,
            CertificationError::NotPassed {
                category: ExamCategory::Networking
            }
        ));

        let err: CertificationError = CertificateError::InsufficientExams {
            passed: 4,
            required: 5,
        }
        .into();
        assert_eq!(err.to_string(), "4 of 5 exams passed; all are required");

        let err: CertificationError = CertificateError::EmptyHolderName.into();
        assert!(matches!(err, CertificationError::Certificate(_)));
    }
}
