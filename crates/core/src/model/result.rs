use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::{ExamCategory, ExamConfig};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExamResultError {
    #[error("score must be in [0, 100], got {0}")]
    ScoreOutOfRange(u8),

    #[error("config is for {config}, result is for {result}")]
    CategoryMismatch {
        config: ExamCategory,
        result: ExamCategory,
    },

    #[error("passed flag ({passed}) disagrees with score {score} and threshold {threshold}")]
    PassedMismatch {
        passed: bool,
        score: u8,
        threshold: u8,
    },

    #[error("seconds spent ({spent}) exceeds the time limit ({limit})")]
    SpentOverLimit { spent: u32, limit: u32 },
}

/// Outcome of the most recent completed attempt at a category's exam.
///
/// `passed` is always derived from the score and the category threshold;
/// the constructors refuse any record where the two disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamResult {
    category: ExamCategory,
    score_percent: u8,
    passed: bool,
    completed_at: DateTime<Utc>,
    seconds_spent: u32,
}

impl ExamResult {
    /// Build a result from a fresh score, deriving `passed` from the config.
    ///
    /// # Errors
    ///
    /// Returns `ExamResultError::ScoreOutOfRange` if the score exceeds 100.
    /// Returns `ExamResultError::SpentOverLimit` if more time was spent than allowed.
    pub fn new(
        config: &ExamConfig,
        score_percent: u8,
        completed_at: DateTime<Utc>,
        seconds_spent: u32,
    ) -> Result<Self, ExamResultError> {
        if score_percent > 100 {
            return Err(ExamResultError::ScoreOutOfRange(score_percent));
        }
        let limit = config.time_limit_seconds();
        if seconds_spent > limit {
            return Err(ExamResultError::SpentOverLimit {
                spent: seconds_spent,
                limit,
            });
        }

        Ok(Self {
            category: config.category(),
            score_percent,
            passed: config.is_passing(score_percent),
            completed_at,
            seconds_spent,
        })
    }

    /// Rehydrate a result from persisted storage.
    ///
    /// # Errors
    ///
    /// Returns `ExamResultError::PassedMismatch` if the stored flag disagrees with
    /// the category threshold, or any error `ExamResult::new` would return.
    pub fn from_persisted(
        config: &ExamConfig,
        category: ExamCategory,
        score_percent: u8,
        passed: bool,
        completed_at: DateTime<Utc>,
        seconds_spent: u32,
    ) -> Result<Self, ExamResultError> {
        if config.category() != category {
            return Err(ExamResultError::CategoryMismatch {
                config: config.category(),
                result: category,
            });
        }
        let result = Self::new(config, score_percent, completed_at, seconds_spent)?;
        if result.passed != passed {
            return Err(ExamResultError::PassedMismatch {
                passed,
                score: score_percent,
                threshold: config.passing_score_percent(),
            });
        }
        Ok(result)
    }

    #[must_use]
    pub fn category(&self) -> ExamCategory {
        self.category
    }

    #[must_use]
    pub fn score_percent(&self) -> u8 {
        self.score_percent
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.passed
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn seconds_spent(&self) -> u32 {
        self.seconds_spent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn passed_is_derived_from_threshold() {
        let config = ExamConfig::builtin(ExamCategory::Cryptography);
        let fail = ExamResult::new(&config, 73, fixed_now(), 100).unwrap();
        let pass = ExamResult::new(&config, 80, fixed_now(), 100).unwrap();
        assert!(!fail.passed());
        assert!(pass.passed());
    }

    #[test]
    fn persisted_flag_must_agree() {
        let config = ExamConfig::builtin(ExamCategory::Linux);
        let err = ExamResult::from_persisted(
            &config,
            ExamCategory::Linux,
            40,
            true,
            fixed_now(),
            60,
        )
        .unwrap_err();
        assert!(matches!(err, ExamResultError::PassedMismatch { score: 40, .. }));
    }

    #[test]
    fn persisted_category_must_match_config() {
        let config = ExamConfig::builtin(ExamCategory::Linux);
        let err = ExamResult::from_persisted(
            &config,
            ExamCategory::Networking,
            90,
            true,
            fixed_now(),
            60,
        )
        .unwrap_err();
        assert!(matches!(err, ExamResultError::CategoryMismatch { .. }));
    }

    #[test]
    fn rejects_out_of_range_values() {
        let config = ExamConfig::builtin(ExamCategory::Linux);
        assert_eq!(
            ExamResult::new(&config, 101, fixed_now(), 0).unwrap_err(),
            ExamResultError::ScoreOutOfRange(101)
        );
        assert!(matches!(
            ExamResult::new(&config, 50, fixed_now(), 1501).unwrap_err(),
            ExamResultError::SpentOverLimit { spent: 1501, limit: 1500 }
        ));
    }
}
