use thiserror::Error;

use crate::model::ExamCategory;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExamConfigError {
    #[error("exam title cannot be empty")]
    EmptyTitle,

    #[error("time limit must be > 0 minutes")]
    InvalidTimeLimit,

    #[error("passing score must be in [0, 100], got {0}")]
    InvalidPassingScore(u8),
}

//
// ─── CONFIG ────────────────────────────────────────────────────────────────────
//

/// Static configuration for one category's exam.
///
/// Built-in configs are defined by [`ExamConfig::builtin`]; they are not user-editable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamConfig {
    category: ExamCategory,
    title: String,
    description: String,
    time_limit_minutes: u32,
    passing_score_percent: u8,
}

impl ExamConfig {
    /// Creates a custom exam config.
    ///
    /// # Errors
    ///
    /// Returns `ExamConfigError` if the title is blank, the time limit is zero,
    /// or the passing score exceeds 100.
    pub fn new(
        category: ExamCategory,
        title: impl Into<String>,
        description: impl Into<String>,
        time_limit_minutes: u32,
        passing_score_percent: u8,
    ) -> Result<Self, ExamConfigError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(ExamConfigError::EmptyTitle);
        }
        if time_limit_minutes == 0 {
            return Err(ExamConfigError::InvalidTimeLimit);
        }
        if passing_score_percent > 100 {
            return Err(ExamConfigError::InvalidPassingScore(passing_score_percent));
        }

        Ok(Self {
            category,
            title,
            description: description.into(),
            time_limit_minutes,
            passing_score_percent,
        })
    }

    /// The compiled-in config for a category.
    #[must_use]
    pub fn builtin(category: ExamCategory) -> Self {
        let (title, description, time_limit_minutes, passing_score_percent) = match category {
            ExamCategory::Programming => (
                "Secure Programming Fundamentals",
                "Memory safety, input handling, and secure coding practices.",
                30,
                70,
            ),
            ExamCategory::Linux => (
                "Linux Security Administration",
                "Permissions, users, services, logging, and hardening on Linux systems.",
                25,
                70,
            ),
            ExamCategory::Networking => (
                "Network Security Essentials",
                "Protocols, ports, segmentation, firewalls, and traffic analysis.",
                35,
                70,
            ),
            ExamCategory::Cryptography => (
                "Applied Cryptography",
                "Hashing, symmetric and asymmetric encryption, and key management.",
                30,
                75,
            ),
            ExamCategory::WebSecurity => (
                "Web Application Security",
                "XSS, CSRF, injection, session management, and browser security controls.",
                30,
                70,
            ),
        };

        Self {
            category,
            title: title.to_string(),
            description: description.to_string(),
            time_limit_minutes,
            passing_score_percent,
        }
    }

    #[must_use]
    pub fn category(&self) -> ExamCategory {
        self.category
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn time_limit_minutes(&self) -> u32 {
        self.time_limit_minutes
    }

    #[must_use]
    pub fn time_limit_seconds(&self) -> u32 {
        self.time_limit_minutes.saturating_mul(60)
    }

    #[must_use]
    pub fn passing_score_percent(&self) -> u8 {
        self.passing_score_percent
    }

    /// Returns true if `score_percent` meets this exam's threshold.
    #[must_use]
    pub fn is_passing(&self, score_percent: u8) -> bool {
        score_percent >= self.passing_score_percent
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_limits_match_catalog() {
        let expected = [
            (ExamCategory::Programming, 30, 70),
            (ExamCategory::Linux, 25, 70),
            (ExamCategory::Networking, 35, 70),
            (ExamCategory::Cryptography, 30, 75),
            (ExamCategory::WebSecurity, 30, 70),
        ];
        for (category, minutes, passing) in expected {
            let config = ExamConfig::builtin(category);
            assert_eq!(config.category(), category);
            assert_eq!(config.time_limit_minutes(), minutes);
            assert_eq!(config.passing_score_percent(), passing);
        }
    }

    #[test]
    fn time_limit_in_seconds() {
        assert_eq!(ExamConfig::builtin(ExamCategory::Linux).time_limit_seconds(), 1500);
    }

    #[test]
    fn threshold_is_inclusive() {
        let config = ExamConfig::builtin(ExamCategory::Cryptography);
        assert!(!config.is_passing(74));
        assert!(config.is_passing(75));
    }

    #[test]
    fn custom_config_validates() {
        assert_eq!(
            ExamConfig::new(ExamCategory::Linux, " ", "", 10, 70).unwrap_err(),
            ExamConfigError::EmptyTitle
        );
        assert_eq!(
            ExamConfig::new(ExamCategory::Linux, "t", "", 0, 70).unwrap_err(),
            ExamConfigError::InvalidTimeLimit
        );
        assert_eq!(
            ExamConfig::new(ExamCategory::Linux, "t", "", 10, 101).unwrap_err(),
            ExamConfigError::InvalidPassingScore(101)
        );
        assert!(ExamConfig::new(ExamCategory::Linux, "t", "", 1, 0).is_ok());
    }
}
