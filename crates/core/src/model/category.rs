use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five certification subject areas.
///
/// The set is closed: every persisted key and every bank lookup goes through
/// this enum, so an unknown key can only appear at the string boundary.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExamCategory {
    Programming,
    Linux,
    Networking,
    Cryptography,
    #[serde(rename = "websecurity")]
    WebSecurity,
}

impl ExamCategory {
    /// All categories in catalog order.
    pub const ALL: [ExamCategory; 5] = [
        ExamCategory::Programming,
        ExamCategory::Linux,
        ExamCategory::Networking,
        ExamCategory::Cryptography,
        ExamCategory::WebSecurity,
    ];

    /// Number of categories a master certificate requires.
    pub const COUNT: usize = Self::ALL.len();

    /// Returns the storage key for this category.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            ExamCategory::Programming => "programming",
            ExamCategory::Linux => "linux",
            ExamCategory::Networking => "networking",
            ExamCategory::Cryptography => "cryptography",
            ExamCategory::WebSecurity => "websecurity",
        }
    }

    /// Looks up a category by its storage key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.key() == key)
    }
}

impl fmt::Debug for ExamCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExamCategory({})", self.key())
    }
}

impl fmt::Display for ExamCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ─── FromStr ───────────────────────────────────────────────────────────────────

/// Error type for parsing a category key from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError {
    raw: String,
}

impl ParseCategoryError {
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown exam category: {}", self.raw)
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for ExamCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s.trim()).ok_or_else(|| ParseCategoryError { raw: s.to_string() })
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_storage_key() {
        assert_eq!(ExamCategory::WebSecurity.to_string(), "websecurity");
        assert_eq!(ExamCategory::Linux.to_string(), "linux");
    }

    #[test]
    fn from_str_accepts_every_key() {
        for category in ExamCategory::ALL {
            let parsed: ExamCategory = category.key().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn from_str_rejects_unknown_key() {
        let err = "web-security".parse::<ExamCategory>().unwrap_err();
        assert_eq!(err.raw(), "web-security");
    }

    #[test]
    fn from_key_is_exact() {
        assert_eq!(ExamCategory::from_key("Linux"), None);
        assert_eq!(ExamCategory::from_key("linux"), Some(ExamCategory::Linux));
    }

    #[test]
    fn catalog_order_is_fixed() {
        assert_eq!(ExamCategory::COUNT, 5);
        assert_eq!(ExamCategory::ALL[0], ExamCategory::Programming);
        assert_eq!(ExamCategory::ALL[4], ExamCategory::WebSecurity);
    }
}
