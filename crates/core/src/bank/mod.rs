//! Built-in question bank.
//!
//! Question content is compiled in as static seeds and validated into
//! [`Question`] values when the bank is built. Order within a category is
//! significant: it fixes question numbering and pagination.

use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Arc;

use thiserror::Error;

use crate::model::{ExamCategory, ExamConfig, Question, QuestionError};

mod cryptography;
mod linux;
mod networking;
mod programming;
mod websecurity;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionBankError {
    #[error("unknown exam category: {0}")]
    UnknownCategory(String),

    #[error(transparent)]
    Question(#[from] QuestionError),

    #[error("duplicate question id {id} in {category}")]
    DuplicateQuestionId { category: ExamCategory, id: String },
}

//
// ─── SEEDS ─────────────────────────────────────────────────────────────────────
//

pub(crate) struct QuestionSeed {
    pub id: &'static str,
    pub tag: &'static str,
    pub text: &'static str,
    pub options: &'static [&'static str],
    pub correct: usize,
    pub explanation: &'static str,
}

impl QuestionSeed {
    fn build(&self) -> Result<Question, QuestionError> {
        Question::new(
            self.id,
            self.text,
            self.options.iter().map(|opt| (*opt).to_string()).collect(),
            self.correct,
            self.explanation,
            self.tag,
        )
    }
}

fn seeds_for(category: ExamCategory) -> &'static [QuestionSeed] {
    match category {
        ExamCategory::Programming => programming::QUESTIONS,
        ExamCategory::Linux => linux::QUESTIONS,
        ExamCategory::Networking => networking::QUESTIONS,
        ExamCategory::Cryptography => cryptography::QUESTIONS,
        ExamCategory::WebSecurity => websecurity::QUESTIONS,
    }
}

//
// ─── BANK ──────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
struct BankEntry {
    config: ExamConfig,
    questions: Arc<[Question]>,
}

/// Read-only catalog of exam configs and their ordered questions.
///
/// Cloning is cheap; question lists are shared.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    entries: HashMap<ExamCategory, BankEntry>,
}

impl QuestionBank {
    /// The compiled-in bank covering every category.
    ///
    /// # Errors
    ///
    /// Returns `QuestionBankError` if any built-in seed fails validation or a
    /// question id repeats within a category.
    pub fn builtin() -> Result<Self, QuestionBankError> {
        let mut sets = Vec::with_capacity(ExamCategory::COUNT);
        for category in ExamCategory::ALL {
            let questions = seeds_for(category)
                .iter()
                .map(QuestionSeed::build)
                .collect::<Result<Vec<_>, _>>()?;
            sets.push((ExamConfig::builtin(category), questions));
        }
        Self::new(sets)
    }

    /// Build a bank from explicit content.
    ///
    /// A later entry for the same category replaces an earlier one.
    ///
    /// # Errors
    ///
    /// Returns `QuestionBankError::DuplicateQuestionId` if two questions in one
    /// category share an id.
    pub fn new(sets: Vec<(ExamConfig, Vec<Question>)>) -> Result<Self, QuestionBankError> {
        let mut entries = HashMap::with_capacity(sets.len());
        for (config, questions) in sets {
            let category = config.category();
            let mut seen = HashSet::with_capacity(questions.len());
            for question in &questions {
                if !seen.insert(question.id()) {
                    return Err(QuestionBankError::DuplicateQuestionId {
                        category,
                        id: question.id().to_string(),
                    });
                }
            }
            entries.insert(
                category,
                BankEntry {
                    config,
                    questions: questions.into(),
                },
            );
        }
        Ok(Self { entries })
    }

    /// Ordered questions for a category.
    ///
    /// # Errors
    ///
    /// Returns `QuestionBankError::UnknownCategory` if the bank has no content
    /// for the category.
    pub fn questions(&self, category: ExamCategory) -> Result<Arc<[Question]>, QuestionBankError> {
        self.entry(category).map(|entry| Arc::clone(&entry.questions))
    }

    /// Ordered questions for a raw category key such as `"linux"`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionBankError::UnknownCategory` if the key is not one of
    /// the enumerated categories.
    pub fn questions_for_key(&self, key: &str) -> Result<Arc<[Question]>, QuestionBankError> {
        self.questions(parse_key(key)?)
    }

    /// Exam config for a category.
    ///
    /// # Errors
    ///
    /// Returns `QuestionBankError::UnknownCategory` if the bank has no content
    /// for the category.
    pub fn config(&self, category: ExamCategory) -> Result<&ExamConfig, QuestionBankError> {
        self.entry(category).map(|entry| &entry.config)
    }

    /// Exam config for a raw category key. Unknown keys are rejected rather
    /// than falling back to another category's config.
    ///
    /// # Errors
    ///
    /// Returns `QuestionBankError::UnknownCategory` if the key is not one of
    /// the enumerated categories.
    pub fn config_for_key(&self, key: &str) -> Result<&ExamConfig, QuestionBankError> {
        self.config(parse_key(key)?)
    }

    /// Categories present in the bank, in catalog order.
    #[must_use]
    pub fn categories(&self) -> Vec<ExamCategory> {
        ExamCategory::ALL
            .into_iter()
            .filter(|category| self.entries.contains_key(category))
            .collect()
    }

    #[must_use]
    pub fn question_count(&self, category: ExamCategory) -> usize {
        self.entries
            .get(&category)
            .map_or(0, |entry| entry.questions.len())
    }

    fn entry(&self, category: ExamCategory) -> Result<&BankEntry, QuestionBankError> {
        self.entries
            .get(&category)
            .ok_or_else(|| QuestionBankError::UnknownCategory(category.key().to_string()))
    }
}

fn parse_key(key: &str) -> Result<ExamCategory, QuestionBankError> {
    ExamCategory::from_key(key).ok_or_else(|| QuestionBankError::UnknownCategory(key.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: &str) -> Question {
        Question::new(
            id,
            "Pick one",
            vec!["a".to_string(), "b".to_string()],
            0,
            "",
            "misc",
        )
        .unwrap()
    }

    #[test]
    fn builtin_counts_match_catalog() {
        let bank = QuestionBank::builtin().unwrap();
        let counts: Vec<_> = bank
            .categories()
            .into_iter()
            .map(|c| (c, bank.question_count(c)))
            .collect();
        assert_eq!(
            counts,
            vec![
                (ExamCategory::Programming, 50),
                (ExamCategory::Linux, 50),
                (ExamCategory::Networking, 50),
                (ExamCategory::Cryptography, 15),
                (ExamCategory::WebSecurity, 50),
            ]
        );
    }

    #[test]
    fn builtin_configs_match_category() {
        let bank = QuestionBank::builtin().unwrap();
        for category in ExamCategory::ALL {
            assert_eq!(bank.config(category).unwrap().category(), category);
        }
        assert_eq!(
            bank.config(ExamCategory::Cryptography)
                .unwrap()
                .passing_score_percent(),
            75
        );
    }

    #[test]
    fn builtin_ids_unique_across_bank() {
        let bank = QuestionBank::builtin().unwrap();
        let mut seen = HashSet::new();
        for category in bank.categories() {
            for q in bank.questions(category).unwrap().iter() {
                assert!(seen.insert(q.id().to_string()), "duplicate {}", q.id());
            }
        }
    }

    #[test]
    fn order_is_stable() {
        let bank = QuestionBank::builtin().unwrap();
        let first = bank.questions_for_key("linux").unwrap();
        let second = bank.questions(ExamCategory::Linux).unwrap();
        assert_eq!(first[0].id(), "linux-01");
        assert_eq!(first[49].id(), "linux-50");
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn unknown_key_is_rejected_for_both_lookups() {
        let bank = QuestionBank::builtin().unwrap();
        assert_eq!(
            bank.questions_for_key("forensics").unwrap_err(),
            QuestionBankError::UnknownCategory("forensics".into())
        );
        assert_eq!(
            bank.config_for_key("forensics").unwrap_err(),
            QuestionBankError::UnknownCategory("forensics".into())
        );
    }

    #[test]
    fn missing_category_in_custom_bank_is_unknown() {
        let bank = QuestionBank::new(vec![(
            ExamConfig::builtin(ExamCategory::Linux),
            vec![question("q1")],
        )])
        .unwrap();
        assert_eq!(bank.categories(), vec![ExamCategory::Linux]);
        assert!(matches!(
            bank.questions(ExamCategory::Networking),
            Err(QuestionBankError::UnknownCategory(key)) if key == "networking"
        ));
    }

    #[test]
    fn duplicate_ids_rejected() {
        let err = QuestionBank::new(vec![(
            ExamConfig::builtin(ExamCategory::Linux),
            vec![question("q1"), question("q1")],
        )])
        .unwrap_err();
        assert_eq!(
            err,
            QuestionBankError::DuplicateQuestionId {
                category: ExamCategory::Linux,
                id: "q1".into()
            }
        );
    }
}
