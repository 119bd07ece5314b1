use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question id cannot be empty")]
    EmptyId,

    #[error("question {id}: text cannot be empty")]
    EmptyText { id: String },

    #[error("question {id}: needs at least 2 options, got {len}")]
    TooFewOptions { id: String, len: usize },

    #[error("question {id}: option {index} is empty")]
    EmptyOption { id: String, index: usize },

    #[error("question {id}: correct option {index} out of range for {len} options")]
    CorrectOptionOutOfRange { id: String, index: usize, len: usize },
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single multiple-choice question.
///
/// Immutable once built. `tag` is a display grouping (e.g. "permissions")
/// and is unrelated to the exam category the question belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: String,
    text: String,
    options: Vec<String>,
    correct_option: usize,
    explanation: String,
    tag: String,
}

impl Question {
    /// Build a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the id or text is blank, fewer than two
    /// options are given, any option is blank, or `correct_option` is not a
    /// valid index into `options`.
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        options: Vec<String>,
        correct_option: usize,
        explanation: impl Into<String>,
        tag: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let id = id.into().trim().to_string();
        if id.is_empty() {
            return Err(QuestionError::EmptyId);
        }
        let text = text.into().trim().to_string();
        if text.is_empty() {
            return Err(QuestionError::EmptyText { id });
        }
        if options.len() < 2 {
            return Err(QuestionError::TooFewOptions {
                id,
                len: options.len(),
            });
        }
        if let Some(index) = options.iter().position(|opt| opt.trim().is_empty()) {
            return Err(QuestionError::EmptyOption { id, index });
        }
        if correct_option >= options.len() {
            return Err(QuestionError::CorrectOptionOutOfRange {
                id,
                index: correct_option,
                len: options.len(),
            });
        }

        Ok(Self {
            id,
            text,
            options,
            correct_option,
            explanation: explanation.into(),
            tag: tag.into(),
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn correct_option(&self) -> usize {
        self.correct_option
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns true if `selected` is the correct option. Unanswered never matches.
    #[must_use]
    pub fn is_correct(&self, selected: Option<usize>) -> bool {
        selected == Some(self.correct_option)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
