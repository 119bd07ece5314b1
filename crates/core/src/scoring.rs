use thiserror::Error;

use crate::model::{ExamResult, ExamResultError, ExamSession};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScoringError {
    #[error("only completed sessions can be scored")]
    NotCompleted,

    #[error(transparent)]
    Result(#[from] ExamResultError),
}

//
// ─── REPORT ────────────────────────────────────────────────────────────────────
//

/// Per-question feedback shown once a session has been scored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionReview {
    pub index: usize,
    pub question_id: String,
    pub selected: Option<usize>,
    pub correct: usize,
    pub is_correct: bool,
    pub explanation: String,
}

/// Everything derived from a completed session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreReport {
    pub result: ExamResult,
    pub correct_count: usize,
    pub question_count: usize,
    pub reviews: Vec<QuestionReview>,
}

/// `round(100 * correct / total)` with ties rounded up, in integer math.
///
/// Returns 0 for an empty exam.
#[must_use]
pub fn percent_rounded(correct: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let correct = correct.min(total) as u64;
    let total = total as u64;
    let pct = (200 * correct + total) / (2 * total);
    u8::try_from(pct).unwrap_or(100)
}

/// Score a completed session.
///
/// Pure: scoring the same session twice yields identical results.
///
/// # Errors
///
/// Returns `ScoringError::NotCompleted` unless the session is `Completed`.
pub fn score(session: &ExamSession) -> Result<ExamResult, ScoringError> {
    Ok(score_report(session)?.result)
}

/// Score a completed session and include the per-question review.
///
/// # Errors
///
/// Returns `ScoringError::NotCompleted` unless the session is `Completed`.
pub fn score_report(session: &ExamSession) -> Result<ScoreReport, ScoringError> {
    let Some(completed_at) = session.completed_at().filter(|_| session.is_complete()) else {
        return Err(ScoringError::NotCompleted);
    };

    let reviews: Vec<QuestionReview> = session
        .questions()
        .iter()
        .zip(session.answers())
        .enumerate()
        .map(|(index, (question, selected))| QuestionReview {
            index,
            question_id: question.id().to_string(),
            selected: *selected,
            correct: question.correct_option(),
            is_correct: question.is_correct(*selected),
            explanation: question.explanation().to_string(),
        })
        .collect();

    let correct_count = reviews.iter().filter(|r| r.is_correct).count();
    let question_count = session.question_count();
    let result = ExamResult::new(
        session.config(),
        percent_rounded(correct_count, question_count),
        completed_at,
        session.seconds_spent(),
    )?;

    Ok(ScoreReport {
        result,
        correct_count,
        question_count,
        reviews,
    })
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
