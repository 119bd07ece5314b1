use chrono::{DateTime, Utc};
use std::fmt;
use std::ops::Range;
use std::sync::Arc;
use thiserror::Error;

use crate::model::pagination::{PAGE_SIZE, Pagination};
use crate::model::{ExamCategory, ExamConfig, Question};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available for session")]
    Empty,

    #[error("session has not been started")]
    NotStarted,

    #[error("session already started")]
    AlreadyStarted,

    #[error("session already completed")]
    Completed,
}

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExamPhase {
    NotStarted,
    InProgress,
    Completed,
}

/// How a session reached `Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompletionReason {
    Submitted,
    TimeExpired,
}

/// Result of a single countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The session is not in progress; nothing changed.
    Idle,
    Running { remaining_seconds: u32 },
    /// This tick reached zero and completed the session.
    Expired,
}

/// Aggregated view of answering progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamProgress {
    pub total: usize,
    pub answered: usize,
    pub unanswered: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub remaining_seconds: u32,
    pub is_complete: bool,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One timed attempt at a category's exam.
///
/// Lifecycle is `NotStarted -> InProgress -> Completed`. Once completed the
/// session is frozen; a retake builds a new session.
///
/// The session never reads the clock on its own: the driver passes `now` into
/// `start`, `submit`, and `tick`.
pub struct ExamSession {
    config: ExamConfig,
    questions: Arc<[Question]>,
    answers: Vec<Option<usize>>,
    pagination: Pagination,
    remaining_seconds: u32,
    current_page: usize,
    phase: ExamPhase,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
    completion: Option<CompletionReason>,
}

impl ExamSession {
    /// Create a session in `NotStarted` with the default page size.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if `questions` is empty.
    pub fn new(config: ExamConfig, questions: Arc<[Question]>) -> Result<Self, SessionError> {
        Self::with_page_size(config, questions, PAGE_SIZE)
    }

    /// # Errors
    ///
    /// Returns `SessionError::Empty` if `questions` is empty.
    pub fn with_page_size(
        config: ExamConfig,
        questions: Arc<[Question]>,
        page_size: usize,
    ) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::Empty);
        }

        Ok(Self {
            remaining_seconds: config.time_limit_seconds(),
            answers: vec![None; questions.len()],
            pagination: Pagination::new(questions.len(), page_size),
            config,
            questions,
            current_page: 1,
            phase: ExamPhase::NotStarted,
            started_at: None,
            completed_at: None,
            completion: None,
        })
    }

    // ─── Transitions ───────────────────────────────────────────────────────────

    /// Begin the attempt: full timer, page 1, nothing answered.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadyStarted` or `SessionError::Completed` outside `NotStarted`.
    pub fn start(&mut self, now: DateTime<Utc>) -> Result<(), SessionError> {
        match self.phase {
            ExamPhase::NotStarted => {}
            ExamPhase::InProgress => return Err(SessionError::AlreadyStarted),
            ExamPhase::Completed => return Err(SessionError::Completed),
        }

        self.remaining_seconds = self.config.time_limit_seconds();
        self.current_page = 1;
        self.answers.iter_mut().for_each(|answer| *answer = None);
        self.started_at = Some(now);
        self.phase = ExamPhase::InProgress;
        Ok(())
    }

    /// Record `option_index` for `question_index`, replacing any earlier choice.
    ///
    /// Out-of-range indices and calls outside `InProgress` are ignored.
    /// Returns true if the selection was recorded.
    pub fn select_answer(&mut self, question_index: usize, option_index: usize) -> bool {
        if self.phase != ExamPhase::InProgress {
            return false;
        }
        let Some(question) = self.questions.get(question_index) else {
            return false;
        };
        if option_index >= question.option_count() {
            return false;
        }
        self.answers[question_index] = Some(option_index);
        true
    }

    /// Navigate to `page`, clamped into range. Ignored outside `InProgress`.
    ///
    /// Returns the page the session is on afterwards.
    pub fn go_to_page(&mut self, page: usize) -> usize {
        if self.phase == ExamPhase::InProgress {
            self.current_page = self.pagination.clamp(page);
        }
        self.current_page
    }

    pub fn next_page(&mut self) -> usize {
        self.go_to_page(self.current_page.saturating_add(1))
    }

    pub fn previous_page(&mut self) -> usize {
        self.go_to_page(self.current_page.saturating_sub(1))
    }

    /// Complete the attempt. Unanswered questions count as wrong.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotStarted` or `SessionError::Completed` outside `InProgress`.
    pub fn submit(&mut self, now: DateTime<Utc>) -> Result<(), SessionError> {
        self.complete(now, CompletionReason::Submitted)
    }

    /// Advance the countdown by one second; reaching zero submits the session.
    pub fn tick(&mut self, now: DateTime<Utc>) -> TickOutcome {
        if self.phase != ExamPhase::InProgress {
            return TickOutcome::Idle;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds > 0 {
            return TickOutcome::Running {
                remaining_seconds: self.remaining_seconds,
            };
        }

        match self.complete(now, CompletionReason::TimeExpired) {
            Ok(()) => TickOutcome::Expired,
            Err(_) => TickOutcome::Idle,
        }
    }

    fn complete(&mut self, now: DateTime<Utc>, reason: CompletionReason) -> Result<(), SessionError> {
        match self.phase {
            ExamPhase::InProgress => {}
            ExamPhase::NotStarted => return Err(SessionError::NotStarted),
            ExamPhase::Completed => return Err(SessionError::Completed),
        }
        self.phase = ExamPhase::Completed;
        self.completed_at = Some(now);
        self.completion = Some(reason);
        Ok(())
    }

    // ─── Queries ───────────────────────────────────────────────────────────────

    #[must_use]
    pub fn category(&self) -> ExamCategory {
        self.config.category()
    }

    #[must_use]
    pub fn config(&self) -> &ExamConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> ExamPhase {
        self.phase
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == ExamPhase::Completed
    }

    #[must_use]
    pub fn completion_reason(&self) -> Option<CompletionReason> {
        self.completion
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Time used so far: the limit minus what is left on the countdown.
    #[must_use]
    pub fn seconds_spent(&self) -> u32 {
        self.config
            .time_limit_seconds()
            .saturating_sub(self.remaining_seconds)
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Selected option per question, in question order.
    #[must_use]
    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    #[must_use]
    pub fn selected_answer(&self, question_index: usize) -> Option<usize> {
        self.answers.get(question_index).copied().flatten()
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    #[must_use]
    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages()
    }

    /// 0-based indices of the questions on the current page.
    #[must_use]
    pub fn current_page_range(&self) -> Range<usize> {
        self.pagination.page_range(self.current_page)
    }

    /// True when every question on `page` has a selection.
    #[must_use]
    pub fn is_page_answered(&self, page: usize) -> bool {
        self.pagination
            .page_range(page)
            .all(|index| self.answers[index].is_some())
    }

    /// Presentation rule: offer "Submit" only on the final page once all of its
    /// questions are answered. `submit` itself never requires this.
    #[must_use]
    pub fn submit_offered(&self) -> bool {
        self.phase == ExamPhase::InProgress
            && self.pagination.is_last_page(self.current_page)
            && self.is_page_answered(self.total_pages())
    }

    #[must_use]
    pub fn progress(&self) -> ExamProgress {
        let answered = self.answered_count();
        ExamProgress {
            total: self.question_count(),
            answered,
            unanswered: self.question_count() - answered,
            current_page: self.current_page,
            total_pages: self.total_pages(),
            remaining_seconds: self.remaining_seconds,
            is_complete: self.is_complete(),
        }
    }
}

impl fmt::Debug for ExamSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExamSession")
            .field("category", &self.config.category())
            .field("questions_len", &self.questions.len())
            .field("answered", &self.answered_count())
            .field("remaining_seconds", &self.remaining_seconds)
            .field("current_page", &self.current_page)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    fn questions(n: usize) -> Arc<[Question]> {
        (0..n)
            .map(|i| {
                Question::new(
                    format!("q-{i}"),
                    format!("Question {i}"),
                    vec!["a".into(), "b".into(), "c".into(), "d".into()],
                    i % 4,
                    "",
                    "test",
                )
                .unwrap()
            })
            .collect()
    }

    fn session(category: ExamCategory, n: usize) -> ExamSession {
        ExamSession::new(ExamConfig::builtin(category), questions(n)).unwrap()
    }

    #[test]
    fn empty_question_set_is_rejected() {
        let err = ExamSession::new(ExamConfig::builtin(ExamCategory::Linux), questions(0))
            .unwrap_err();
        assert_eq!(err, SessionError::Empty);
    }

    #[test]
    fn start_resets_timer_and_page() {
        let mut s = session(ExamCategory::Linux, 10);
        assert_eq!(s.phase(), ExamPhase::NotStarted);
        s.start(fixed_now()).unwrap();
        assert_eq!(s.phase(), ExamPhase::InProgress);
        assert_eq!(s.remaining_seconds(), 25 * 60);
        assert_eq!(s.current_page(), 1);
        assert_eq!(s.answered_count(), 0);
        assert_eq!(s.start(fixed_now()).unwrap_err(), SessionError::AlreadyStarted);
    }

    #[test]
    fn answers_ignored_before_start() {
        let mut s = session(ExamCategory::Linux, 5);
        assert!(!s.select_answer(0, 1));
        assert_eq!(s.selected_answer(0), None);
    }

    #[test]
    fn last_selection_wins() {
        let mut s = session(ExamCategory::Linux, 5);
        s.start(fixed_now()).unwrap();
        assert!(s.select_answer(3, 2));
        assert!(s.select_answer(3, 0));
        assert_eq!(s.selected_answer(3), Some(0));
    }

    #[test]
    fn out_of_range_selection_is_a_no_op() {
        let mut s = session(ExamCategory::Linux, 5);
        s.start(fixed_now()).unwrap();
        assert!(!s.select_answer(5, 0));
        assert!(!s.select_answer(0, 4));
        assert_eq!(s.answered_count(), 0);
    }

    #[test]
    fn navigation_is_clamped_and_free() {
        let mut s = session(ExamCategory::Programming, 50);
        s.start(fixed_now()).unwrap();
        assert_eq!(s.total_pages(), 10);
        assert_eq!(s.go_to_page(7), 7);
        assert_eq!(s.go_to_page(0), 1);
        assert_eq!(s.go_to_page(42), 10);
        assert_eq!(s.previous_page(), 9);
        assert_eq!(s.next_page(), 10);
        assert_eq!(s.next_page(), 10);
        assert_eq!(s.pagination().page_of_number(23), 5);
    }

    #[test]
    fn navigation_ignored_outside_progress() {
        let mut s = session(ExamCategory::Programming, 50);
        assert_eq!(s.go_to_page(3), 1);
    }

    #[test]
    fn submit_offered_only_with_final_page_answered() {
        let mut s = session(ExamCategory::Linux, 7);
        s.start(fixed_now()).unwrap();
        s.go_to_page(2);
        assert!(!s.submit_offered());
        s.select_answer(5, 0);
        assert!(!s.submit_offered());
        s.select_answer(6, 0);
        assert!(s.submit_offered());
        s.go_to_page(1);
        assert!(!s.submit_offered());
    }

    #[test]
    fn submit_freezes_session() {
        let mut s = session(ExamCategory::Linux, 5);
        s.start(fixed_now()).unwrap();
        s.select_answer(0, 1);
        s.submit(fixed_now()).unwrap();

        assert!(s.is_complete());
        assert_eq!(s.completion_reason(), Some(CompletionReason::Submitted));
        assert!(!s.select_answer(0, 2));
        assert_eq!(s.selected_answer(0), Some(1));
        assert_eq!(s.tick(fixed_now()), TickOutcome::Idle);
        assert_eq!(s.submit(fixed_now()).unwrap_err(), SessionError::Completed);
    }

    #[test]
    fn submit_requires_start() {
        let mut s = session(ExamCategory::Linux, 5);
        assert_eq!(s.submit(fixed_now()).unwrap_err(), SessionError::NotStarted);
    }

    #[test]
    fn tick_counts_down_and_expires_once() {
        let config = ExamConfig::new(ExamCategory::Linux, "Short", "", 1, 70).unwrap();
        let mut s = ExamSession::new(config, questions(3)).unwrap();
        assert_eq!(s.tick(fixed_now()), TickOutcome::Idle);
        s.start(fixed_now()).unwrap();

        for expected in (1..60).rev() {
            assert_eq!(
                s.tick(fixed_now()),
                TickOutcome::Running {
                    remaining_seconds: expected
                }
            );
        }
        assert_eq!(s.tick(fixed_now()), TickOutcome::Expired);
        assert_eq!(s.completion_reason(), Some(CompletionReason::TimeExpired));
        assert_eq!(s.remaining_seconds(), 0);
        assert_eq!(s.seconds_spent(), 60);
        assert_eq!(s.tick(fixed_now()), TickOutcome::Idle);
    }

    #[test]
    fn progress_reports_counts() {
        let mut s = session(ExamCategory::Cryptography, 15);
        s.start(fixed_now()).unwrap();
        s.select_answer(0, 0);
        s.select_answer(14, 1);
        let progress = s.progress();
        assert_eq!(progress.total, 15);
        assert_eq!(progress.answered, 2);
        assert_eq!(progress.unanswered, 13);
        assert_eq!(progress.total_pages, 3);
        assert!(!progress.is_complete);
    }
}
