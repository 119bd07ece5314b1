use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use exam_core::Clock;
use exam_core::model::{
    CompletionReason, ExamCategory, ExamPhase, ExamProgress, ExamResult, ExamSession, TickOutcome,
};
use exam_core::scoring::{ScoreReport, ScoringError};
use storage::repository::StorageError;
use tokio::sync::{oneshot, watch};
use tokio::time::{Instant, MissedTickBehavior};

use crate::error::ExamError;
use crate::observers::CompletionHub;
use crate::results_service::ResultService;

const TICK_PERIOD: Duration = Duration::from_secs(1);

//
// ─── COMPLETION ────────────────────────────────────────────────────────────────
//

/// Terminal outcome of an exam attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamCompletion {
    pub reason: CompletionReason,
    pub report: ScoreReport,
}

impl ExamCompletion {
    #[must_use]
    pub fn result(&self) -> &ExamResult {
        &self.report.result
    }
}

//
// ─── SHARED STATE ──────────────────────────────────────────────────────────────
//

enum TickStep {
    Continue,
    Stop,
    Expired(ScoreReport),
}

pub(crate) struct RunnerShared {
    clock: Clock,
    session: Mutex<ExamSession>,
    results: ResultService,
    hub: CompletionHub,
    stop: Mutex<Option<oneshot::Sender<()>>>,
    closed: AtomicBool,
    completion: watch::Sender<Option<ExamCompletion>>,
    // Scored but not yet stored.
    pending: tokio::sync::Mutex<Option<ExamResult>>,
    persisted: AtomicBool,
}

impl RunnerShared {
    fn session(&self) -> MutexGuard<'_, ExamSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn stop_timer(&self) {
        let sender = self
            .stop
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(sender) = sender {
            let _ = sender.send(());
        }
    }

    /// Abandon the attempt: stop the countdown and refuse further input.
    /// An unfinished session is never scored.
    pub(crate) fn close(&self) {
        // Set while holding the session lock; `tick` checks it under the same lock.
        let session = self.session();
        if self.closed.swap(true, Ordering::AcqRel) {
            return;
        }
        if !session.is_complete() {
            tracing::info!(category = %session.category(), "exam session torn down before completion");
        }
        drop(session);
        self.stop_timer();
        // Wake anyone waiting on `completed()`.
        self.completion.send_modify(|_| {});
    }

    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    fn tick(&self) -> TickStep {
        let mut session = self.session();
        if self.is_closed() {
            return TickStep::Stop;
        }
        match session.tick(self.clock.now()) {
            TickOutcome::Running { .. } => TickStep::Continue,
            TickOutcome::Idle => TickStep::Stop,
            TickOutcome::Expired => match self.results.score(&session) {
                Ok(report) => TickStep::Expired(report),
                Err(err) => {
                    tracing::error!(error = %err, "could not score expired session");
                    TickStep::Stop
                }
            },
        }
    }

    async fn finalize(
        &self,
        report: ScoreReport,
        reason: CompletionReason,
    ) -> Result<ExamCompletion, ExamError> {
        let completion = ExamCompletion { reason, report };
        *self.pending.lock().await = Some(completion.report.result.clone());
        self.completion.send_replace(Some(completion.clone()));
        self.persist_pending().await?;
        Ok(completion)
    }

    /// Store the pending result, if any, then notify observers.
    ///
    /// Returns whether a write happened.
    async fn persist_pending(&self) -> Result<bool, StorageError> {
        let mut pending = self.pending.lock().await;
        let Some(result) = pending.clone() else {
            return Ok(false);
        };
        self.results.persist(&result).await?;
        *pending = None;
        self.persisted.store(true, Ordering::Release);
        drop(pending);

        self.hub.notify(&result).await;
        Ok(true)
    }
}

async fn run_countdown(shared: Arc<RunnerShared>, mut stop: oneshot::Receiver<()>) {
    let mut ticker = tokio::time::interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Burst);

    let report = loop {
        tokio::select! {
            biased;
            _ = &mut stop => {
                tracing::debug!("countdown stopped");
                return;
            }
            _ = ticker.tick() => {}
        }
        match shared.tick() {
            TickStep::Continue => {}
            TickStep::Stop => return,
            TickStep::Expired(report) => break report,
        }
    };
    drop(ticker);
    shared.stop_timer();

    tracing::info!(category = %report.result.category(), "exam time expired; submitting");
    if let Err(err) = shared
        .finalize(report, CompletionReason::TimeExpired)
        .await
    {
        tracing::error!(error = %err, "failed to persist result after time expiry");
    }
}

//
// ─── RUNNER ────────────────────────────────────────────────────────────────────
//

/// Drives one exam attempt: owns the session, its countdown task, and the
/// single finalize step (score, persist, notify).
///
/// Whichever of a manual submit or the timer reaching zero completes the
/// session first finalizes it; the other becomes a no-op. Dropping the
/// runner stops the countdown.
pub struct ExamRunner {
    shared: Arc<RunnerShared>,
}

impl ExamRunner {
    pub(crate) fn new(
        session: ExamSession,
        clock: Clock,
        results: ResultService,
        hub: CompletionHub,
    ) -> Self {
        let (completion, _) = watch::channel(None);
        Self {
            shared: Arc::new(RunnerShared {
                clock,
                session: Mutex::new(session),
                results,
                hub,
                stop: Mutex::new(None),
                closed: AtomicBool::new(false),
                completion,
                pending: tokio::sync::Mutex::new(None),
                persisted: AtomicBool::new(false),
            }),
        }
    }

    pub(crate) fn downgrade(&self) -> Weak<RunnerShared> {
        Arc::downgrade(&self.shared)
    }

    /// Start the attempt and its one-second countdown.
    ///
    /// # Errors
    ///
    /// Returns `ExamError::Closed` after teardown, or `ExamError::Session` if
    /// the session was already started or completed.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn start(&self) -> Result<(), ExamError> {
        if self.is_closed() {
            return Err(ExamError::Closed);
        }
        let mut session = self.shared.session();
        session.start(self.shared.clock.now())?;

        let (tx, rx) = oneshot::channel();
        *self
            .shared
            .stop
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(tx);
        tokio::spawn(run_countdown(Arc::clone(&self.shared), rx));

        tracing::info!(
            category = %session.category(),
            questions = session.question_count(),
            seconds = session.remaining_seconds(),
            "exam started"
        );
        Ok(())
    }

    /// Record an answer. Ignored after completion, teardown, or for
    /// out-of-range indices; returns whether it was recorded.
    pub fn select_answer(&self, question_index: usize, option_index: usize) -> bool {
        let mut session = self.shared.session();
        if self.shared.is_closed() {
            return false;
        }
        session.select_answer(question_index, option_index)
    }

    /// Page navigation; after teardown these leave the page unchanged.
    pub fn go_to_page(&self, page: usize) -> usize {
        self.navigate(|session| session.go_to_page(page))
    }

    pub fn next_page(&self) -> usize {
        self.navigate(ExamSession::next_page)
    }

    pub fn previous_page(&self) -> usize {
        self.navigate(ExamSession::previous_page)
    }

    fn navigate(&self, step: impl FnOnce(&mut ExamSession) -> usize) -> usize {
        let mut session = self.shared.session();
        if self.shared.is_closed() {
            return session.current_page();
        }
        step(&mut session)
    }

    /// Submit the attempt, score it, and store the result.
    ///
    /// # Errors
    ///
    /// Returns `ExamError::Session` if the session is not in progress (for
    /// example because the timer already expired), `ExamError::Closed` after
    /// teardown, or `ExamError::Storage` if the result could not be written.
    /// After a storage failure the completion is still available through
    /// [`ExamRunner::completion`] and the write can be retried with
    /// [`ExamRunner::retry_persist`].
    pub async fn submit(&self) -> Result<ExamCompletion, ExamError> {
        let report = {
            let mut session = self.shared.session();
            if self.shared.is_closed() {
                return Err(ExamError::Closed);
            }
            session.submit(self.shared.clock.now())?;
            self.shared.results.score(&session)?
        };
        self.shared.stop_timer();
        tracing::info!(
            category = %report.result.category(),
            answered = report.reviews.iter().filter(|r| r.selected.is_some()).count(),
            "exam submitted"
        );
        self.shared
            .finalize(report, CompletionReason::Submitted)
            .await
    }

    /// Write a result whose earlier write failed.
    ///
    /// Returns `Ok(false)` if there was nothing left to write.
    ///
    /// # Errors
    ///
    /// Returns `ExamError::Scoring` if the session has not completed, or
    /// `ExamError::Storage` if the write fails again.
    pub async fn retry_persist(&self) -> Result<bool, ExamError> {
        if self.completion().is_none() {
            return Err(ScoringError::NotCompleted.into());
        }
        Ok(self.shared.persist_pending().await?)
    }

    /// Tear the session down without scoring it.
    pub fn close(&self) {
        self.shared.close();
    }

    /// Wait until the attempt completes by submit or timer expiry.
    ///
    /// Resolves to `None` if the runner is torn down first.
    pub async fn completed(&self) -> Option<ExamCompletion> {
        let mut rx = self.shared.completion.subscribe();
        let closed = &self.shared.closed;
        let value = rx
            .wait_for(|c| c.is_some() || closed.load(Ordering::Acquire))
            .await
            .ok()?;
        value.clone()
    }

    #[must_use]
    pub fn completion(&self) -> Option<ExamCompletion> {
        self.shared.completion.borrow().clone()
    }

    #[must_use]
    pub fn is_persisted(&self) -> bool {
        self.shared.persisted.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.shared.is_closed()
    }

    #[must_use]
    pub fn category(&self) -> ExamCategory {
        self.shared.session().category()
    }

    #[must_use]
    pub fn phase(&self) -> ExamPhase {
        self.shared.session().phase()
    }

    #[must_use]
    pub fn remaining_seconds(&self) -> u32 {
        self.shared.session().remaining_seconds()
    }

    #[must_use]
    pub fn progress(&self) -> ExamProgress {
        self.shared.session().progress()
    }

    /// Read the session under its lock.
    pub fn with_session<R>(&self, f: impl FnOnce(&ExamSession) -> R) -> R {
        f(&self.shared.session())
    }
}

impl Drop for ExamRunner {
    fn drop(&mut self) {
        self.shared.stop_timer();
    }
}

impl std::fmt::Debug for ExamRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExamRunner")
            .field("category", &self.category())
            .field("phase", &self.phase())
            .field("closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use exam_core::bank::QuestionBank;
    use exam_core::model::SessionError;
    use exam_core::time::fixed_clock;
    use std::collections::BTreeMap;
    use storage::repository::{ExamResultRepository, Storage};

    use crate::observers::ExamCompletionObserver;

    fn runner_with(
        category: ExamCategory,
        results: Arc<dyn ExamResultRepository>,
        hub: CompletionHub,
    ) -> ExamRunner {
        let bank = QuestionBank::builtin().unwrap();
        let session = ExamSession::new(
            bank.config(category).unwrap().clone(),
            bank.questions(category).unwrap(),
        )
        .unwrap();
        ExamRunner::new(session, fixed_clock(), ResultService::new(results), hub)
    }

    fn runner(category: ExamCategory) -> (ExamRunner, Storage) {
        let storage = Storage::in_memory();
        let runner = runner_with(category, Arc::clone(&storage.results), CompletionHub::new());
        (runner, storage)
    }

    #[derive(Default)]
    struct CountingObserver {
        calls: Mutex<Vec<ExamResult>>,
    }

    #[async_trait]
    impl ExamCompletionObserver for CountingObserver {
        async fn on_exam_completed(&self, result: &ExamResult) {
            self.calls.lock().unwrap().push(result.clone());
        }
    }

    /// Fails writes while `failing` is set.
    struct FlakyResults {
        inner: Arc<dyn ExamResultRepository>,
        failing: AtomicBool,
    }

    #[async_trait]
    impl ExamResultRepository for FlakyResults {
        async fn load_results(&self) -> BTreeMap<ExamCategory, ExamResult> {
            self.inner.load_results().await
        }

        async fn load_result(&self, category: ExamCategory) -> Option<ExamResult> {
            self.inner.load_result(category).await
        }

        async fn save_result(&self, result: &ExamResult) -> Result<(), StorageError> {
            if self.failing.load(Ordering::SeqCst) {
                return Err(StorageError::Connection("disk full".into()));
            }
            self.inner.save_result(result).await
        }
    }

    #[tokio::test(start_paused = true)]
    async fn timer_expiry_submits_once_with_full_time_spent() {
        let storage = Storage::in_memory();
        let hub = CompletionHub::new();
        let observer = Arc::new(CountingObserver::default());
        hub.register(observer.clone());
        let runner = runner_with(ExamCategory::Cryptography, Arc::clone(&storage.results), hub);

        runner.start().unwrap();
        let correct = runner.with_session(|s| s.questions()[0].correct_option());
        assert!(runner.select_answer(0, correct));

        let completion = runner.completed().await.expect("completed");
        assert_eq!(completion.reason, CompletionReason::TimeExpired);
        assert_eq!(completion.result().seconds_spent(), 30 * 60);
        assert_eq!(completion.report.correct_count, 1);
        assert_eq!(completion.result().score_percent(), 7);
        assert_eq!(runner.phase(), ExamPhase::Completed);
        assert_eq!(runner.remaining_seconds(), 0);

        // Let any stray tick fire; nothing else may happen.
        tokio::time::sleep(Duration::from_secs(120)).await;
        assert!(runner.is_persisted());
        assert_eq!(observer.calls.lock().unwrap().len(), 1);
        assert_eq!(
            storage.results.load_result(ExamCategory::Cryptography).await,
            Some(completion.report.result.clone())
        );

        // Late manual submit is refused.
        assert!(matches!(
            runner.submit().await,
            Err(ExamError::Session(SessionError::Completed))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn countdown_decrements_each_second() {
        let (runner, _) = runner(ExamCategory::Linux);
        runner.start().unwrap();
        assert_eq!(runner.remaining_seconds(), 25 * 60);

        tokio::time::sleep(Duration::from_millis(3_500)).await;
        assert_eq!(runner.remaining_seconds(), 25 * 60 - 3);
    }

    #[tokio::test(start_paused = true)]
    async fn submit_stops_the_countdown() {
        let (runner, storage) = runner(ExamCategory::Linux);
        runner.start().unwrap();
        tokio::time::sleep(Duration::from_millis(10_500)).await;

        let completion = runner.submit().await.unwrap();
        assert_eq!(completion.reason, CompletionReason::Submitted);
        assert_eq!(completion.result().seconds_spent(), 10);
        assert_eq!(completion.result().score_percent(), 0);
        assert!(!completion.result().passed());

        let remaining = runner.remaining_seconds();
        tokio::time::sleep(Duration::from_secs(60 * 60)).await;
        assert_eq!(runner.remaining_seconds(), remaining);
        assert_eq!(runner.completion(), Some(completion.clone()));
        assert_eq!(
            storage.results.load_result(ExamCategory::Linux).await,
            Some(completion.report.result)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn failed_write_can_be_retried() {
        let storage = Storage::in_memory();
        let flaky = Arc::new(FlakyResults {
            inner: Arc::clone(&storage.results),
            failing: AtomicBool::new(true),
        });
        let hub = CompletionHub::new();
        let observer = Arc::new(CountingObserver::default());
        hub.register(observer.clone());
        let runner = runner_with(ExamCategory::Networking, flaky.clone(), hub);
        runner.start().unwrap();

        assert!(matches!(runner.submit().await, Err(ExamError::Storage(_))));
        assert!(runner.completion().is_some());
        assert!(!runner.is_persisted());
        assert!(observer.calls.lock().unwrap().is_empty());

        flaky.failing.store(false, Ordering::SeqCst);
        assert!(runner.retry_persist().await.unwrap());
        assert!(!runner.retry_persist().await.unwrap());
        assert!(runner.is_persisted());
        assert_eq!(observer.calls.lock().unwrap().len(), 1);
        assert!(storage.results.load_result(ExamCategory::Networking).await.is_some());
    }

    #[tokio::test]
    async fn retry_before_completion_is_rejected() {
        let (runner, _) = runner(ExamCategory::Linux);
        assert!(matches!(
            runner.retry_persist().await,
            Err(ExamError::Scoring(ScoringError::NotCompleted))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn closed_runner_ignores_input_and_is_never_scored() {
        let (runner, storage) = runner(ExamCategory::WebSecurity);
        runner.start().unwrap();
        runner.close();

        assert!(runner.is_closed());
        assert!(!runner.select_answer(0, 0));
        assert!(matches!(runner.submit().await, Err(ExamError::Closed)));
        assert_eq!(runner.completed().await, None);

        let remaining = runner.remaining_seconds();
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(runner.remaining_seconds(), remaining);
        assert!(storage.results.load_results().await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn tick_after_teardown_cannot_expire_the_session() {
        let (runner, storage) = runner(ExamCategory::Linux);
        runner.start().unwrap();
        for _ in 1..25 * 60 {
            assert!(matches!(runner.shared.tick(), TickStep::Continue));
        }
        assert_eq!(runner.remaining_seconds(), 1);
        assert_eq!(runner.go_to_page(2), 2);

        runner.close();
        assert!(matches!(runner.shared.tick(), TickStep::Stop));
        assert_eq!(runner.remaining_seconds(), 1);
        assert_eq!(runner.phase(), ExamPhase::InProgress);
        assert!(runner.completion().is_none());

        assert_eq!(runner.go_to_page(4), 2);
        assert_eq!(runner.next_page(), 2);
        assert_eq!(runner.previous_page(), 2);
        assert_eq!(runner.progress().current_page, 2);

        tokio::task::yield_now().await;
        assert!(storage.results.load_results().await.is_empty());
    }

    #[tokio::test]
    async fn start_twice_is_rejected() {
        let (runner, _) = runner(ExamCategory::Programming);
        runner.start().unwrap();
        assert!(matches!(
            runner.start(),
            Err(ExamError::Session(SessionError::AlreadyStarted))
        ));
    }

    #[tokio::test]
    async fn input_before_start_is_ignored() {
        let (runner, _) = runner(ExamCategory::Programming);
        assert!(!runner.select_answer(0, 0));
        assert_eq!(runner.go_to_page(3), 1);
        assert!(matches!(
            runner.submit().await,
            Err(ExamError::Session(SessionError::NotStarted))
        ));
    }
}
