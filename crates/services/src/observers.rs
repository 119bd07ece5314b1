use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use exam_core::model::ExamResult;

/// Notified once per finished exam, after its result has been stored.
#[async_trait]
pub trait ExamCompletionObserver: Send + Sync {
    async fn on_exam_completed(&self, result: &ExamResult);
}

/// Shared registry of completion observers.
///
/// Clones share the same registry.
#[derive(Clone, Default)]
pub struct CompletionHub {
    observers: Arc<RwLock<Vec<Arc<dyn ExamCompletionObserver>>>>,
}

impl CompletionHub {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, observer: Arc<dyn ExamCompletionObserver>) {
        self.observers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(observer);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Call every registered observer in registration order.
    pub async fn notify(&self, result: &ExamResult) {
        let observers: Vec<_> = self
            .observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        tracing::debug!(category = %result.category(), observers = observers.len(), "notifying completion observers");
        for observer in observers {
            observer.on_exam_completed(result).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exam_core::model::{ExamCategory, ExamConfig};
    use exam_core::time::fixed_now;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<(ExamCategory, u8)>>,
    }

    #[async_trait]
    impl ExamCompletionObserver for Recorder {
        async fn on_exam_completed(&self, result: &ExamResult) {
            self.seen
                .lock()
                .unwrap()
                .push((result.category(), result.score_percent()));
        }
    }

    #[tokio::test]
    async fn notifies_every_observer() {
        let hub = CompletionHub::new();
        let first = Arc::new(Recorder::default());
        let second = Arc::new(Recorder::default());
        hub.register(first.clone());
        hub.clone().register(second.clone());
        assert_eq!(hub.len(), 2);

        let config = ExamConfig::builtin(ExamCategory::Linux);
        let result = ExamResult::new(&config, 90, fixed_now(), 30).unwrap();
        hub.notify(&result).await;

        assert_eq!(*first.seen.lock().unwrap(), vec![(ExamCategory::Linux, 90)]);
        assert_eq!(*second.seen.lock().unwrap(), vec![(ExamCategory::Linux, 90)]);
    }
}
