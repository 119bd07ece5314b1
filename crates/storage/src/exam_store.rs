use async_trait::async_trait;
use exam_core::model::{ExamCategory, ExamResult, IndividualCertificate, MasterCertificate};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::records::{
    ExamResultRecord, IndividualCertificateRecord, MasterCertificateRecord, lab_completed_key,
    lab_time_key, parse_lab_completed, parse_lab_seconds, ser,
};
use crate::repository::{
    CertificateRepository, ExamResultRepository, INDIVIDUAL_CERTIFICATES_KEY, KeyValueStore,
    LabProgress, LabProgressRepository, MASTER_CERTIFICATE_KEY, RESULTS_KEY, StorageError,
};

/// Typed repositories over a [`KeyValueStore`].
///
/// Category-keyed records live as one JSON object per logical key. Updates
/// are read-modify-write on that object, serialized through `write_lock` so
/// two categories saved back to back never drop each other.
#[derive(Clone)]
pub struct ExamStore {
    kv: Arc<dyn KeyValueStore>,
    write_lock: Arc<Mutex<()>>,
}

impl ExamStore {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            kv,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    async fn read_raw(&self, key: &str) -> Option<String> {
        match self.kv.get(key).await {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, error = %err, "storage read failed; treating as absent");
                None
            }
        }
    }

    async fn read_object(&self, key: &str) -> Map<String, Value> {
        let Some(raw) = self.read_raw(key).await else {
            return Map::new();
        };
        match serde_json::from_str::<Map<String, Value>>(&raw) {
            Ok(map) => map,
            Err(err) => {
                tracing::warn!(key, error = %err, "malformed stored mapping; treating as empty");
                Map::new()
            }
        }
    }

    /// Decode every category entry under `key`, skipping ones that fail.
    async fn read_category_map<R, T>(
        &self,
        key: &str,
        decode: impl Fn(R, ExamCategory) -> Result<T, StorageError>,
    ) -> BTreeMap<ExamCategory, T>
    where
        R: DeserializeOwned,
    {
        let mut out = BTreeMap::new();
        for (entry_key, value) in self.read_object(key).await {
            let Some(category) = ExamCategory::from_key(&entry_key) else {
                tracing::warn!(key, entry = %entry_key, "ignoring unknown category entry");
                continue;
            };
            let decoded = serde_json::from_value::<R>(value)
                .map_err(ser)
                .and_then(|record| decode(record, category));
            match decoded {
                Ok(item) => {
                    out.insert(category, item);
                }
                Err(err) => {
                    tracing::warn!(key, %category, error = %err, "malformed stored entry; treating as absent");
                }
            }
        }
        out
    }

    async fn write_category_entry<R: Serialize>(
        &self,
        key: &str,
        category: ExamCategory,
        record: &R,
    ) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        let mut map = match self.kv.get(key).await? {
            Some(raw) => serde_json::from_str::<Map<String, Value>>(&raw).unwrap_or_else(|err| {
                tracing::warn!(key, error = %err, "replacing malformed stored mapping");
                Map::new()
            }),
            None => Map::new(),
        };
        map.insert(
            category.key().to_owned(),
            serde_json::to_value(record).map_err(ser)?,
        );
        let raw = serde_json::to_string(&map).map_err(ser)?;
        self.kv.set(key, &raw).await
    }
}

#[async_trait]
impl ExamResultRepository for ExamStore {
    async fn load_results(&self) -> BTreeMap<ExamCategory, ExamResult> {
        self.read_category_map(RESULTS_KEY, ExamResultRecord::into_result)
            .await
    }

    async fn load_result(&self, category: ExamCategory) -> Option<ExamResult> {
        self.load_results().await.remove(&category)
    }

    async fn save_result(&self, result: &ExamResult) -> Result<(), StorageError> {
        self.write_category_entry(
            RESULTS_KEY,
            result.category(),
            &ExamResultRecord::from_result(result),
        )
        .await?;
        tracing::debug!(category = %result.category(), score = result.score_percent(), "result stored");
        Ok(())
    }
}

#[async_trait]
impl CertificateRepository for ExamStore {
    async fn load_individual_certificates(&self) -> BTreeMap<ExamCategory, IndividualCertificate> {
        self.read_category_map(
            INDIVIDUAL_CERTIFICATES_KEY,
            IndividualCertificateRecord::into_certificate,
        )
        .await
    }

    async fn load_individual_certificate(
        &self,
        category: ExamCategory,
    ) -> Option<IndividualCertificate> {
        self.load_individual_certificates().await.remove(&category)
    }

    async fn save_individual_certificate(
        &self,
        certificate: &IndividualCertificate,
    ) -> Result<(), StorageError> {
        self.write_category_entry(
            INDIVIDUAL_CERTIFICATES_KEY,
            certificate.category(),
            &IndividualCertificateRecord::from_certificate(certificate),
        )
        .await
    }

    async fn load_master_certificate(&self) -> Option<MasterCertificate> {
        let raw = self.read_raw(MASTER_CERTIFICATE_KEY).await?;
        let decoded = serde_json::from_str::<MasterCertificateRecord>(&raw)
            .map_err(ser)
            .and_then(MasterCertificateRecord::into_certificate);
        match decoded {
            Ok(certificate) => Some(certificate),
            Err(err) => {
                tracing::warn!(key = MASTER_CERTIFICATE_KEY, error = %err, "malformed master certificate; treating as absent");
                None
            }
        }
    }

    async fn save_master_certificate(
        &self,
        certificate: &MasterCertificate,
    ) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&MasterCertificateRecord::from_certificate(certificate))
            .map_err(ser)?;
        self.kv.set(MASTER_CERTIFICATE_KEY, &raw).await
    }
}

#[async_trait]
impl LabProgressRepository for ExamStore {
    async fn lab_progress(&self, lab: &str) -> LabProgress {
        let completed = self
            .read_raw(&lab_completed_key(lab))
            .await
            .is_some_and(|raw| parse_lab_completed(&raw));
        let seconds_spent = self
            .read_raw(&lab_time_key(lab))
            .await
            .map_or(0, |raw| parse_lab_seconds(&raw));
        LabProgress {
            completed,
            seconds_spent,
        }
    }

    async fn record_lab_progress(
        &self,
        lab: &str,
        progress: LabProgress,
    ) -> Result<(), StorageError> {
        let completed = if progress.completed { "1" } else { "0" };
        self.kv.set(&lab_completed_key(lab), completed).await?;
        self.kv
            .set(&lab_time_key(lab), &progress.seconds_spent.to_string())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryStore;
    use exam_core::model::{ExamConfig, MasterStats};
    use exam_core::time::fixed_now;

    fn store() -> (Arc<InMemoryStore>, ExamStore) {
        let kv = Arc::new(InMemoryStore::new());
        let store = ExamStore::new(kv.clone());
        (kv, store)
    }

    fn result(category: ExamCategory, score: u8) -> ExamResult {
        ExamResult::new(&ExamConfig::builtin(category), score, fixed_now(), 300).unwrap()
    }

    #[tokio::test]
    async fn missing_results_read_as_absent() {
        let (_, store) = store();
        assert!(store.load_results().await.is_empty());
        assert_eq!(store.load_result(ExamCategory::Linux).await, None);
    }

    #[tokio::test]
    async fn save_overwrites_only_that_category() {
        let (_, store) = store();
        store
            .save_result(&result(ExamCategory::Linux, 40))
            .await
            .unwrap();
        store
            .save_result(&result(ExamCategory::Networking, 90))
            .await
            .unwrap();
        store
            .save_result(&result(ExamCategory::Linux, 85))
            .await
            .unwrap();

        let all = store.load_results().await;
        assert_eq!(all.len(), 2);
        assert_eq!(all[&ExamCategory::Linux].score_percent(), 85);
        assert!(all[&ExamCategory::Linux].passed());
        assert_eq!(all[&ExamCategory::Networking].score_percent(), 90);
    }

    #[tokio::test]
    async fn corrupted_mapping_reads_as_empty() {
        let (kv, store) = store();
        kv.set(RESULTS_KEY, "{not json").await.unwrap();
        assert!(store.load_results().await.is_empty());

        // A later write replaces the corrupted value instead of failing.
        store
            .save_result(&result(ExamCategory::Programming, 70))
            .await
            .unwrap();
        assert!(store.load_result(ExamCategory::Programming).await.is_some());
    }

    #[tokio::test]
    async fn one_bad_entry_does_not_hide_others() {
        let (kv, store) = store();
        kv.set(
            RESULTS_KEY,
            r#"{
                "linux": {"score": 80, "passed": true, "completedAt": "2023-11-14T22:13:20Z", "timeSpent": 60},
                "networking": {"score": "eighty"},
                "cryptography": {"score": 60, "passed": true, "completedAt": "2023-11-14T22:13:20Z", "timeSpent": 60},
                "forensics": {"score": 100, "passed": true, "completedAt": "2023-11-14T22:13:20Z", "timeSpent": 1}
            }"#,
        )
        .await
        .unwrap();

        let all = store.load_results().await;
        assert_eq!(all.keys().copied().collect::<Vec<_>>(), vec![ExamCategory::Linux]);
    }

    #[tokio::test]
    async fn unknown_entries_survive_writes() {
        let (kv, store) = store();
        kv.set(RESULTS_KEY, r#"{"forensics": {"score": 1}}"#)
            .await
            .unwrap();
        store
            .save_result(&result(ExamCategory::Linux, 75))
            .await
            .unwrap();

        let raw = kv.get(RESULTS_KEY).await.unwrap().unwrap();
        let map: Map<String, Value> = serde_json::from_str(&raw).unwrap();
        assert!(map.contains_key("forensics"));
        assert!(map.contains_key("linux"));
    }

    #[tokio::test]
    async fn certificates_round_trip() {
        let (_, store) = store();
        let config = ExamConfig::builtin(ExamCategory::WebSecurity);
        let cert = IndividualCertificate::issue(
            &config,
            &result(ExamCategory::WebSecurity, 92),
            "  Grace Hopper ",
            fixed_now(),
        )
        .unwrap();
        store.save_individual_certificate(&cert).await.unwrap();

        let loaded = store
            .load_individual_certificate(ExamCategory::WebSecurity)
            .await
            .unwrap();
        assert_eq!(loaded, cert);
        assert_eq!(loaded.holder_name(), "Grace Hopper");

        assert_eq!(store.load_master_certificate().await, None);
        let master = MasterCertificate::issue(
            "Grace Hopper",
            MasterStats {
                exams_passed: 5,
                ..MasterStats::default()
            },
            fixed_now(),
        )
        .unwrap();
        store.save_master_certificate(&master).await.unwrap();
        assert_eq!(store.load_master_certificate().await, Some(master));
    }

    #[tokio::test]
    async fn malformed_master_certificate_reads_as_absent() {
        let (kv, store) = store();
        kv.set(MASTER_CERTIFICATE_KEY, r#"{"holderName": ""}"#)
            .await
            .unwrap();
        assert_eq!(store.load_master_certificate().await, None);
    }

    #[tokio::test]
    async fn lab_progress_reads_simulator_keys() {
        let (kv, store) = store();
        kv.set("xss_completed", "true").await.unwrap();
        kv.set("xss_timeSpent", "420").await.unwrap();
        kv.set("csrf_timeSpent", "soon").await.unwrap();

        assert_eq!(
            store.lab_progress("xss").await,
            LabProgress {
                completed: true,
                seconds_spent: 420
            }
        );
        assert_eq!(store.lab_progress("csrf").await, LabProgress::default());

        store
            .record_lab_progress(
                "csrf",
                LabProgress {
                    completed: true,
                    seconds_spent: 30,
                },
            )
            .await
            .unwrap();
        assert_eq!(kv.get("csrf_completed").await.unwrap().as_deref(), Some("1"));
        assert!(store.lab_progress("csrf").await.completed);
    }

    /// Backend whose reads always fail; writes succeed.
    struct UnreadableStore;

    #[async_trait]
    impl KeyValueStore for UnreadableStore {
        async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Connection("storage unavailable".into()))
        }

        async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn backend_read_failures_read_as_absent() {
        let store = ExamStore::new(Arc::new(UnreadableStore));

        assert!(store.load_results().await.is_empty());
        assert_eq!(store.load_result(ExamCategory::Linux).await, None);
        assert!(store.load_individual_certificates().await.is_empty());
        assert_eq!(store.load_master_certificate().await, None);
        assert_eq!(store.lab_progress("xss").await, LabProgress::default());
    }

    #[tokio::test]
    async fn keyed_writes_surface_backend_read_failures() {
        let store = ExamStore::new(Arc::new(UnreadableStore));
        let err = store
            .save_result(&result(ExamCategory::Linux, 90))
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Connection(_)));
    }
}
