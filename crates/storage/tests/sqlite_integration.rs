use exam_core::model::{
    ExamCategory, ExamConfig, ExamResult, IndividualCertificate, MasterCertificate, MasterStats,
};
use exam_core::time::fixed_now;
use storage::repository::{KeyValueStore, LabProgress, RESULTS_KEY, Storage};
use storage::sqlite::SqliteRepository;

fn result(category: ExamCategory, score: u8, spent: u32) -> ExamResult {
    ExamResult::new(&ExamConfig::builtin(category), score, fixed_now(), spent).unwrap()
}

#[tokio::test]
async fn sqlite_kv_set_overwrites_previous_value() {
    let repo = SqliteRepository::connect("sqlite::memory:")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");
    // Running again is a no-op.
    repo.migrate().await.expect("migrate twice");

    assert_eq!(repo.get("missing").await.unwrap(), None);
    repo.set("k", "one").await.unwrap();
    repo.set("k", "two").await.unwrap();
    assert_eq!(repo.get("k").await.unwrap().as_deref(), Some("two"));
}

#[tokio::test]
async fn sqlite_storage_keeps_latest_result_per_category() {
    let storage = Storage::sqlite("sqlite::memory:").await.expect("storage");

    storage
        .results
        .save_result(&result(ExamCategory::Linux, 40, 1_200))
        .await
        .unwrap();
    storage
        .results
        .save_result(&result(ExamCategory::Linux, 88, 900))
        .await
        .unwrap();

    let all = storage.results.load_results().await;
    assert_eq!(all.len(), 1);
    let linux = &all[&ExamCategory::Linux];
    assert_eq!(linux.score_percent(), 88);
    assert!(linux.passed());
    assert_eq!(linux.seconds_spent(), 900);

    let raw = storage.kv.get(RESULTS_KEY).await.unwrap().unwrap();
    assert!(raw.contains("\"linux\""));
    assert!(raw.contains("\"timeSpent\":900"));
}

#[tokio::test]
async fn sqlite_storage_reads_corrupt_values_as_absent() {
    let storage = Storage::sqlite("sqlite::memory:").await.expect("storage");
    storage.kv.set(RESULTS_KEY, "[1, 2, 3]").await.unwrap();
    storage
        .kv
        .set("cybersecurity_certificate", "garbage")
        .await
        .unwrap();

    assert!(storage.results.load_results().await.is_empty());
    assert!(storage.certificates.load_master_certificate().await.is_none());
}

#[tokio::test]
async fn sqlite_storage_persists_certificates_and_labs() {
    let storage = Storage::sqlite("sqlite:file:certs?mode=memory&cache=shared")
        .await
        .expect("storage");

    let passed = result(ExamCategory::Cryptography, 80, 1_000);
    let cert = IndividualCertificate::issue(
        &ExamConfig::builtin(ExamCategory::Cryptography),
        &passed,
        "Alice",
        fixed_now(),
    )
    .unwrap();
    storage
        .certificates
        .save_individual_certificate(&cert)
        .await
        .unwrap();
    assert_eq!(
        storage
            .certificates
            .load_individual_certificate(ExamCategory::Cryptography)
            .await,
        Some(cert)
    );

    let master = MasterCertificate::issue(
        "Alice",
        MasterStats {
            completion_percentage: 100,
            exams_passed: 5,
            total_lab_seconds: 60,
            total_exam_seconds: 7_200,
        },
        fixed_now(),
    )
    .unwrap();
    storage
        .certificates
        .save_master_certificate(&master)
        .await
        .unwrap();
    assert_eq!(
        storage.certificates.load_master_certificate().await,
        Some(master)
    );

    storage
        .labs
        .record_lab_progress(
            "sql_injection",
            LabProgress {
                completed: true,
                seconds_spent: 75,
            },
        )
        .await
        .unwrap();
    assert_eq!(
        storage.labs.lab_progress("sql_injection").await,
        LabProgress {
            completed: true,
            seconds_spent: 75
        }
    );
}
