use std::time::Duration;

use exam_core::model::{CompletionReason, ExamCategory, ExamConfig, ExamPhase, ExamResult};
use exam_core::time::{fixed_clock, fixed_now};
use services::{AppServices, CertificationError, ExamRunner};
use storage::repository::Storage;

fn services() -> (AppServices, Storage) {
    let storage = Storage::in_memory();
    let services = AppServices::from_storage(&storage, fixed_clock(), Vec::new()).unwrap();
    (services, storage)
}

fn answer_all_correctly(runner: &ExamRunner) {
    let answers: Vec<usize> = runner.with_session(|s| {
        s.questions()
            .iter()
            .map(|q| q.correct_option())
            .collect()
    });
    for (index, option) in answers.into_iter().enumerate() {
        assert!(runner.select_answer(index, option));
    }
}

fn answer_all_wrongly(runner: &ExamRunner) {
    let answers: Vec<usize> = runner.with_session(|s| {
        s.questions()
            .iter()
            .map(|q| (q.correct_option() + 1) % q.option_count())
            .collect()
    });
    for (index, option) in answers.into_iter().enumerate() {
        assert!(runner.select_answer(index, option));
    }
}

#[tokio::test(start_paused = true)]
async fn unanswered_exam_expires_and_is_stored_as_failed() {
    let (services, _) = services();
    let catalog = services.catalog();
    let runner = catalog.launch(ExamCategory::Linux).unwrap();
    runner.start().unwrap();

    tokio::time::sleep(Duration::from_millis(60_500)).await;
    assert_eq!(runner.remaining_seconds(), 25 * 60 - 60);
    assert_eq!(runner.phase(), ExamPhase::InProgress);

    let completion = runner.completed().await.expect("completion");
    assert_eq!(completion.reason, CompletionReason::TimeExpired);
    assert_eq!(completion.result().score_percent(), 0);
    assert!(!completion.result().passed());
    assert_eq!(completion.result().seconds_spent(), 25 * 60);
    assert!(runner.is_persisted());

    let stored = services.results().latest(ExamCategory::Linux).await;
    assert_eq!(stored.as_ref(), Some(completion.result()));

    let entries = catalog.list_categories().await;
    assert_eq!(entries[1].latest_result.as_ref(), Some(completion.result()));
}

#[tokio::test(start_paused = true)]
async fn retake_overwrites_the_previous_result() {
    let (services, _) = services();
    let catalog = services.catalog();

    let first = catalog.launch(ExamCategory::Linux).unwrap();
    first.start().unwrap();
    answer_all_wrongly(&first);
    let failed = first.submit().await.unwrap();
    assert_eq!(failed.result().score_percent(), 0);
    assert_eq!(failed.reason, CompletionReason::Submitted);

    let second = catalog.launch(ExamCategory::Linux).unwrap();
    second.start().unwrap();
    answer_all_correctly(&second);
    tokio::time::sleep(Duration::from_millis(90_500)).await;
    let passed = second.submit().await.unwrap();
    assert_eq!(passed.result().score_percent(), 100);
    assert_eq!(passed.result().seconds_spent(), 90);
    assert_eq!(passed.report.reviews.len(), 50);
    assert!(passed.report.reviews.iter().all(|r| r.is_correct));

    let all = services.results().all().await;
    assert_eq!(all.len(), 1);
    assert_eq!(all.get(&ExamCategory::Linux), Some(passed.result()));
}

#[tokio::test(start_paused = true)]
async fn completing_exams_unlocks_the_master_certificate() {
    let (services, storage) = services();
    let certification = services.certification();
    let mut status = certification.subscribe();

    for category in [
        ExamCategory::Programming,
        ExamCategory::Linux,
        ExamCategory::Networking,
        ExamCategory::Cryptography,
    ] {
        let config = ExamConfig::builtin(category);
        let result = ExamResult::new(&config, 90, fixed_now(), 600).unwrap();
        storage.results.save_result(&result).await.unwrap();
    }
    assert!(matches!(
        certification.issue_master_certificate("Ada").await,
        Err(CertificationError::InsufficientExams {
            passed: 4,
            required: 5
        })
    ));

    let runner = services
        .catalog()
        .launch_key("websecurity")
        .unwrap();
    runner.start().unwrap();
    answer_all_correctly(&runner);
    runner.submit().await.unwrap();

    // The completion observer republished the status.
    assert!(status.has_changed().unwrap());
    assert!(status.borrow_and_update().eligible_for_master);

    let master = certification.issue_master_certificate("Ada").await.unwrap();
    assert_eq!(master.exams_passed(), 5);
    assert_eq!(master.holder_name(), "Ada");
    assert_eq!(master.date_earned(), "November 14, 2023");
    assert!(certification.status().await.has_master_certificate);
}

#[tokio::test]
async fn individual_certificate_requires_a_passing_latest_result() {
    let (services, storage) = services();
    let certification = services.certification();

    assert!(matches!(
        certification
            .issue_individual_certificate(ExamCategory::WebSecurity, "Ada")
            .await,
        Err(CertificationError::NotPassed {
            category: ExamCategory::WebSecurity
        })
    ));

    let config = ExamConfig::builtin(ExamCategory::WebSecurity);
    let result = ExamResult::new(&config, 70, fixed_now(), 1_000).unwrap();
    storage.results.save_result(&result).await.unwrap();

    let cert = certification
        .issue_individual_certificate(ExamCategory::WebSecurity, "Ada")
        .await
        .unwrap();
    assert_eq!(cert.score_percent(), 70);
    assert_eq!(cert.title(), "Web Application Security");
    assert_eq!(
        certification.status().await.individual_certificates,
        vec![ExamCategory::WebSecurity]
    );
}
