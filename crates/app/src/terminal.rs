//! Line-oriented terminal front end for the exam engine.

use std::error::Error;
use std::io::Write;

use chrono::{DateTime, Utc};
use exam_core::model::{
    CompletionReason, ExamResult, IndividualCertificate, MasterCertificate,
};
use services::{CatalogEntry, CertificationStatus, ExamCompletion, ExamRunner};
use tokio::io::{AsyncBufReadExt, BufReader};

const OPTION_LETTERS: &[u8] = b"abcdefgh";

/// One parsed line of exam input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    /// 0-based question and option indices.
    Answer { question: usize, option: usize },
    Next,
    Previous,
    GoTo(usize),
    Time,
    Submit,
    Quit,
    Help,
}

impl Input {
    fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let head = parts.next()?.to_ascii_lowercase();
        let arg = parts.next();
        if parts.next().is_some() {
            return None;
        }

        match (head.as_str(), arg) {
            ("n", None) => Some(Self::Next),
            ("p", None) => Some(Self::Previous),
            ("t", None) => Some(Self::Time),
            ("s", None) => Some(Self::Submit),
            ("q", None) => Some(Self::Quit),
            ("h" | "?", None) => Some(Self::Help),
            ("g", Some(page)) => page.parse().ok().map(Self::GoTo),
            (number, Some(letter)) => {
                let question = number.parse::<usize>().ok()?.checked_sub(1)?;
                let option = option_index(letter)?;
                Some(Self::Answer { question, option })
            }
            _ => None,
        }
    }
}

fn option_index(letter: &str) -> Option<usize> {
    let [byte] = letter.as_bytes() else {
        return None;
    };
    OPTION_LETTERS
        .iter()
        .position(|l| *l == byte.to_ascii_lowercase())
}

fn option_letter(index: usize) -> char {
    OPTION_LETTERS.get(index).map_or('?', |b| char::from(*b))
}

/// `MM:SS`, minutes unbounded.
pub fn format_clock(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M UTC").to_string()
}

//
// ─── EXAM LOOP ─────────────────────────────────────────────────────────────────
//

/// Start `runner` and drive it from stdin until it completes or the user quits.
///
/// Returns `None` if the exam was abandoned.
///
/// # Errors
///
/// Returns an error if stdin cannot be read or the session cannot start.
pub async fn take_exam(runner: &ExamRunner) -> Result<Option<ExamCompletion>, Box<dyn Error>> {
    runner.start()?;
    print_help();
    render_page(runner);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt();
        let line = tokio::select! {
            completion = runner.completed() => {
                println!();
                println!("Time is up.");
                return Ok(completion);
            }
            line = lines.next_line() => line?,
        };
        let Some(line) = line else {
            runner.close();
            return Ok(None);
        };
        if line.trim().is_empty() {
            continue;
        }

        match Input::parse(&line) {
            Some(Input::Answer { question, option }) => {
                if runner.select_answer(question, option) {
                    render_page(runner);
                } else {
                    println!("No such question or option.");
                }
            }
            Some(Input::Next) => {
                runner.next_page();
                render_page(runner);
            }
            Some(Input::Previous) => {
                runner.previous_page();
                render_page(runner);
            }
            Some(Input::GoTo(page)) => {
                runner.go_to_page(page);
                render_page(runner);
            }
            Some(Input::Time) => {
                println!(
                    "Time remaining: {}",
                    format_clock(u64::from(runner.remaining_seconds()))
                );
            }
            Some(Input::Submit) => {
                if !runner.with_session(|s| s.submit_offered()) {
                    println!("Answer every question on the last page to submit.");
                    continue;
                }
                return match runner.submit().await {
                    Ok(completion) => Ok(Some(completion)),
                    // Scored but not stored; the caller retries the write.
                    Err(services::ExamError::Storage(err)) => {
                        tracing::warn!(error = %err, "result write failed on submit");
                        Ok(runner.completion())
                    }
                    Err(err) => Err(err.into()),
                };
            }
            Some(Input::Quit) => {
                runner.close();
                return Ok(None);
            }
            Some(Input::Help) => print_help(),
            None => println!("Unrecognised input; type h for help."),
        }
    }
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}

fn print_help() {
    println!("Commands:");
    println!("  <question> <letter>   select an answer, e.g. `7 b`");
    println!("  n / p                 next / previous page");
    println!("  g <page>              go to page");
    println!("  t                     time remaining");
    println!("  s                     submit (once the last page is answered)");
    println!("  q                     abandon the exam");
}

fn render_page(runner: &ExamRunner) {
    runner.with_session(|session| {
        let progress = session.progress();
        println!();
        println!(
            "{}  |  page {}/{}  |  {} left  |  {}/{} answered",
            session.config().title(),
            progress.current_page,
            progress.total_pages,
            format_clock(u64::from(progress.remaining_seconds)),
            progress.answered,
            progress.total,
        );
        for index in session.current_page_range() {
            let Some(question) = session.question(index) else {
                continue;
            };
            let selected = session.selected_answer(index);
            println!();
            println!("{:>3}. {}", index + 1, question.text());
            for (option, text) in question.options().iter().enumerate() {
                let mark = if selected == Some(option) { '*' } else { ' ' };
                println!("     {mark} {}) {text}", option_letter(option));
            }
        }
        if session.submit_offered() {
            println!();
            println!("All questions on the last page are answered; `s` submits.");
        }
    });
}

//
// ─── REPORTS ───────────────────────────────────────────────────────────────────
//

pub fn print_completion(completion: &ExamCompletion, persisted: bool) {
    let report = &completion.report;
    let result = &report.result;
    let how = match completion.reason {
        CompletionReason::Submitted => "submitted",
        CompletionReason::TimeExpired => "time expired",
    };

    println!();
    println!(
        "{}: {}% ({}/{} correct), {} - {}",
        result.category(),
        result.score_percent(),
        report.correct_count,
        report.question_count,
        if result.passed() { "PASSED" } else { "FAILED" },
        how,
    );
    println!(
        "Time spent: {}",
        format_clock(u64::from(result.seconds_spent()))
    );
    if !persisted {
        println!("Warning: the result could not be saved.");
    }

    println!();
    println!("Review:");
    for review in &report.reviews {
        let verdict = if review.is_correct { "correct" } else { "wrong" };
        let selected = review
            .selected
            .map_or_else(|| "-".to_string(), |i| option_letter(i).to_string());
        println!(
            "{:>3}. {verdict:<7} chose {selected}, answer {}",
            review.index + 1,
            option_letter(review.correct),
        );
        if !review.is_correct {
            println!("     {}", review.explanation);
        }
    }
}

pub fn print_catalog(entries: &[CatalogEntry]) {
    println!(
        "{:<14} {:<34} {:>9} {:>6} {:>6}  latest",
        "key", "title", "questions", "time", "pass"
    );
    for entry in entries {
        let latest = entry.latest_result.as_ref().map_or_else(
            || "-".to_string(),
            |r| format!("{}% {}", r.score_percent(), pass_label(r)),
        );
        println!(
            "{:<14} {:<34} {:>9} {:>5}m {:>5}%  {latest}",
            entry.category.key(),
            entry.config.title(),
            entry.question_count,
            entry.config.time_limit_minutes(),
            entry.config.passing_score_percent(),
        );
    }
}

pub fn print_results(entries: &[CatalogEntry]) {
    let mut any = false;
    for entry in entries {
        if let Some(result) = &entry.latest_result {
            any = true;
            println!(
                "{:<14} {:>3}% {:<6} {} spent, completed {}",
                entry.category.key(),
                result.score_percent(),
                pass_label(result),
                format_clock(u64::from(result.seconds_spent())),
                format_timestamp(result.completed_at()),
            );
        }
    }
    if !any {
        println!("No exams taken yet.");
    }
}

pub fn print_status(status: &CertificationStatus) {
    println!(
        "Passed {}/{} exams{}",
        status.passed_count,
        status.required_count,
        if status.eligible_for_master {
            " - eligible for the master certificate"
        } else {
            ""
        }
    );
    for (category, passed) in &status.categories {
        let state = match passed {
            Some(true) => "passed",
            Some(false) => "failed",
            None => "not taken",
        };
        let cert = if status.individual_certificates.contains(category) {
            " [certificate]"
        } else {
            ""
        };
        println!("  {:<14} {state}{cert}", category.key());
    }
    if status.has_master_certificate {
        println!("Master certificate issued.");
    }
}

pub fn print_individual_certificate(cert: &IndividualCertificate) {
    println!();
    println!("  Certificate of Completion");
    println!("  {}", cert.title());
    println!("  Awarded to {}", cert.holder_name());
    println!("  Score {}%  |  {}", cert.score_percent(), cert.date_earned());
    println!("  Credential {}", cert.id());
}

pub fn print_master_certificate(cert: &MasterCertificate) {
    let stats = cert.stats();
    println!();
    println!("  Master Certificate in Cybersecurity");
    println!("  Awarded to {}", cert.holder_name());
    println!(
        "  {} exams passed  |  labs {}% complete",
        stats.exams_passed, stats.completion_percentage
    );
    println!(
        "  Lab time {}  |  exam time {}",
        format_clock(stats.total_lab_seconds),
        format_clock(stats.total_exam_seconds)
    );
    println!("  {}  |  credential {}", cert.date_earned(), cert.id());
}

fn pass_label(result: &ExamResult) -> &'static str {
    if result.passed() { "pass" } else { "fail" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_answers_with_one_based_numbers() {
        assert_eq!(
            Input::parse("7 b"),
            Some(Input::Answer {
                question: 6,
                option: 1
            })
        );
        assert_eq!(
            Input::parse("  12   D "),
            Some(Input::Answer {
                question: 11,
                option: 3
            })
        );
        assert_eq!(Input::parse("0 a"), None);
        assert_eq!(Input::parse("3 bb"), None);
        assert_eq!(Input::parse("3 z"), None);
    }

    #[test]
    fn parses_navigation_commands() {
        assert_eq!(Input::parse("n"), Some(Input::Next));
        assert_eq!(Input::parse("P"), Some(Input::Previous));
        assert_eq!(Input::parse("g 4"), Some(Input::GoTo(4)));
        assert_eq!(Input::parse("g x"), None);
        assert_eq!(Input::parse("s"), Some(Input::Submit));
        assert_eq!(Input::parse("s now"), None);
        assert_eq!(Input::parse("q"), Some(Input::Quit));
    }

    #[test]
    fn clock_is_minutes_and_seconds() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(25 * 60), "25:00");
        assert_eq!(format_clock(61), "01:01");
        assert_eq!(format_clock(7_322), "122:02");
    }

    #[test]
    fn option_letters_round_out_of_range_to_placeholder() {
        assert_eq!(option_letter(0), 'a');
        assert_eq!(option_letter(3), 'd');
        assert_eq!(option_letter(99), '?');
    }
}
