mod config;
mod terminal;

use std::fmt;

use exam_core::model::ExamCategory;
use services::{AppServices, Clock};
use tracing_subscriber::{EnvFilter, fmt as tracing_fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    MissingCategory { command: &'static str },
    UnknownArg(String),
    UnknownCategory { raw: String },
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::MissingCategory { command } => {
                write!(f, "{command} requires an exam category")
            }
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownCategory { raw } => write!(f, "unknown exam category: {raw}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cyberexam [list]                       [--db <sqlite_url>]");
    eprintln!("  cyberexam take <category>              [--db <sqlite_url>]");
    eprintln!("  cyberexam results                      [--db <sqlite_url>]");
    eprintln!("  cyberexam certify <category> --name <name> [--db <sqlite_url>]");
    eprintln!("  cyberexam master --name <name>         [--db <sqlite_url>]");
    eprintln!("  cyberexam status                       [--db <sqlite_url>]");
    eprintln!();
    eprintln!("Categories:");
    eprintln!("  programming, linux, networking, cryptography, websecurity");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  CYBERSEC_DB_URL, CYBERSEC_LABS, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    List,
    Take,
    Results,
    Certify,
    Master,
    Status,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "list" => Some(Self::List),
            "take" => Some(Self::Take),
            "results" => Some(Self::Results),
            "certify" => Some(Self::Certify),
            "master" => Some(Self::Master),
            "status" => Some(Self::Status),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Take => "take",
            Self::Results => "results",
            Self::Certify => "certify",
            Self::Master => "master",
            Self::Status => "status",
        }
    }

    fn needs_category(self) -> bool {
        matches!(self, Self::Take | Self::Certify)
    }
}

#[derive(Debug)]
struct Args {
    command: Command,
    db_url: String,
    category: Option<ExamCategory>,
    holder_name: Option<String>,
}

impl Args {
    fn parse(
        command: Command,
        args: &mut impl Iterator<Item = String>,
        default_db_url: &str,
    ) -> Result<Self, ArgsError> {
        let mut db_url = normalize_sqlite_url(default_db_url.to_string());
        let mut category = None;
        let mut holder_name = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--name" => holder_name = Some(require_value(args, "--name")?),
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ if command.needs_category() && category.is_none() && !arg.starts_with("--") => {
                    let parsed = arg
                        .parse::<ExamCategory>()
                        .map_err(|err| ArgsError::UnknownCategory {
                            raw: err.raw().to_string(),
                        })?;
                    category = Some(parsed);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        if command.needs_category() && category.is_none() {
            return Err(ArgsError::MissingCategory {
                command: command.name(),
            });
        }
        if matches!(command, Command::Certify | Command::Master) && holder_name.is_none() {
            return Err(ArgsError::MissingValue { flag: "--name" });
        }

        Ok(Self {
            command,
            db_url,
            category,
            holder_name,
        })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

fn init_tracing(directive: &str) {
    let env_filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env();
    init_tracing(&config.rust_log);

    let mut argv: Vec<String> = std::env::args().skip(1).collect();
    let command = match argv.first().map(String::as_str) {
        None => Command::List,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::List,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };
    if argv.first().is_some_and(|first| !first.starts_with("--")) {
        argv.remove(0);
    }

    let args = Args::parse(command, &mut argv.into_iter(), &config.db_url).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    prepare_sqlite_file(&args.db_url)?;
    let services = AppServices::new_sqlite(&args.db_url, Clock::default(), config.lab_names).await?;
    tracing::debug!(db = %args.db_url, command = args.command.name(), "services ready");

    let catalog = services.catalog();
    let certification = services.certification();
    match (args.command, args.category, args.holder_name.as_deref()) {
        (Command::List, _, _) => terminal::print_catalog(&catalog.list_categories().await),
        (Command::Results, _, _) => terminal::print_results(&catalog.list_categories().await),
        (Command::Status, _, _) => terminal::print_status(&certification.status().await),
        (Command::Take, Some(category), _) => {
            let runner = catalog.launch(category)?;
            match terminal::take_exam(&runner).await? {
                Some(completion) => {
                    let persisted = runner.is_persisted() || runner.retry_persist().await.is_ok();
                    terminal::print_completion(&completion, persisted);
                }
                None => println!("Exam abandoned; nothing was recorded."),
            }
        }
        (Command::Certify, Some(category), Some(name)) => {
            let cert = certification
                .issue_individual_certificate(category, name)
                .await?;
            terminal::print_individual_certificate(&cert);
        }
        (Command::Master, _, Some(name)) => {
            let cert = certification.issue_master_certificate(name).await?;
            terminal::print_master_certificate(&cert);
        }
        (command, _, _) => {
            return Err(ArgsError::MissingCategory {
                command: command.name(),
            }
            .into());
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(command: Command, args: &[&str]) -> Result<Args, ArgsError> {
        let mut iter = args.iter().map(|s| (*s).to_string());
        Args::parse(command, &mut iter, "sqlite::memory:")
    }

    #[test]
    fn take_requires_a_known_category() {
        let args = parse(Command::Take, &["websecurity"]).unwrap();
        assert_eq!(args.category, Some(ExamCategory::WebSecurity));
        assert_eq!(args.db_url, "sqlite::memory:");

        assert!(matches!(
            parse(Command::Take, &[]),
            Err(ArgsError::MissingCategory { command: "take" })
        ));
        assert!(matches!(
            parse(Command::Take, &["forensics"]),
            Err(ArgsError::UnknownCategory { raw }) if raw == "forensics"
        ));
    }

    #[test]
    fn certify_needs_a_name() {
        assert!(matches!(
            parse(Command::Certify, &["linux"]),
            Err(ArgsError::MissingValue { flag: "--name" })
        ));
        let args = parse(Command::Certify, &["linux", "--name", "Ada Lovelace"]).unwrap();
        assert_eq!(args.holder_name.as_deref(), Some("Ada Lovelace"));
        assert!(matches!(
            parse(Command::List, &["linux"]),
            Err(ArgsError::UnknownArg(arg)) if arg == "linux"
        ));
    }

    #[test]
    fn db_flag_overrides_and_normalizes_paths() {
        let args = parse(Command::Status, &["--db", "/tmp/exams.sqlite3"]).unwrap();
        assert_eq!(args.db_url, "sqlite:///tmp/exams.sqlite3");
        let args = parse(Command::Status, &["--db", "sqlite:/var/data/x.db"]).unwrap();
        assert_eq!(args.db_url, "sqlite:///var/data/x.db");
        assert!(matches!(
            parse(Command::Status, &["--db", "  "]),
            Err(ArgsError::InvalidDbUrl { .. })
        ));
    }
}
