use std::env;

use dotenvy::dotenv;

const DEFAULT_DB_URL: &str = "sqlite://cybersec.sqlite3";
const DEFAULT_LABS: &str = "xss,csrf,command_injection,rate_limiting,fingerprinting,sql_injection";

/// Runtime settings read from the environment (and `.env`, when present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_url: String,
    pub lab_names: Vec<String>,
    pub rust_log: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenv().ok();

        let db_url = env::var("CYBERSEC_DB_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DB_URL.to_string());

        let labs = env::var("CYBERSEC_LABS").unwrap_or_else(|_| DEFAULT_LABS.to_string());

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Self {
            db_url,
            lab_names: parse_lab_names(&labs),
            rust_log,
        }
    }
}

fn parse_lab_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lab_names_are_trimmed_and_blank_entries_dropped() {
        assert_eq!(
            parse_lab_names(" xss, csrf ,,sql_injection "),
            vec!["xss", "csrf", "sql_injection"]
        );
        assert!(parse_lab_names("").is_empty());
    }

    #[test]
    fn default_labs_cover_the_challenge_set() {
        assert_eq!(parse_lab_names(DEFAULT_LABS).len(), 6);
    }
}
