//! Core types and errors for the secret scanner.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during a run.
#[derive(Error, Debug)]
pub enum KeyhoundError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Task join error: {0}")]
    JoinError(#[from] tokio::task::JoinError),

    #[error("Crawl tool error: {0}")]
    CrawlError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, KeyhoundError>;

/// A single positive detector hit inside one fetched body.
///
/// Created by a scan task and handed to the sink exactly once;
/// immutable after construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SecretMatch {
    /// The URL whose body produced the match.
    pub url: String,
    /// Identifier of the rule that fired (e.g. "aws-access-key-id").
    pub rule_id: String,
    /// Human-readable rule description, printed in the report stanza.
    pub description: String,
    /// The exact matched substring.
    pub matched: String,
}

/// Aggregate counters for one completed scan phase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSummary {
    /// Distinct .js URLs collected from the input lists.
    pub urls_collected: usize,
    /// URLs whose fetch produced a body that was scanned.
    pub urls_fetched: usize,
    /// Stanzas written to the findings report.
    pub findings: usize,
    /// Wall-clock duration of the scan phase in seconds.
    pub duration_secs: f64,
    /// Non-fatal errors encountered (missing lists, failed crawl tools).
    pub errors: Vec<String>,
}

/// Configuration for HTTP requests.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string(),
        }
    }
}
