//! keyhound - Concurrent JavaScript secret scanner.
//!
//! This library turns two crawl-result URL lists into a findings report by:
//! - Collecting and deduplicating the `.js` URLs they contain
//! - Fetching each URL under a bounded worker pool
//! - Applying a fixed set of secret detectors to every body
//! - Funneling all matches through a single report writer
//!
//! # Example
//!
//! ```no_run
//! use keyhound::config::ScanConfig;
//! use keyhound::scanner::Scanner;
//!
//! #[tokio::main]
//! async fn main() {
//!     let scanner = Scanner::new(ScanConfig::default()).unwrap();
//!     let urls = vec!["https://example.com/app.js".to_string()];
//!     let summary = scanner.scan_urls(urls, Vec::new()).await.unwrap();
//!     println!("{} matches found", summary.findings);
//! }
//! ```

pub mod collect;
pub mod config;
pub mod console;
pub mod crawl;
pub mod detect;
pub mod fetch;
pub mod report;
pub mod scanner;
pub mod types;

pub use config::{Commands, Config, CrawlConfig, ScanConfig};
pub use detect::RuleSet;
pub use scanner::Scanner;
pub use types::{HttpConfig, KeyhoundError, Result, ScanSummary, SecretMatch};
