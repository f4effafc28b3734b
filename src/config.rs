//! Configuration handling for the scanner.

use crate::types::HttpConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Concurrent JavaScript secret scanner for crawled URL lists.
#[derive(Parser, Debug, Clone)]
#[command(name = "keyhound")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Collect .js URLs from crawl lists, fetch them and scan for secrets
    Scan(ScanConfig),
    /// Run the external crawl tools for a domain and write the URL lists
    Crawl(CrawlConfig),
}

/// Configuration for the crawl command.
#[derive(Parser, Debug, Clone)]
pub struct CrawlConfig {
    /// Domain to crawl (scheme optional, https:// assumed)
    pub domain: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Thread count forwarded to katana (-c)
    #[arg(long)]
    pub threads: Option<u32>,

    /// Directory for generated URL lists
    #[arg(long, default_value = "output")]
    pub output_dir: PathBuf,
}

/// Configuration for the scan command.
#[derive(Parser, Debug, Clone)]
pub struct ScanConfig {
    /// Domain to crawl before scanning (omit when passing --wayback-file/--katana-file)
    #[arg(required_unless_present_any = ["wayback_file", "katana_file"])]
    pub domain: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Pre-existing waybackurls output file (one URL per line)
    #[arg(long)]
    pub wayback_file: Option<PathBuf>,

    /// Pre-existing katana output file (one URL per line)
    #[arg(long)]
    pub katana_file: Option<PathBuf>,

    /// Thread count forwarded to katana (-c)
    #[arg(long)]
    pub threads: Option<u32>,

    /// Maximum concurrent fetches
    #[arg(short, long, default_value = "10")]
    pub concurrency: usize,

    /// Request timeout in seconds
    #[arg(long, default_value = "10")]
    pub timeout: u64,

    /// Capacity of the result queue between scan tasks and the report writer
    #[arg(long, default_value = "1024")]
    pub queue_size: usize,

    /// Custom User-Agent string
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Directory for URL lists and the findings report
    #[arg(short, long, default_value = "output")]
    pub output_dir: PathBuf,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Quiet mode: suppress status lines and the progress bar
    #[arg(short, long)]
    pub quiet: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            domain: None,
            verbose: false,
            wayback_file: None,
            katana_file: None,
            threads: None,
            concurrency: 10,
            timeout: 10,
            queue_size: 1024,
            user_agent: None,
            output_dir: PathBuf::from("output"),
            json: false,
            quiet: false,
        }
    }
}

impl ScanConfig {
    /// Get HTTP configuration from scan config.
    pub fn http_config(&self) -> HttpConfig {
        HttpConfig {
            timeout_secs: self.timeout,
            user_agent: self.user_agent.clone().unwrap_or_else(|| {
                HttpConfig::default().user_agent
            }),
        }
    }

    /// Path of the deduplicated .js URL list for this run.
    pub fn js_list_path(&self) -> PathBuf {
        let tag = self
            .domain
            .as_deref()
            .map(|d| d.replace('.', "_"))
            .unwrap_or_else(|| "input".to_string());
        self.output_dir.join(format!("jsfiles_{}.txt", tag))
    }

    /// Path of the findings report for this run.
    pub fn findings_path(&self) -> PathBuf {
        self.output_dir.join("sensitive_findings.txt")
    }
}

/// Path of the waybackurls list generated for a domain.
pub fn wayback_list_path(output_dir: &std::path::Path, domain: &str) -> PathBuf {
    output_dir.join(format!("waybackurls_{}.txt", domain))
}

/// Path of the katana list generated for a domain.
pub fn katana_list_path(output_dir: &std::path::Path, domain: &str) -> PathBuf {
    output_dir.join(format!("katana_{}.txt", domain))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_config_defaults() {
        let config = ScanConfig::default();
        assert_eq!(config.concurrency, 10);
        assert_eq!(config.timeout, 10);
        assert_eq!(config.queue_size, 1024);
        assert_eq!(config.output_dir, PathBuf::from("output"));
    }

    #[test]
    fn test_js_list_path_uses_domain() {
        let config = ScanConfig {
            domain: Some("example.com".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.js_list_path(),
            PathBuf::from("output/jsfiles_example_com.txt")
        );
    }

    #[test]
    fn test_js_list_path_without_domain() {
        let config = ScanConfig::default();
        assert_eq!(
            config.js_list_path(),
            PathBuf::from("output/jsfiles_input.txt")
        );
    }

    #[test]
    fn test_crawl_list_paths() {
        let dir = PathBuf::from("output");
        assert_eq!(
            wayback_list_path(&dir, "example.com"),
            PathBuf::from("output/waybackurls_example.com.txt")
        );
        assert_eq!(
            katana_list_path(&dir, "example.com"),
            PathBuf::from("output/katana_example.com.txt")
        );
    }
}
