//! Colored console output for scan progress and summaries.

use crate::types::ScanSummary;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

/// Console output handler with colors and formatting.
pub struct ConsoleOutput {
    verbose: bool,
    json_mode: bool,
    quiet: bool,
}

impl ConsoleOutput {
    /// Create a new console output handler.
    pub fn new(verbose: bool, json_mode: bool, quiet: bool) -> Self {
        Self {
            verbose,
            json_mode,
            quiet,
        }
    }

    /// Print a phase status message.
    pub fn print_status(&self, message: &str) {
        if self.json_mode || self.quiet {
            return;
        }

        println!("{} {}", "[*]".bright_blue(), message);
    }

    /// Print a success message.
    pub fn print_success(&self, message: &str) {
        if self.json_mode || self.quiet {
            return;
        }

        println!("{} {}", "[+]".green().bold(), message);
    }

    /// Print detail lines (only in verbose mode).
    pub fn print_progress(&self, message: &str) {
        if self.json_mode || !self.verbose {
            return;
        }

        println!("{} {}", "[.]".dimmed(), message.dimmed());
    }

    /// Print a warning.
    pub fn print_warn(&self, message: &str) {
        if self.json_mode {
            return;
        }

        eprintln!("{} {}", "[!]".yellow().bold(), message.yellow());
    }

    /// Print the end-of-run summary.
    pub fn print_summary(&self, summary: &ScanSummary) {
        if self.json_mode {
            if let Ok(json) = serde_json::to_string_pretty(summary) {
                println!("{}", json);
            }
            return;
        }

        if self.quiet && summary.findings == 0 {
            return;
        }

        println!();
        println!("{}", "=== Scan Summary ===".bright_cyan());
        println!("  JS URLs:   {}", summary.urls_collected);
        println!("  Fetched:   {}", summary.urls_fetched);
        println!("  Duration:  {:.2}s", summary.duration_secs);

        if summary.findings > 0 {
            println!(
                "  {}",
                format!("SENSITIVE MATCHES FOUND: {}", summary.findings)
                    .red()
                    .bold()
            );
        } else {
            println!("  {}", "No sensitive matches found.".green());
        }

        if !summary.errors.is_empty() {
            println!();
            println!("{}", "Warnings:".yellow());
            for error in &summary.errors {
                println!("  - {}", error.dimmed());
            }
        }

        println!();
    }

    /// Create a progress bar advanced once per completed scan task.
    pub fn create_progress_bar(&self, total: u64, message: &str) -> Option<ProgressBar> {
        if self.json_mode || self.quiet {
            return None;
        }

        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        pb.set_message(message.to_string());
        Some(pb)
    }

    /// Create a spinner for an external tool whose progress is unknown.
    pub fn create_spinner(&self, message: &str) -> Option<ProgressBar> {
        if self.json_mode || self.quiet {
            return None;
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        Some(pb)
    }
}

impl Default for ConsoleOutput {
    fn default() -> Self {
        Self::new(false, false, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_output_creation() {
        let output = ConsoleOutput::new(true, false, false);
        assert!(output.verbose);
        assert!(!output.json_mode);
    }

    #[test]
    fn test_progress_bar_suppressed_in_quiet_mode() {
        let output = ConsoleOutput::new(false, false, true);
        assert!(output.create_progress_bar(10, "scan").is_none());
        assert!(output.create_spinner("crawl").is_none());
    }
}
