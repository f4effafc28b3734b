//! keyhound - Concurrent JavaScript secret scanner.
//!
//! CLI entry point.

use clap::Parser;
use keyhound::collect::collect_js_urls;
use keyhound::config::{katana_list_path, wayback_list_path};
use keyhound::console::ConsoleOutput;
use keyhound::{crawl, Commands, Config, CrawlConfig, ScanConfig, Scanner};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();

    let verbose = match &config.command {
        Commands::Scan(c) => c.verbose,
        Commands::Crawl(c) => c.verbose,
    };

    // Set up logging
    let filter = if verbose {
        EnvFilter::new("keyhound=debug,info")
    } else {
        EnvFilter::new("keyhound=info,warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match config.command.clone() {
        Commands::Scan(scan_config) => {
            if let Err(code) = run_scan(scan_config).await {
                return code;
            }
        }
        Commands::Crawl(crawl_config) => {
            if let Err(code) = run_crawl(crawl_config).await {
                return code;
            }
        }
    }

    ExitCode::SUCCESS
}

async fn run_scan(scan_config: ScanConfig) -> Result<(), ExitCode> {
    let console = ConsoleOutput::new(scan_config.verbose, scan_config.json, scan_config.quiet);

    if !scan_config.json {
        print_banner();
    }

    // Setup-phase failures are the only fatal ones.
    if let Err(e) = fs::create_dir_all(&scan_config.output_dir) {
        error!("Failed to create output directory: {}", e);
        return Err(ExitCode::FAILURE);
    }

    let mut warnings = Vec::new();
    let mut sources: Vec<PathBuf> = Vec::new();

    if scan_config.wayback_file.is_none() && scan_config.katana_file.is_none() {
        // No pre-existing lists: the domain drives the crawl tools first.
        let domain = match scan_config.domain.as_deref() {
            Some(d) => d,
            None => {
                error!("Either a domain or --wayback-file/--katana-file is required");
                return Err(ExitCode::FAILURE);
            }
        };
        let (wayback, katana) = crawl_domain(
            &console,
            domain,
            scan_config.threads,
            &scan_config.output_dir,
            &mut warnings,
        )
        .await;
        sources.push(wayback);
        sources.push(katana);
    } else {
        sources.extend(scan_config.wayback_file.clone());
        sources.extend(scan_config.katana_file.clone());
    }

    console.print_status("Extracting JavaScript files...");
    let js_list = scan_config.js_list_path();
    let source_refs: Vec<&std::path::Path> = sources.iter().map(|p| p.as_path()).collect();
    let collection = match collect_js_urls(&source_refs, &js_list) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to write JS URL list: {}", e);
            return Err(ExitCode::FAILURE);
        }
    };
    warnings.extend(collection.warnings);

    console.print_success(&format!(
        "Found {} unique JavaScript files",
        collection.urls.len()
    ));
    if collection.urls.is_empty() {
        warn!("No .js URLs collected; the findings report will be empty");
    }

    let scanner = match Scanner::new(scan_config) {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to create scanner: {}", e);
            return Err(ExitCode::FAILURE);
        }
    };

    if let Err(e) = scanner.scan_urls(collection.urls, warnings).await {
        error!("Scan failed: {}", e);
        return Err(ExitCode::FAILURE);
    }

    Ok(())
}

async fn run_crawl(crawl_config: CrawlConfig) -> Result<(), ExitCode> {
    let console = ConsoleOutput::new(crawl_config.verbose, false, false);
    print_banner();

    if let Err(e) = fs::create_dir_all(&crawl_config.output_dir) {
        error!("Failed to create output directory: {}", e);
        return Err(ExitCode::FAILURE);
    }

    let mut warnings = Vec::new();
    let (wayback, katana) = crawl_domain(
        &console,
        &crawl_config.domain,
        crawl_config.threads,
        &crawl_config.output_dir,
        &mut warnings,
    )
    .await;

    console.print_success(&format!(
        "URL lists written to {} and {}",
        wayback.display(),
        katana.display()
    ));

    Ok(())
}

/// Run both crawl tools for a domain, collecting non-fatal tool failures.
async fn crawl_domain(
    console: &ConsoleOutput,
    domain: &str,
    threads: Option<u32>,
    output_dir: &std::path::Path,
    warnings: &mut Vec<String>,
) -> (PathBuf, PathBuf) {
    let wayback = wayback_list_path(output_dir, domain);
    let katana = katana_list_path(output_dir, domain);

    console.print_status(&format!("Running waybackurls on {}", domain));
    let spinner = console.create_spinner("Running waybackurls...");
    if let Err(e) = crawl::run_waybackurls(domain, &wayback).await {
        warn!("Waybackurls error: {}", e);
        warnings.push(e.to_string());
    }
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    console.print_status(&format!("Running katana on {}", domain));
    let spinner = console.create_spinner("Running katana...");
    if let Err(e) = crawl::run_katana(domain, &katana, threads).await {
        warn!("Katana error: {}", e);
        warnings.push(e.to_string());
    }
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    (wayback, katana)
}

fn print_banner() {
    println!();
    println!("\x1b[35m╔═══════════════════════════════════════╗\x1b[0m");
    println!("\x1b[35m║               KeyHound                ║\x1b[0m");
    println!("\x1b[35m║     JavaScript secret scanner         ║\x1b[0m");
    println!("\x1b[35m╚═══════════════════════════════════════╝\x1b[0m");
    println!();
}
