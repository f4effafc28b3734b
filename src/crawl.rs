//! External crawl tool invocation.
//!
//! Runs waybackurls and katana as subprocesses to produce the two URL lists
//! the collector consumes. Tool failures are non-fatal: the scan proceeds
//! with whichever lists exist on disk.

use crate::types::{KeyhoundError, Result};
use std::path::Path;
use tokio::process::Command;
use tracing::debug;

/// Run `waybackurls` for a domain, writing one URL per line to `output`.
pub async fn run_waybackurls(domain: &str, output: &Path) -> Result<()> {
    debug!("Running waybackurls on {}", domain);

    let shell_cmd = format!(
        "echo {} | waybackurls > {}",
        shell_quote(domain),
        shell_quote(&output.display().to_string())
    );

    let result = Command::new("bash")
        .arg("-c")
        .arg(&shell_cmd)
        .output()
        .await
        .map_err(|e| KeyhoundError::CrawlError(format!("failed to launch waybackurls: {}", e)))?;

    if !result.status.success() {
        let stderr = String::from_utf8_lossy(&result.stderr);
        return Err(KeyhoundError::CrawlError(format!(
            "waybackurls exited with {}: {}",
            result.status,
            stderr.trim()
        )));
    }

    Ok(())
}

/// Run `katana` against a domain, writing discovered URLs to `output`.
///
/// `threads` is forwarded as katana's `-c` flag when set.
pub async fn run_katana(domain: &str, output: &Path, threads: Option<u32>) -> Result<()> {
    let target = normalize_target(domain)?;
    debug!("Running katana on {}", target);

    let mut cmd = Command::new("katana");
    cmd.arg("-u").arg(&target).arg("-o").arg(output);
    if let Some(threads) = threads {
        cmd.arg("-c").arg(threads.to_string());
    }

    let result = cmd
        .output()
        .await
        .map_err(|e| KeyhoundError::CrawlError(format!("failed to launch katana: {}", e)))?;

    if !result.status.success() {
        let stderr = String::from_utf8_lossy(&result.stderr);
        return Err(KeyhoundError::CrawlError(format!(
            "katana exited with {}: {}",
            result.status,
            stderr.trim()
        )));
    }

    Ok(())
}

/// Prefix a schemeless domain with https:// and validate it for katana.
fn normalize_target(domain: &str) -> Result<String> {
    let target = if domain.starts_with("http://") || domain.starts_with("https://") {
        domain.to_string()
    } else {
        format!("https://{}", domain)
    };
    url::Url::parse(&target)?;
    Ok(target)
}

/// Minimal single-quote shell quoting for values interpolated into bash -c.
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
