//! URL collection from crawl-result lists.
//!
//! Reads the line-delimited outputs of the external crawl tools, keeps the
//! URLs that point at JavaScript resources and deduplicates them by exact
//! string value. Only the extension check is case-insensitive; URLs are
//! never otherwise normalized, so `/a.JS` and `/a.js` stay distinct.

use crate::types::Result;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Result of the collection phase.
#[derive(Debug, Default)]
pub struct Collection {
    /// Distinct .js URLs in first-seen order.
    pub urls: Vec<String>,
    /// Non-fatal problems (unreadable sources), surfaced in the summary.
    pub warnings: Vec<String>,
}

/// Collect distinct `.js` URLs from the given list files and write them,
/// one per line, to `out_path`.
///
/// A missing or unreadable source is a warning, not an error; collection
/// continues with whatever sources remain. A failure to create `out_path`
/// is fatal for the scan phase and propagates.
pub fn collect_js_urls(sources: &[&Path], out_path: &Path) -> Result<Collection> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut collection = Collection::default();

    for source in sources {
        let file = match File::open(source) {
            Ok(f) => f,
            Err(e) => {
                warn!("Skipping URL list {}: {}", source.display(), e);
                collection
                    .warnings
                    .push(format!("unreadable URL list {}: {}", source.display(), e));
                continue;
            }
        };

        for line in BufReader::new(file).lines() {
            let url = match line {
                Ok(l) => l.trim().to_string(),
                Err(e) => {
                    warn!("Skipping unreadable line in {}: {}", source.display(), e);
                    continue;
                }
            };

            if !is_js_url(&url) {
                continue;
            }

            if seen.insert(url.clone()) {
                collection.urls.push(url);
            }
        }
    }

    debug!("Collected {} unique .js URLs", collection.urls.len());

    let out = File::create(out_path)?;
    let mut writer = BufWriter::new(out);
    for url in &collection.urls {
        writeln!(writer, "{}", url)?;
    }
    writer.flush()?;

    Ok(collection)
}

/// Case-insensitive `.js` suffix check; the rest of the URL is untouched.
fn is_js_url(url: &str) -> bool {
    !url.is_empty() && url.to_lowercase().ends_with(".js")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static FILE_SEQ: AtomicUsize = AtomicUsize::new(0);

    fn temp_file(name: &str, contents: Option<&str>) -> PathBuf {
        let seq = FILE_SEQ.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!(
            "keyhound_collect_{}_{}_{}",
            std::process::id(),
            seq,
            name
        ));
        if let Some(contents) = contents {
            std::fs::write(&path, contents).unwrap();
        }
        path
    }

    #[test]
    fn test_suffix_check_is_case_insensitive_only() {
        assert!(is_js_url("https://x.com/a.js"));
        assert!(is_js_url("https://x.com/a.JS"));
        assert!(is_js_url("https://x.com/a.Js"));
        assert!(!is_js_url("https://x.com/a.css"));
        assert!(!is_js_url("https://x.com/a.json"));
        assert!(!is_js_url(""));
    }

    #[test]
    fn test_end_to_end_dedup_scenario() {
        let a = temp_file(
            "wayback.txt",
            Some("https://x.com/a.JS\nhttps://x.com/b.css\n"),
        );
        let b = temp_file(
            "katana.txt",
            Some("https://x.com/a.js\nhttps://x.com/c.js\n"),
        );
        let out = temp_file("jsfiles.txt", None);

        let collection = collect_js_urls(&[&a, &b], &out).unwrap();

        // a.JS and a.js differ as exact strings; both pass the suffix check.
        assert_eq!(collection.urls.len(), 3);
        assert_eq!(
            collection.urls,
            vec![
                "https://x.com/a.JS".to_string(),
                "https://x.com/a.js".to_string(),
                "https://x.com/c.js".to_string(),
            ]
        );
        assert!(collection.warnings.is_empty());

        let written = std::fs::read_to_string(&out).unwrap();
        assert_eq!(written.lines().count(), 3);
    }

    #[test]
    fn test_exact_duplicates_collapse() {
        let a = temp_file(
            "list.txt",
            Some("https://x.com/a.js\nhttps://x.com/a.js\nhttps://x.com/a.js\n"),
        );
        let out = temp_file("jsfiles.txt", None);

        let collection = collect_js_urls(&[&a], &out).unwrap();
        assert_eq!(collection.urls, vec!["https://x.com/a.js".to_string()]);
    }

    #[test]
    fn test_missing_source_is_non_fatal() {
        let missing = temp_file("does_not_exist.txt", None);
        let present = temp_file("list.txt", Some("https://x.com/a.js\n"));
        let out = temp_file("jsfiles.txt", None);

        let collection = collect_js_urls(&[&missing, &present], &out).unwrap();
        assert_eq!(collection.urls.len(), 1);
        assert_eq!(collection.warnings.len(), 1);
    }

    #[test]
    fn test_unwritable_output_is_fatal() {
        let a = temp_file("list.txt", Some("https://x.com/a.js\n"));
        let out = PathBuf::from("/nonexistent-dir/jsfiles.txt");

        assert!(collect_js_urls(&[&a], &out).is_err());
    }

    #[test]
    fn test_blank_lines_and_whitespace_are_ignored() {
        let a = temp_file(
            "list.txt",
            Some("\n  https://x.com/a.js  \n\nhttps://x.com/b.js\n"),
        );
        let out = temp_file("jsfiles.txt", None);

        let collection = collect_js_urls(&[&a], &out).unwrap();
        assert_eq!(
            collection.urls,
            vec![
                "https://x.com/a.js".to_string(),
                "https://x.com/b.js".to_string(),
            ]
        );
    }
}
