//! Scan orchestrator: bounded-concurrency fetch-scan-aggregate pipeline.
//!
//! One task per URL runs under a semaphore of `concurrency` slots; the spawn
//! path waits for a slot, so at most C fetches are in flight at any moment.
//! Matches flow through a bounded mpsc queue into the single report writer.
//! The queue is closed only after every task has joined, and the run is
//! complete only once the writer has drained and flushed.

use crate::config::ScanConfig;
use crate::console::ConsoleOutput;
use crate::detect::RuleSet;
use crate::fetch::PageFetcher;
use crate::report::FindingsWriter;
use crate::types::{Result, ScanSummary, SecretMatch};
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::debug;

/// Orchestrates URL scanning: fetch, detect, aggregate.
pub struct Scanner {
    config: ScanConfig,
    fetcher: Arc<PageFetcher>,
    rules: Arc<RuleSet>,
    console: ConsoleOutput,
}

impl Scanner {
    /// Create a new scanner with the given configuration.
    pub fn new(config: ScanConfig) -> Result<Self> {
        let fetcher = Arc::new(PageFetcher::new(&config.http_config())?);
        let rules = Arc::new(RuleSet::builtin()?);
        let console = ConsoleOutput::new(config.verbose, config.json, config.quiet);

        Ok(Self {
            config,
            fetcher,
            rules,
            console,
        })
    }

    /// Scan the collected URL set and write the findings report.
    ///
    /// Per-URL failures are absorbed; only report-file creation errors (and
    /// a writer failure) propagate.
    pub async fn scan_urls(&self, urls: Vec<String>, warnings: Vec<String>) -> Result<ScanSummary> {
        let start = Instant::now();
        let urls_collected = urls.len();

        let writer = FindingsWriter::create(&self.config.findings_path())?;

        self.console.print_status(&format!(
            "Scanning {} JavaScript files for sensitive information...",
            urls_collected
        ));

        self.console.print_progress(&format!(
            "{} worker slots, queue capacity {}",
            self.config.concurrency.max(1),
            self.config.queue_size.max(1)
        ));

        let (tx, rx) = mpsc::channel::<SecretMatch>(self.config.queue_size.max(1));
        let sink = tokio::spawn(writer.drain(rx));

        let pb = self
            .console
            .create_progress_bar(urls_collected as u64, "Scanning JavaScript files");

        let fetcher = self.fetcher.clone();
        let rules = self.rules.clone();
        let worker = move |url: String| {
            let fetcher = fetcher.clone();
            let rules = rules.clone();
            async move {
                let body = fetcher.fetch_one(&url).await?;
                Some(rules.scan(&url, &body))
            }
        };

        let urls_fetched = run_pool(urls, self.config.concurrency.max(1), tx, worker, || {
            if let Some(ref pb) = pb {
                pb.inc(1);
            }
        })
        .await;

        if let Some(pb) = pb {
            pb.finish_and_clear();
        }

        // All producers are gone by now; the writer drains what is left,
        // flushes and reports the stanza count.
        let findings = sink.await??;

        let summary = ScanSummary {
            urls_collected,
            urls_fetched,
            findings,
            duration_secs: start.elapsed().as_secs_f64(),
            errors: warnings,
        };

        self.console.print_success(&format!(
            "Scan complete! Results saved to {}",
            self.config.findings_path().display()
        ));
        self.console.print_summary(&summary);

        Ok(summary)
    }
}

/// Run one task per URL over `limit` pool slots, funneling the matches each
/// worker produces into `tx`. Returns the number of URLs whose worker
/// produced a body (`Some`).
///
/// The slot is acquired on the spawn path, so spawning itself backpressures
/// once all slots are held. `on_complete` fires exactly once per finished
/// task, after it released its slot. Every task holds a sender clone until
/// it exits, so the queue closes only once the last producer is done; the
/// sink can never observe closure while a result is still on its way.
pub(crate) async fn run_pool<W, Fut>(
    urls: Vec<String>,
    limit: usize,
    tx: mpsc::Sender<SecretMatch>,
    worker: W,
    mut on_complete: impl FnMut(),
) -> usize
where
    W: Fn(String) -> Fut,
    Fut: Future<Output = Option<Vec<SecretMatch>>> + Send + 'static,
{
    let slots = Arc::new(Semaphore::new(limit));
    let mut tasks = JoinSet::new();

    for url in urls {
        let permit = slots
            .clone()
            .acquire_owned()
            .await
            .expect("slot semaphore is never closed");
        let task_tx = tx.clone();
        let fut = worker(url);

        tasks.spawn(async move {
            let outcome = fut.await;
            let fetched = outcome.is_some();

            if let Some(matches) = outcome {
                for m in matches {
                    // Fails only if the sink died; the task still completes.
                    if task_tx.send(m).await.is_err() {
                        debug!("Result queue closed early, dropping match");
                        break;
                    }
                }
            }

            drop(permit);
            fetched
        });
    }

    // Release the caller's handle; the queue now closes with the last task.
    drop(tx);

    let mut fetched = 0usize;
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(true) => fetched += 1,
            Ok(false) => {}
            Err(e) => debug!("Scan task panicked: {}", e),
        }
        on_complete();
    }

    fetched
}
