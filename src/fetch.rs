//! HTTP fetcher for JavaScript resources.

use crate::types::{HttpConfig, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, trace};

/// Fetcher issuing one bounded-timeout GET per URL.
///
/// Failures are absorbed per URL: a transport error, non-success status,
/// undecodable body or timeout yields `None` and the URL contributes zero
/// results. No retries.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Create a new fetcher.
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .redirect(reqwest::redirect::Policy::limited(5))
            .http1_only()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self { client })
    }

    /// Fetch one URL, returning the body on success.
    pub async fn fetch_one(&self, url: &str) -> Option<String> {
        match self.do_fetch(url).await {
            Ok(body) => {
                trace!("Fetched {} ({} bytes)", url, body.len());
                Some(body)
            }
            Err(e) => {
                debug!("Failed to fetch {}: {}", url, e);
                None
            }
        }
    }

    async fn do_fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetcher_builds_with_defaults() {
        let config = HttpConfig::default();
        assert!(PageFetcher::new(&config).is_ok());
    }

    #[tokio::test]
    async fn test_unroutable_url_yields_none() {
        let config = HttpConfig {
            timeout_secs: 1,
            ..Default::default()
        };
        let fetcher = PageFetcher::new(&config).unwrap();
        // Reserved TLD guarantees resolution failure without network access.
        assert!(fetcher.fetch_one("https://host.invalid/app.js").await.is_none());
    }
}
