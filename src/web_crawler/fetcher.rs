// src/web_crawler/fetcher.rs
use crate::config::CrawlConfig;
use crate::error::{Result, ScraperError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Prepend https:// when the URL carries no scheme. Default-to-secure:
/// bare hostnames are assumed to speak TLS.
pub fn normalize_url(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &CrawlConfig) -> Self {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let url = normalize_url(url);
        debug!("Fetching: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| ScraperError::Fetch {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() && !status.is_redirection() {
            return Err(ScraperError::Status { url, status });
        }

        let html = response
            .text()
            .await
            .map_err(|source| ScraperError::Fetch {
                url: url.clone(),
                source,
            })?;
        debug!("Fetched {} bytes from {}", html.len(), url);

        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_host_defaults_to_https() {
        assert_eq!(normalize_url("example.com/x"), "https://example.com/x");
    }

    #[test]
    fn test_existing_scheme_is_kept() {
        assert_eq!(normalize_url("https://example.com/x"), "https://example.com/x");
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let once = normalize_url("example.com");
        assert_eq!(normalize_url(&once), once);
    }
}
