// src/services/fetcher.rs

//! Listing page fetcher.

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::error::{AppError, Result};
use crate::models::CrawlerConfig;
use crate::utils::{http, page_url};

/// Source of raw listing markup, one page at a time.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the markup of listing page `page` (1-based).
    ///
    /// Fails with [`AppError::Fetch`] on network failure, timeout or a
    /// non-success status.
    async fn fetch(&self, page: u32) -> Result<String>;
}

/// Fetches listing pages over HTTP.
pub struct HttpPageFetcher {
    client: Client,
    base_url: Url,
}

impl HttpPageFetcher {
    /// Create a fetcher with a client built from the crawler settings.
    pub fn new(config: &CrawlerConfig) -> Result<Self> {
        let client = http::create_async_client(config)?;
        Ok(Self::with_client(client, config.base_url()?))
    }

    /// Create a fetcher around an existing client.
    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// Request target for a page.
    pub fn url_for(&self, page: u32) -> Url {
        page_url(&self.base_url, page)
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, page: u32) -> Result<String> {
        let url = self.url_for(page);
        log::debug!("Fetching page {}: {}", page, url);

        http::fetch_text(&self.client, url.as_str())
            .await
            .map_err(|e| AppError::fetch(page, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_uses_bare_base_url() {
        let fetcher = HttpPageFetcher::new(&CrawlerConfig::default()).unwrap();
        assert_eq!(fetcher.url_for(1).as_str(), "https://kabutan.jp/disclosures/");
        assert_eq!(
            fetcher.url_for(2).as_str(),
            "https://kabutan.jp/disclosures/?page=2"
        );
    }

    #[tokio::test]
    async fn test_unreachable_host_is_fetch_error() {
        let config = CrawlerConfig {
            base_url: "http://127.0.0.1:9/disclosures/".to_string(),
            timeout_secs: 2,
            ..CrawlerConfig::default()
        };
        let fetcher = HttpPageFetcher::new(&config).unwrap();

        let err = fetcher.fetch(4).await.unwrap_err();
        assert!(matches!(err, AppError::Fetch { page: 4, .. }));
    }
}
