// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use crate::error::Result;
use crate::models::CrawlerConfig;

/// Create a configured asynchronous HTTP client.
///
/// The user agent and the per-request timeout apply to every listing request.
pub fn create_async_client(config: &CrawlerConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// Fetch a URL and return its body, treating non-success statuses as errors.
pub async fn fetch_text(client: &reqwest::Client, url: &str) -> Result<String> {
    let text = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    Ok(text)
}
