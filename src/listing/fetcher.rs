//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the scraper:
//! - Building the HTTP client with the configured user agent and timeouts
//! - GET requests for listing documents
//! - Error classification (transport, status, body)
//!
//! There is no retry logic. Any failure aborts the fetch and is reported with
//! the URL that was attempted.

use crate::config::HttpConfig;
use crate::ScrapeError;
use reqwest::{Client, StatusCode};
use scraper::Html;
use std::time::Duration;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The HTTP configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use blogtruyen_scraper::config::HttpConfig;
/// use blogtruyen_scraper::listing::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and parses the body into an HTML document
///
/// # Error Mapping
///
/// | Condition | Error |
/// |-----------|-------|
/// | Connection, TLS or timeout failure | `ScrapeError::Http` |
/// | Any status other than 200 | `ScrapeError::Status` |
/// | Body cannot be read | `ScrapeError::HtmlParse` |
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
pub async fn fetch_document(client: &Client, url: &str) -> Result<Html, ScrapeError> {
    tracing::debug!("GET {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| ScrapeError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(ScrapeError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    // Decodes by the declared charset; invalid sequences become U+FFFD
    let body = response.text().await.map_err(|e| ScrapeError::HtmlParse {
        url: url.to_string(),
        message: format!("failed to read body: {}", e),
    })?;

    tracing::debug!("Fetched {} bytes from {}", body.len(), url);

    Ok(Html::parse_document(&body))
}
