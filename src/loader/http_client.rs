//! HTTP fetcher backed by reqwest.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use super::fetcher::{FetchError, FetchResponse, Fetcher};
use crate::config::HttpConfig;

/// Plain GET client for static site resources.
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a new HTTP fetcher from config.
    pub fn new(config: &HttpConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn get(&self, url: &Url) -> Result<FetchResponse, FetchError> {
        let start = Instant::now();
        let response = self.client.get(url.as_str()).send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();

        tracing::debug!(
            "GET {} -> {} ({} bytes, {}ms)",
            url,
            status.as_u16(),
            body.len(),
            start.elapsed().as_millis()
        );

        Ok(FetchResponse { status, body })
    }
}
