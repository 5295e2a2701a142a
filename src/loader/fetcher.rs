//! The fetch seam between the loader and the network.

use async_trait::async_trait;
use reqwest::StatusCode;
use url::Url;

use super::http_client::HttpFetcher;
use super::local::LocalFetcher;

/// Errors raised before a response status is available.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Not a local file URL: {0}")]
    InvalidFilePath(String),
    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),
}

/// A status plus the raw body.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl FetchResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Check if the response is successful (2xx).
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Issues a single GET and reports whatever status came back.
///
/// Non-success statuses are not errors at this layer.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn get(&self, url: &Url) -> Result<FetchResponse, FetchError>;
}

/// Picks a fetcher by URL scheme: `http`/`https` go over the network,
/// `file` reads from a local checkout of the site.
pub struct SiteFetcher {
    http: HttpFetcher,
    local: LocalFetcher,
}

impl SiteFetcher {
    pub fn new(http: HttpFetcher) -> Self {
        Self {
            http,
            local: LocalFetcher,
        }
    }
}

#[async_trait]
impl Fetcher for SiteFetcher {
    async fn get(&self, url: &Url) -> Result<FetchResponse, FetchError> {
        match url.scheme() {
            "http" | "https" => self.http.get(url).await,
            "file" => self.local.get(url).await,
            other => Err(FetchError::UnsupportedScheme(other.to_string())),
        }
    }
}
