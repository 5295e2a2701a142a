//! Fetcher for a site checked out on disk.

use async_trait::async_trait;
use reqwest::StatusCode;
use url::Url;

use super::fetcher::{FetchError, FetchResponse, Fetcher};

/// Serves `file://` URLs the way a static host would: a missing file is a
/// 404, anything else unreadable is an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFetcher;

#[async_trait]
impl Fetcher for LocalFetcher {
    async fn get(&self, url: &Url) -> Result<FetchResponse, FetchError> {
        let path = url
            .to_file_path()
            .map_err(|_| FetchError::InvalidFilePath(url.to_string()))?;

        match tokio::fs::read(&path).await {
            Ok(body) => Ok(FetchResponse::new(StatusCode::OK, body)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No file at {}", path.display());
                Ok(FetchResponse::new(StatusCode::NOT_FOUND, Vec::<u8>::new()))
            }
            Err(e) => Err(e.into()),
        }
    }
}
