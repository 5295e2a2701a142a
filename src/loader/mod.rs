//! Static JSON resources resolved relative to the current page.
//!
//! Every resource lives one directory above the page that loads it:
//! - chapters at `../data/chapters/chapter-{id}.json`
//! - assignment analytics at `../data/analytics/assignment-{id}.json`
//!
//! Resolving against the page (never the site root) keeps loads working when
//! the site is deployed under a sub-path.

mod fetcher;
mod http_client;
mod local;

pub use fetcher::{FetchError, FetchResponse, Fetcher, SiteFetcher};
pub use http_client::HttpFetcher;
pub use local::LocalFetcher;

use std::fmt;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

/// The kinds of static resource the site publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Chapter,
    Analytics,
}

impl ResourceKind {
    /// Path of the resource relative to a page one level below the site base.
    fn relative_path(self, id: &str) -> String {
        match self {
            ResourceKind::Chapter => format!("../data/chapters/chapter-{}.json", id),
            ResourceKind::Analytics => format!("../data/analytics/assignment-{}.json", id),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Chapter => write!(f, "chapter"),
            ResourceKind::Analytics => write!(f, "analytics"),
        }
    }
}

/// A chapter or assignment, by id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceRef {
    pub kind: ResourceKind,
    pub id: String,
}

impl ResourceRef {
    pub fn chapter(id: impl fmt::Display) -> Self {
        Self {
            kind: ResourceKind::Chapter,
            id: id.to_string(),
        }
    }

    pub fn analytics(assignment_id: impl fmt::Display) -> Self {
        Self {
            kind: ResourceKind::Analytics,
            id: assignment_id.to_string(),
        }
    }

    /// The page-relative path, e.g. `../data/chapters/chapter-1.json`.
    pub fn relative_path(&self) -> String {
        self.kind.relative_path(&self.id)
    }

    /// Resolve against the URL of the page doing the loading.
    pub fn resolve(&self, page: &Url) -> Result<Url, url::ParseError> {
        page.join(&self.relative_path())
    }
}

fn missing_message(kind: &ResourceKind, id: &str) -> String {
    match kind {
        ResourceKind::Chapter => format!("Chapter {} not found", id),
        ResourceKind::Analytics => format!("Analytics for assignment {} not found", id),
    }
}

/// Errors from loading a static resource.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Any non-2xx response. Missing files and server errors are not told apart.
    #[error("{}", missing_message(.kind, .id))]
    NotFound {
        kind: ResourceKind,
        id: String,
        status: StatusCode,
    },
    #[error("Invalid resource URL: {0}")]
    Url(#[from] url::ParseError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("Invalid JSON at {url}: {source}")]
    Parse {
        url: Url,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// The id of the resource that was not found, if that is what happened.
    pub fn missing_id(&self) -> Option<&str> {
        match self {
            LoadError::NotFound { id, .. } => Some(id),
            _ => None,
        }
    }
}

/// Loads chapter and analytics documents for one page.
///
/// Each call performs exactly one fetch. Nothing is cached or retried.
pub struct StaticLoader<F> {
    fetcher: F,
    page: Url,
}

impl<F: Fetcher> StaticLoader<F> {
    /// Create a loader for the page at `page`.
    pub fn new(fetcher: F, page: Url) -> Self {
        Self { fetcher, page }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// The page resources are resolved against.
    pub fn page(&self) -> &Url {
        &self.page
    }

    /// Load a chapter document.
    pub async fn load_chapter(&self, chapter_id: impl fmt::Display) -> Result<Value, LoadError> {
        self.load(&ResourceRef::chapter(chapter_id)).await
    }

    /// Load the analytics document for an assignment.
    pub async fn load_analytics(
        &self,
        assignment_id: impl fmt::Display,
    ) -> Result<Value, LoadError> {
        self.load(&ResourceRef::analytics(assignment_id)).await
    }

    /// Load any resource as an untyped JSON document.
    pub async fn load(&self, resource: &ResourceRef) -> Result<Value, LoadError> {
        self.load_as(resource).await
    }

    /// Load a resource and deserialize it into `T`.
    pub async fn load_as<T: DeserializeOwned>(
        &self,
        resource: &ResourceRef,
    ) -> Result<T, LoadError> {
        let url = resource.resolve(&self.page)?;
        tracing::debug!("Loading {} {} from {}", resource.kind, resource.id, url);

        let response = self.fetcher.get(&url).await?;
        if !response.is_success() {
            return Err(LoadError::NotFound {
                kind: resource.kind,
                id: resource.id.clone(),
                status: response.status,
            });
        }

        serde_json::from_slice(&response.body).map_err(|source| LoadError::Parse { url, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(url: &str) -> Url {
        Url::parse(url).unwrap()
    }

    #[test]
    fn test_relative_paths() {
        assert_eq!(
            ResourceRef::chapter(1).relative_path(),
            "../data/chapters/chapter-1.json"
        );
        assert_eq!(
            ResourceRef::analytics("7").relative_path(),
            "../data/analytics/assignment-7.json"
        );
    }

    #[test]
    fn test_resolve_from_root_deployment() {
        let url = ResourceRef::chapter("2")
            .resolve(&page("https://example.org/student/chapter-2.html"))
            .unwrap();
        assert_eq!(url.as_str(), "https://example.org/data/chapters/chapter-2.json");
    }

    #[test]
    fn test_resolve_from_sub_path_deployment() {
        let url = ResourceRef::analytics("1")
            .resolve(&page(
                "https://user.github.io/mini-openstax/instructor/analytics-1.html?x=1",
            ))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://user.github.io/mini-openstax/data/analytics/assignment-1.json"
        );
    }

    #[test]
    fn test_not_found_messages() {
        let err = LoadError::NotFound {
            kind: ResourceKind::Chapter,
            id: "1".to_string(),
            status: StatusCode::NOT_FOUND,
        };
        assert_eq!(err.to_string(), "Chapter 1 not found");
        assert_eq!(err.missing_id(), Some("1"));

        let err = LoadError::NotFound {
            kind: ResourceKind::Analytics,
            id: "3".to_string(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert_eq!(err.to_string(), "Analytics for assignment 3 not found");
    }
}
