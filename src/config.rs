//! Configuration management for ministax using the prefer crate.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::launch::SiteLayout;

/// Environment variable overriding `site.base_path`.
pub const ENV_BASE_PATH: &str = "MINISTAX_BASE_PATH";
/// Environment variable overriding `storage_path`.
pub const ENV_STORAGE: &str = "MINISTAX_STORAGE";
/// Environment variable overriding `http.user_agent`.
pub const ENV_USER_AGENT: &str = "MINISTAX_USER_AGENT";

/// Errors reading a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse TOML config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Failed to parse YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),
}

fn default_user_agent() -> String {
    format!("ministax/{}", env!("CARGO_PKG_VERSION"))
}

fn default_request_timeout() -> u64 {
    30
}

/// HTTP settings for fetching site resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Whole-request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Where the saved role lives. Defaults to the user data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_path: Option<PathBuf>,
    #[serde(default)]
    pub site: SiteLayout,
    #[serde(default)]
    pub http: HttpConfig,
    /// File this config was loaded from, if any.
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl Config {
    /// Discover and load the config file, falling back to defaults.
    pub async fn load() -> Self {
        // Use prefer for file discovery, then parse with serde
        match prefer::load("ministax").await {
            Ok(pref_config) => {
                if let Some(path) = pref_config.source_path() {
                    match Self::load_from_path(path).await {
                        Ok(config) => config,
                        Err(e) => {
                            tracing::warn!("Ignoring config: {}", e);
                            Self::default_with_env()
                        }
                    }
                } else {
                    Self::default_with_env()
                }
            }
            Err(_) => Self::default_with_env(),
        }
    }

    /// Load a specific config file. The format follows the file extension.
    pub async fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");
        let mut config = Self::parse(&contents, ext)?;

        config.source_path = Some(path.to_path_buf());
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config.with_env_overrides())
    }

    /// Parse config text in the format named by `ext`.
    pub fn parse(contents: &str, ext: &str) -> Result<Self, ConfigError> {
        Ok(match ext {
            "toml" => toml::from_str(contents)?,
            "yaml" | "yml" => serde_yaml::from_str(contents)?,
            _ => serde_json::from_str(contents)?,
        })
    }

    /// Defaults plus environment overrides.
    pub fn default_with_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Apply `MINISTAX_*` environment overrides.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(base_path) = get(ENV_BASE_PATH) {
            self.site.base_path = base_path;
        }
        if let Some(storage) = get(ENV_STORAGE) {
            self.storage_path = Some(PathBuf::from(storage));
        }
        if let Some(user_agent) = get(ENV_USER_AGENT) {
            self.http.user_agent = user_agent;
        }
        self
    }

    /// Resolved storage file path.
    pub fn storage_path(&self) -> PathBuf {
        if let Some(ref path) = self.storage_path {
            return path.clone();
        }
        dirs::data_dir()
            .map(|d| d.join("ministax"))
            .unwrap_or_else(|| PathBuf::from(".ministax"))
            .join("storage.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.site, SiteLayout::default());
        assert_eq!(config.http.request_timeout_secs, 30);
        assert!(config.http.user_agent.starts_with("ministax/"));
        assert!(config.storage_path().ends_with("storage.json"));
    }

    #[test]
    fn test_parse_toml_partial() {
        let config = Config::parse(
            r#"
storage_path = "/tmp/ministax.json"

[site]
base_path = "/mini-openstax/"
default_context_id = "Geometry"
"#,
            "toml",
        )
        .unwrap();

        assert_eq!(config.site.base_path, "/mini-openstax/");
        assert_eq!(config.site.default_context_id, "Geometry");
        assert_eq!(config.site.student_landing, "student/chapter-1.html");
        assert_eq!(config.storage_path(), PathBuf::from("/tmp/ministax.json"));
        assert_eq!(config.http, HttpConfig::default());
    }

    #[test]
    fn test_parse_yaml_and_json() {
        let yaml = Config::parse("http:\n  request_timeout_secs: 5\n", "yml").unwrap();
        assert_eq!(yaml.http.request_timeout_secs, 5);

        let json = Config::parse(r#"{"site": {"launch_page": "launch"}}"#, "json").unwrap();
        assert_eq!(json.site.launch_page, "launch");
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            Config::parse("site = [", "toml"),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_overrides() {
        let config = Config::default().with_overrides(|key| match key {
            ENV_BASE_PATH => Some("/course/".to_string()),
            ENV_STORAGE => Some(String::new()),
            _ => None,
        });
        assert_eq!(config.site.base_path, "/course/");
        assert!(config.storage_path.is_none());
    }

    #[tokio::test]
    async fn test_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ministax.toml");
        std::fs::write(&path, "[http]\nuser_agent = \"test-agent\"\n").unwrap();

        let config = Config::load_from_path(&path).await.unwrap();
        assert_eq!(config.source_path.as_deref(), Some(path.as_path()));
        assert_eq!(config.http.request_timeout_secs, 30);
    }
}
