//! Where `data.json` comes from.
//!
//! `DataSource` is the seam: the pipeline holds an `Arc<dyn DataSource>` and
//! never knows whether the document came over HTTP or from disk.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::models::SiteData;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("data source returned status {status}")]
    Status { status: u16 },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("data source has no '{0}' section")]
    MissingSection(&'static str),
}

#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetches and parses the whole document. Called once per page view.
    async fn fetch(&self) -> Result<SiteData, LoadError>;

    /// Human-readable location, for logs.
    fn location(&self) -> &str;
}

/// Picks the source for a configured location: `http://` and `https://`
/// URLs are fetched, anything else is read as a file path.
pub fn source_for(location: &str) -> Arc<dyn DataSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Arc::new(HttpDataSource::new(location))
    } else {
        Arc::new(FileDataSource::new(location))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// HTTP
// ────────────────────────────────────────────────────────────────────────────

pub struct HttpDataSource {
    client: Client,
    url: String,
}

impl HttpDataSource {
    pub fn new(url: &str) -> Self {
        Self {
            client: Client::new(),
            url: url.to_string(),
        }
    }
}

#[async_trait]
impl DataSource for HttpDataSource {
    async fn fetch(&self) -> Result<SiteData, LoadError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                status: status.as_u16(),
            });
        }
        let body = response.text().await?;
        debug!(url = %self.url, bytes = body.len(), "fetched data source");
        Ok(serde_json::from_str(&body)?)
    }

    fn location(&self) -> &str {
        &self.url
    }
}

// ────────────────────────────────────────────────────────────────────────────
// File
// ────────────────────────────────────────────────────────────────────────────

pub struct FileDataSource {
    path: PathBuf,
    display: String,
}

impl FileDataSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let display = path.display().to_string();
        Self { path, display }
    }
}

#[async_trait]
impl DataSource for FileDataSource {
    async fn fetch(&self) -> Result<SiteData, LoadError> {
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.display.clone(),
                source,
            })?;
        debug!(path = %self.display, bytes = body.len(), "read data source");
        Ok(serde_json::from_str(&body)?)
    }

    fn location(&self) -> &str {
        &self.display
    }
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory (tests)
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
pub struct StaticDataSource(pub Result<serde_json::Value, String>);

#[cfg(test)]
#[async_trait]
impl DataSource for StaticDataSource {
    async fn fetch(&self) -> Result<SiteData, LoadError> {
        match &self.0 {
            Ok(value) => Ok(serde_json::from_value(value.clone())?),
            Err(message) => Err(LoadError::Io {
                path: "memory".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, message.clone()),
            }),
        }
    }

    fn location(&self) -> &str {
        "memory"
    }
}
