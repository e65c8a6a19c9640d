//! Content sources
//!
//! A source resolves a site-absolute path (`/data/site.json`,
//! `/components/footer.html`) to raw bytes. Failures are reported with an
//! HTTP-style status so the local directory and a remote origin behave alike.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Source-level fetch failure
#[derive(Debug, Error)]
pub enum FetchError {
    /// Resource answered with a non-success status
    #[error("HTTP {0}")]
    Status(u16),

    /// Network, timeout or I/O failure before any status was available
    #[error("{0}")]
    Transport(String),
}

impl FetchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::Status(404))
    }
}

/// Anything that can serve site files by path
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, FetchError>;
}

/// Serves files from a local site directory
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a site path onto the root, refusing anything that climbs out of it
    fn locate(&self, path: &str) -> Option<PathBuf> {
        let mut file = self.root.clone();
        for segment in path.split('/') {
            match segment {
                "" | "." => {}
                ".." => return None,
                s if s.contains('\\') => return None,
                s => file.push(s),
            }
        }
        Some(file)
    }
}

#[async_trait]
impl ContentSource for DirSource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, FetchError> {
        let file = self.locate(path).ok_or(FetchError::Status(404))?;
        debug!("Reading {}", file.display());

        tokio::fs::read(&file).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => FetchError::Status(404),
            ErrorKind::PermissionDenied => FetchError::Status(403),
            _ => FetchError::Transport(format!("{}: {}", file.display(), e)),
        })
    }
}

/// Fetches files from a remote origin acting as the site root
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    origin: reqwest::Url,
}

impl HttpSource {
    pub fn new(origin: &str, timeout: Duration) -> tune_common::Result<Self> {
        let mut base = origin.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }

        let origin = reqwest::Url::parse(&base).map_err(|e| {
            tune_common::Error::Config(format!("Invalid content origin '{}': {}", origin, e))
        })?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| tune_common::Error::Internal(format!("HTTP client: {}", e)))?;

        Ok(Self { client, origin })
    }

    pub fn origin(&self) -> &reqwest::Url {
        &self.origin
    }
}

#[async_trait]
impl ContentSource for HttpSource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, FetchError> {
        let url = self
            .origin
            .join(path.trim_start_matches('/'))
            .map_err(|e| FetchError::Transport(format!("Bad path '{}': {}", path, e)))?;
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        Ok(body.to_vec())
    }
}
