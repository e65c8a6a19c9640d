//! Per-page-session content store
//!
//! One `ContentStore` lives for one page session. It fetches `data/<name>`
//! relative to the page, memoizes each parsed file by name, and never lets a
//! load failure escape: failures are logged and come back as `None`.
//!
//! Failed loads are not cached. The next call for the same name fetches
//! again.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error};

use super::models::{BeatCatalog, Discography, MerchCatalog, ProjectCatalog, SiteData};
use super::{ContentSource, LoadError};

pub const DISCOGRAPHY_FILE: &str = "discography.json";
pub const BEATS_FILE: &str = "beats.json";
pub const MERCH_FILE: &str = "merch.json";
pub const PROJECTS_FILE: &str = "projects.json";
pub const SITE_FILE: &str = "site.json";

/// Section directory whose pages sit one level below the site root
const NESTED_SECTION: &str = "/pages/";

/// Prefix that takes a page back to the site root
pub fn base_path_for(page_path: &str) -> &'static str {
    if page_path.contains(NESTED_SECTION) {
        "../"
    } else {
        ""
    }
}

/// Resolve a relative reference against the directory of `page_path`
///
/// Returns a site-absolute path. `..` never climbs above the root.
pub fn resolve_reference(page_path: &str, reference: &str) -> String {
    let dir = match page_path.rfind('/') {
        Some(idx) => &page_path[..idx],
        None => "",
    };

    let mut segments: Vec<&str> = dir.split('/').filter(|s| !s.is_empty()).collect();
    for part in reference.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    format!("/{}", segments.join("/"))
}

pub struct ContentStore {
    source: Arc<dyn ContentSource>,
    page_path: String,
    base_path: &'static str,
    cache: Mutex<HashMap<String, Arc<Value>>>,
    /// One gate per file name so overlapping loads share a single fetch
    inflight: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl ContentStore {
    /// Create the store for the page at `page_path`; the base path is fixed here
    pub fn new(source: Arc<dyn ContentSource>, page_path: &str) -> Self {
        Self {
            source,
            page_path: page_path.to_string(),
            base_path: base_path_for(page_path),
            cache: Mutex::new(HashMap::new()),
            inflight: Mutex::new(HashMap::new()),
        }
    }

    pub fn page_path(&self) -> &str {
        &self.page_path
    }

    pub fn base_path(&self) -> &'static str {
        self.base_path
    }

    /// Reference as the page would write it, e.g. `../data/beats.json`
    pub fn data_reference(&self, name: &str) -> String {
        format!("{}data/{}", self.base_path, name)
    }

    /// Site-absolute path handed to the source, e.g. `/data/beats.json`
    pub fn data_path(&self, name: &str) -> String {
        resolve_reference(&self.page_path, &self.data_reference(name))
    }

    /// Load a data file, or `None` after logging why it failed
    pub async fn load(&self, name: &str) -> Option<Arc<Value>> {
        match self.try_load(name).await {
            Ok(value) => Some(value),
            Err(e) => {
                error!("ContentStore: {}", e);
                None
            }
        }
    }

    pub async fn try_load(&self, name: &str) -> Result<Arc<Value>, LoadError> {
        if let Some(hit) = self.cached(name).await {
            return Ok(hit);
        }

        let gate = {
            let mut inflight = self.inflight.lock().await;
            Arc::clone(
                inflight
                    .entry(name.to_string())
                    .or_insert_with(|| Arc::new(Mutex::new(()))),
            )
        };
        let _guard = gate.lock().await;

        // Filled by whoever held the gate before us
        if let Some(hit) = self.cached(name).await {
            return Ok(hit);
        }

        let path = self.data_path(name);
        debug!(file = name, path = %path, "Fetching content");

        let bytes = self
            .source
            .fetch(&path)
            .await
            .map_err(|e| LoadError::from_fetch(name, e))?;

        let value: Value = serde_json::from_slice(&bytes).map_err(|source| LoadError::Parse {
            file: name.to_string(),
            source,
        })?;

        let value = Arc::new(value);
        self.cache
            .lock()
            .await
            .insert(name.to_string(), Arc::clone(&value));
        Ok(value)
    }

    /// Load a data file and deserialize it; a schema mismatch counts as a parse failure
    pub async fn load_as<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        let value = self.load(name).await?;
        match T::deserialize(&*value) {
            Ok(typed) => Some(typed),
            Err(source) => {
                error!("ContentStore: {}", LoadError::Parse {
                    file: name.to_string(),
                    source,
                });
                None
            }
        }
    }

    pub async fn discography(&self) -> Option<Discography> {
        self.load_as(DISCOGRAPHY_FILE).await
    }

    pub async fn beats(&self) -> Option<BeatCatalog> {
        self.load_as(BEATS_FILE).await
    }

    pub async fn merch(&self) -> Option<MerchCatalog> {
        self.load_as(MERCH_FILE).await
    }

    pub async fn projects(&self) -> Option<ProjectCatalog> {
        self.load_as(PROJECTS_FILE).await
    }

    pub async fn site_data(&self) -> Option<SiteData> {
        self.load_as(SITE_FILE).await
    }

    pub async fn is_cached(&self, name: &str) -> bool {
        self.cache.lock().await.contains_key(name)
    }

    /// Drop every memoized file, e.g. when one store is reused across navigations
    pub async fn reset(&self) {
        self.cache.lock().await.clear();
    }

    async fn cached(&self, name: &str) -> Option<Arc<Value>> {
        self.cache.lock().await.get(name).cloned()
    }
}
