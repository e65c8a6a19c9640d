//! Page rendering
//!
//! A page session resolves the route, loads the shell, injects the shared
//! components and runs the route's initializer against a fresh
//! [`ContentStore`]. Sessions never share a cache.
//!
//! # Structure
//! - **Routes** (`routes`): path → initializer table
//! - **Document** (`document`): shell with addressable containers
//! - **Components** (`components`): header/footer injection
//! - **Initializers** (`init`): per-route section rendering
//! - **Reveal** (`reveal`): reveal-on-scroll registration pass

pub mod components;
pub mod document;
pub mod init;
pub mod reveal;
pub mod routes;

use chrono::Datelike;
use std::sync::Arc;
use tracing::{debug, info};

use crate::content::{ContentSource, ContentStore};
use crate::error::SiteError;

pub use document::{Document, Slot};
pub use init::{InitReport, PageInit};
pub use routes::{Route, RouteTable};

/// Whether a request path names a page rather than an asset
///
/// Component files are fetched as raw fragments, never rendered as pages.
pub fn is_page_path(path: &str) -> bool {
    let lower = path.to_lowercase();
    if lower.contains("/components/") {
        return false;
    }
    lower.is_empty() || lower.ends_with('/') || lower.ends_with(".html")
}

/// Site file holding the shell for a page path
pub fn shell_path(page_path: &str) -> String {
    if page_path.is_empty() {
        "/index.html".to_string()
    } else if page_path.ends_with('/') {
        format!("{}index.html", page_path)
    } else {
        page_path.to_string()
    }
}

pub struct PageRenderer {
    /// Page shells and components
    site: Arc<dyn ContentSource>,
    /// `data/*.json`
    content: Arc<dyn ContentSource>,
    routes: RouteTable,
    copyright_year: Option<i32>,
}

impl PageRenderer {
    pub fn new(site: Arc<dyn ContentSource>, content: Arc<dyn ContentSource>) -> Self {
        Self {
            site,
            content,
            routes: RouteTable::standard(),
            copyright_year: None,
        }
    }

    /// Pin the footer year instead of using the current date
    pub fn with_copyright_year(mut self, year: i32) -> Self {
        self.copyright_year = Some(year);
        self
    }

    pub fn route(&self, page_path: &str) -> Option<Route> {
        self.routes.resolve(page_path)
    }

    /// Render one page session
    pub async fn render(&self, page_path: &str) -> Result<Document, SiteError> {
        let route = self
            .route(page_path)
            .ok_or_else(|| SiteError::NoRoute(page_path.to_string()))?;

        let shell = shell_path(page_path);
        let bytes = self.site.fetch(&shell).await.map_err(|source| {
            if source.is_not_found() {
                SiteError::NotFound(shell.clone())
            } else {
                SiteError::Shell {
                    path: shell.clone(),
                    source,
                }
            }
        })?;
        let mut doc = Document::new(String::from_utf8_lossy(&bytes).into_owned());

        let year = self
            .copyright_year
            .unwrap_or_else(|| chrono::Local::now().year());
        let components =
            components::inject_components(self.site.as_ref(), page_path, &mut doc, year).await;

        let store = ContentStore::new(Arc::clone(&self.content), page_path);
        let report = PageInit::new(&store).run(route, &mut doc).await;

        debug!("Shell {} with {} components", shell, components);
        info!(
            "Rendered {} ({}): {} sections",
            page_path,
            route,
            report.rendered.len()
        );
        Ok(doc)
    }
}
