//! tune-site library - musician portfolio site renderer
//!
//! Loads the site's JSON content, renders it through escaped HTML templates
//! into page shells, and serves or exports the result.

use axum::Router;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod content;
pub mod error;
pub mod export;
pub mod pages;
pub mod render;

pub use error::{SiteError, SiteResult};
pub use pages::PageRenderer;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Page session factory
    pub renderer: Arc<PageRenderer>,
    /// Directory served for everything that is not a page
    pub site_root: PathBuf,
}

impl AppState {
    pub fn new(renderer: PageRenderer, site_root: impl Into<PathBuf>) -> Self {
        Self {
            renderer: Arc::new(renderer),
            site_root: site_root.into(),
        }
    }
}

/// Build application router
///
/// `/health` and `/api/buildinfo` are fixed; every other path is a page or a
/// static file of the site.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/api/buildinfo", get(api::get_build_info))
        .merge(api::health_routes())
        .fallback(api::serve_site)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
