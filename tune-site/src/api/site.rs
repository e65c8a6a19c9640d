//! Site handler
//!
//! Page requests run a page session and return the rendered document.
//! Everything else is a plain file from the site directory.

use axum::{
    extract::{Request, State},
    http::Method,
    response::{Html, IntoResponse, Response},
};
use tower::ServiceExt;
use tower_http::services::ServeDir;
use tracing::warn;

use crate::pages::is_page_path;
use crate::AppState;

/// Fallback for every path without a fixed route
pub async fn serve_site(State(state): State<AppState>, req: Request) -> Response {
    let path = req.uri().path().to_string();
    let readable = matches!(*req.method(), Method::GET | Method::HEAD);

    if readable && is_page_path(&path) {
        return match state.renderer.render(&path).await {
            Ok(doc) => Html(doc.into_string()).into_response(),
            Err(e) => {
                warn!("Page {} not rendered: {}", path, e);
                e.into_response()
            }
        };
    }

    match ServeDir::new(&state.site_root).oneshot(req).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}
