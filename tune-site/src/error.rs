//! Error types for tune-site

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::content::FetchError;

/// Page rendering and export error
#[derive(Debug, Error)]
pub enum SiteError {
    /// Page path matches no route (404)
    #[error("No page route for {0}")]
    NoRoute(String),

    /// Shell or file missing from the site (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Shell fetch failed for a reason other than absence
    #[error("Failed to load page shell {path}: {source}")]
    Shell {
        path: String,
        #[source]
        source: FetchError,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// tune-common error
    #[error("Common error: {0}")]
    Common(#[from] tune_common::Error),
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self {
            SiteError::NoRoute(_) => (StatusCode::NOT_FOUND, "NO_ROUTE"),
            SiteError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            SiteError::Shell { .. } => (StatusCode::BAD_GATEWAY, "SHELL_UNAVAILABLE"),
            SiteError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
            SiteError::Common(_) => (StatusCode::INTERNAL_SERVER_ERROR, "COMMON_ERROR"),
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}

/// Result type for page handlers and export
pub type SiteResult<T> = Result<T, SiteError>;
