//! Content loading
//!
//! - **Sources** (`source`): local directory or remote origin transport
//! - **Store** (`loader`): per-page-session JSON loader with memoization
//! - **Models** (`models`): typed records for each data file

pub mod loader;
pub mod models;
pub mod source;

use thiserror::Error;

pub use loader::{base_path_for, resolve_reference, ContentStore};
pub use source::{ContentSource, DirSource, FetchError, HttpSource};

/// Failure to load one data file, always tagged with the file name
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to load {file}: {message}")]
    Transport { file: String, message: String },

    #[error("Failed to load {file}: HTTP {status}")]
    Status { file: String, status: u16 },

    #[error("Failed to parse {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    pub fn from_fetch(file: &str, err: FetchError) -> Self {
        match err {
            FetchError::Status(status) => LoadError::Status {
                file: file.to_string(),
                status,
            },
            FetchError::Transport(message) => LoadError::Transport {
                file: file.to_string(),
                message,
            },
        }
    }

    pub fn file(&self) -> &str {
        match self {
            LoadError::Transport { file, .. }
            | LoadError::Status { file, .. }
            | LoadError::Parse { file, .. } => file,
        }
    }
}
