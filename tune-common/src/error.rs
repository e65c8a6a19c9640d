//! Common error types for Tune Eternal

use thiserror::Error;

/// Common result type for Tune Eternal operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the site crates
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed TOML config file
    #[error("Config file parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
