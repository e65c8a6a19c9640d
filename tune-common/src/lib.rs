//! # Tune Eternal Common Library
//!
//! Shared code for the Tune Eternal site tooling:
//! - Error and result types
//! - Bootstrap configuration loading and setting resolution
//! - Tracing subscriber setup

pub mod config;
pub mod error;
pub mod logging;

pub use error::{Error, Result};
