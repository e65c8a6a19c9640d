//! Bootstrap configuration and setting resolution
//!
//! Each setting resolves in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! A missing config file is not an error. A config file that exists but
//! cannot be parsed is.

use crate::{Error, Result};
use serde::Deserialize;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

pub const ENV_SITE_ROOT: &str = "TUNE_SITE_ROOT";
pub const ENV_HOST: &str = "TUNE_HOST";
pub const ENV_PORT: &str = "TUNE_PORT";
pub const ENV_CONTENT_ORIGIN: &str = "TUNE_CONTENT_ORIGIN";

pub const DEFAULT_SITE_ROOT: &str = "site";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5780;
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_LOG_LEVEL: &str = "info";

const CONFIG_DIR_NAME: &str = "tune-eternal";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Bootstrap configuration loaded from TOML file
///
/// Every field is optional; anything left out falls through to the
/// compiled default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    /// Directory holding the page shells, `components/` and `data/`.
    /// Relative paths are taken relative to the config file.
    #[serde(default)]
    pub site_root: Option<PathBuf>,

    #[serde(default)]
    pub host: Option<String>,

    #[serde(default)]
    pub port: Option<u16>,

    /// Base URL serving `data/*.json` instead of the local site root
    #[serde(default)]
    pub content_origin: Option<String>,

    /// Timeout for remote content fetches
    #[serde(default)]
    pub fetch_timeout_ms: Option<u64>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl TomlConfig {
    /// Parse a config file, anchoring a relative `site_root` at the file's directory
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: TomlConfig = toml::from_str(&content)?;

        if let Some(root) = config.site_root.as_ref().filter(|r| r.is_relative()) {
            if let Some(parent) = path.parent() {
                config.site_root = Some(parent.join(root));
            }
        }

        Ok(config)
    }
}

/// Find the config file to load
///
/// An explicitly requested file must exist. Otherwise the platform config
/// directory is checked and `None` is returned when nothing is there.
pub fn locate_config_file(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        if path.is_file() {
            return Ok(Some(path.to_path_buf()));
        }
        return Err(Error::Config(format!(
            "Config file not found: {}",
            path.display()
        )));
    }

    Ok(default_config_path().filter(|p| p.is_file()))
}

/// Platform config location, e.g. `~/.config/tune-eternal/config.toml` on Linux
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Resolve one setting through CLI → environment → TOML → default
pub fn resolve_setting<T>(cli: Option<T>, env_var: &str, toml: Option<T>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    if let Some(value) = cli {
        return Ok(value);
    }

    if let Some(raw) = env_value(env_var) {
        return raw.parse::<T>().map_err(|e| {
            Error::Config(format!("Invalid value for {}='{}': {}", env_var, raw, e))
        });
    }

    Ok(toml.unwrap_or(default))
}

/// Same priority order for a setting with no compiled default
pub fn resolve_optional(cli: Option<String>, env_var: &str, toml: Option<String>) -> Option<String> {
    cli.or_else(|| env_value(env_var)).or(toml)
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub site_root: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub content_origin: Option<String>,
}

/// Fully resolved settings for one run
#[derive(Debug, Clone)]
pub struct SiteSettings {
    pub site_root: PathBuf,
    pub host: String,
    pub port: u16,
    pub content_origin: Option<String>,
    pub fetch_timeout: Duration,
    pub log_level: String,
}

impl SiteSettings {
    pub fn resolve(overrides: Overrides, toml: &TomlConfig) -> Result<Self> {
        let site_root = resolve_setting(
            overrides.site_root,
            ENV_SITE_ROOT,
            toml.site_root.clone(),
            PathBuf::from(DEFAULT_SITE_ROOT),
        )?;
        let host = resolve_setting(
            overrides.host,
            ENV_HOST,
            toml.host.clone(),
            DEFAULT_HOST.to_string(),
        )?;
        let port = resolve_setting(overrides.port, ENV_PORT, toml.port, DEFAULT_PORT)?;
        let content_origin = resolve_optional(
            overrides.content_origin,
            ENV_CONTENT_ORIGIN,
            toml.content_origin.clone(),
        );

        let timeout_ms = toml.fetch_timeout_ms.unwrap_or(DEFAULT_FETCH_TIMEOUT_MS);
        if timeout_ms == 0 {
            return Err(Error::Config("fetch_timeout_ms must be positive".to_string()));
        }

        Ok(Self {
            site_root,
            host,
            port,
            content_origin,
            fetch_timeout: Duration::from_millis(timeout_ms),
            log_level: toml.logging.level.clone(),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_value_wins_without_touching_env() {
        let value = resolve_setting(Some(1u16), "TUNE_TEST_UNUSED_VAR", Some(2), 3).unwrap();
        assert_eq!(value, 1);
    }

    #[test]
    fn test_toml_then_default() {
        let from_toml = resolve_setting(None, "TUNE_TEST_UNSET_VAR", Some(2u16), 3).unwrap();
        assert_eq!(from_toml, 2);

        let fallback = resolve_setting::<u16>(None, "TUNE_TEST_UNSET_VAR", None, 3).unwrap();
        assert_eq!(fallback, 3);
    }

    #[test]
    fn test_logging_default_level() {
        let config: TomlConfig = toml::from_str("port = 9000").unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.port, Some(9000));
    }
}
