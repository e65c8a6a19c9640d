//! Configuration loading and resolution tests
//!
//! Tests that set TUNE_* environment variables are marked #[serial] so they
//! never run in parallel with each other.

use serial_test::serial;
use std::env;
use std::path::PathBuf;
use tune_common::config::{
    locate_config_file, Overrides, SiteSettings, TomlConfig, DEFAULT_HOST, DEFAULT_PORT,
    DEFAULT_SITE_ROOT, ENV_CONTENT_ORIGIN, ENV_HOST, ENV_PORT, ENV_SITE_ROOT,
};
use tune_common::Error;

fn clear_env() {
    env::remove_var(ENV_SITE_ROOT);
    env::remove_var(ENV_PORT);
    env::remove_var(ENV_CONTENT_ORIGIN);
    env::remove_var(ENV_HOST);
}

#[test]
#[serial]
fn test_defaults_when_nothing_configured() {
    clear_env();

    let settings = SiteSettings::resolve(Overrides::default(), &TomlConfig::default()).unwrap();

    assert_eq!(settings.site_root, PathBuf::from(DEFAULT_SITE_ROOT));
    assert_eq!(settings.host, DEFAULT_HOST);
    assert_eq!(settings.port, DEFAULT_PORT);
    assert!(settings.content_origin.is_none());
    assert_eq!(settings.log_level, "info");
    assert_eq!(settings.bind_addr(), format!("{}:{}", DEFAULT_HOST, DEFAULT_PORT));
}

#[test]
#[serial]
fn test_priority_cli_over_env_over_toml() {
    clear_env();

    let toml = TomlConfig {
        port: Some(7000),
        site_root: Some(PathBuf::from("/from/toml")),
        ..Default::default()
    };

    // TOML beats default
    let settings = SiteSettings::resolve(Overrides::default(), &toml).unwrap();
    assert_eq!(settings.port, 7000);

    // Environment beats TOML
    env::set_var(ENV_PORT, "7100");
    env::set_var(ENV_SITE_ROOT, "/from/env");
    let settings = SiteSettings::resolve(Overrides::default(), &toml).unwrap();
    assert_eq!(settings.port, 7100);
    assert_eq!(settings.site_root, PathBuf::from("/from/env"));

    // Command line beats environment
    let overrides = Overrides {
        port: Some(7200),
        ..Default::default()
    };
    let settings = SiteSettings::resolve(overrides, &toml).unwrap();
    assert_eq!(settings.port, 7200);

    clear_env();
}

#[test]
#[serial]
fn test_invalid_env_value_is_config_error() {
    clear_env();
    env::set_var(ENV_PORT, "not-a-port");

    let result = SiteSettings::resolve(Overrides::default(), &TomlConfig::default());
    assert!(matches!(result, Err(Error::Config(_))));

    clear_env();
}

#[test]
#[serial]
fn test_content_origin_from_env() {
    clear_env();
    env::set_var(ENV_CONTENT_ORIGIN, "https://cdn.example.com/site/");

    let settings = SiteSettings::resolve(Overrides::default(), &TomlConfig::default()).unwrap();
    assert_eq!(
        settings.content_origin.as_deref(),
        Some("https://cdn.example.com/site/")
    );

    clear_env();
}

#[test]
fn test_toml_file_relative_site_root_anchored_at_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
site_root = "public"
port = 8080
fetch_timeout_ms = 2500

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let config = TomlConfig::from_file(&path).unwrap();
    assert_eq!(config.site_root, Some(dir.path().join("public")));
    assert_eq!(config.port, Some(8080));
    assert_eq!(config.fetch_timeout_ms, Some(2500));
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_malformed_toml_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "port = \"eighty\"").unwrap();

    assert!(matches!(TomlConfig::from_file(&path), Err(Error::Toml(_))));
}

#[test]
fn test_explicit_missing_config_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    assert!(matches!(
        locate_config_file(Some(&missing)),
        Err(Error::Config(_))
    ));
}

#[test]
#[serial]
fn test_zero_timeout_rejected() {
    let toml = TomlConfig {
        fetch_timeout_ms: Some(0),
        ..Default::default()
    };
    assert!(SiteSettings::resolve(Overrides::default(), &toml).is_err());
}
