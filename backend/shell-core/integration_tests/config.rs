use shell_core::config::{LogLevel, ShellConfig};
use shell_core::error::config::ConfigError;

use std::fs;

use log::LevelFilter;
use tempfile::tempdir;

/// **VALUE**: Verifies a missing config file yields defaults.
///
/// **WHY THIS MATTERS**: First launch has no config; the app must still start.
///
/// **BUG THIS CATCHES**: Would catch a read error on a missing file.
#[test]
fn given_missing_config_when_loaded_then_returns_defaults() {
    // GIVEN
    let dir = tempdir().unwrap();

    // WHEN
    let config = ShellConfig::load(dir.path()).unwrap();

    // THEN
    assert_eq!(config, ShellConfig::default());
    assert_eq!(config.version, 1);
    assert!(config.window.start_hidden);
}

/// **VALUE**: Verifies saved settings come back on the next load.
///
/// **WHY THIS MATTERS**: Log level and window preferences must survive restarts.
///
/// **BUG THIS CATCHES**: Would catch a save that writes to a different file than load reads.
#[test]
fn given_saved_config_when_loaded_then_matches() {
    // GIVEN
    let dir = tempdir().unwrap();
    let mut config = ShellConfig::default();
    config.logging.level = LogLevel::Trace;
    config.window.start_hidden = false;

    // WHEN
    config.save(dir.path()).unwrap();
    let loaded = ShellConfig::load(dir.path()).unwrap();

    // THEN
    assert_eq!(loaded, config);
    assert!(!dir.path().join("shell.json.tmp").exists(), "Temp file should be renamed");
}

/// **VALUE**: Verifies partial files are completed with defaults.
///
/// **WHY THIS MATTERS**: Hand-edited configs often contain only the one setting a user
/// cared about.
///
/// **BUG THIS CATCHES**: Would catch a missing `#[serde(default)]`.
#[test]
fn given_partial_config_when_loaded_then_fills_defaults() {
    // GIVEN
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("shell.json"),
        r#"{ "window": { "start_hidden": false } }"#,
    )
    .unwrap();

    // WHEN
    let config = ShellConfig::load(dir.path()).unwrap();

    // THEN
    assert_eq!(config.version, 1);
    assert!(!config.window.start_hidden);
    assert_eq!(config.logging.level, LogLevel::default());
}

/// **VALUE**: Verifies corrupt JSON is reported as a parse error.
///
/// **WHY THIS MATTERS**: The binary falls back to defaults and logs why; the reason must be
/// specific.
///
/// **BUG THIS CATCHES**: Would catch corrupt files silently loading as defaults.
#[test]
fn given_corrupt_config_when_loaded_then_returns_parse_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("shell.json"), "{ not json").unwrap();

    let result = ShellConfig::load(dir.path());

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

/// **VALUE**: Verifies unknown future versions are rejected.
///
/// **WHY THIS MATTERS**: A downgraded app must not misread a newer config.
///
/// **BUG THIS CATCHES**: Would catch removal of the version check.
#[test]
fn given_future_version_when_loaded_then_returns_validation_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("shell.json"), r#"{ "version": 99 }"#).unwrap();

    let result = ShellConfig::load(dir.path());

    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}

/// **VALUE**: Verifies the on-disk names of log levels and their filters.
///
/// **WHY THIS MATTERS**: Users type these values by hand.
///
/// **BUG THIS CATCHES**: Would catch a changed `rename_all` or a wrong filter mapping.
#[test]
fn given_log_level_when_serialized_then_lowercase_and_maps_to_filter() {
    assert_eq!(serde_json::to_string(&LogLevel::Warn).unwrap(), r#""warn""#);
    assert_eq!(
        serde_json::from_str::<LogLevel>(r#""trace""#).unwrap(),
        LogLevel::Trace
    );
    assert_eq!(LogLevel::Error.to_level_filter(), LevelFilter::Error);
    assert_eq!(LogLevel::Info.to_level_filter(), LevelFilter::Info);
}
