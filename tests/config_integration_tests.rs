//! Tests for config file loading and source priority
use std::fs;

use easyrider_validator::config::{Args, Config, FileConfig, OutputFormat};
use easyrider_validator::Check;

#[test]
fn test_explicit_config_file_is_used() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("easyrider.toml");
    fs::write(&path, "checks = [\"arrivals\"]\nformat = \"json\"\nlog_level = \"debug\"\n")
        .expect("write config");

    let args = Args {
        config: Some(path),
        ..Args::default()
    };
    let config = Config::from_sources(args, None).expect("create config");
    assert_eq!(config.checks, vec![Check::Arrivals]);
    assert_eq!(config.format, OutputFormat::Json);
    assert_eq!(config.log_level, "debug");
}

#[test]
fn test_priority_user_then_explicit_then_cli() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let user = dir.path().join("user.toml");
    let explicit = dir.path().join("explicit.toml");
    fs::write(&user, "checks = [\"lines\"]\nformat = \"json\"\nlog_level = \"info\"\n")
        .expect("write user config");
    fs::write(&explicit, "log_level = \"trace\"\n").expect("write explicit config");

    let args = Args {
        config: Some(explicit),
        format: Some(OutputFormat::Text),
        ..Args::default()
    };
    let config = Config::from_sources(args, Some(&user)).expect("create config");

    // checks from user config, log level from explicit file, format from CLI
    assert_eq!(config.checks, vec![Check::Lines]);
    assert_eq!(config.log_level, "trace");
    assert_eq!(config.format, OutputFormat::Text);
}

#[test]
fn test_invalid_config_file_is_an_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("broken.toml");
    fs::write(&path, "checks = [\"everything\"]\n").expect("write config");

    let err = FileConfig::load(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config file"));
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    let args = Args {
        config: Some("/nonexistent/easyrider.toml".into()),
        ..Args::default()
    };
    assert!(Config::from_sources(args, None).is_err());
}
