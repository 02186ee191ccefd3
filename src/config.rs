//! Configuration management for the stop dataset validator.
//!
//! Handles:
//! - Command-line argument parsing
//! - Optional TOML config files (user-global and explicit)
//!
//! Priority: built-in defaults < user config < `--config` file < CLI flags.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::validation::Check;

/// Command-line arguments for the validator
#[derive(Debug, Default, Parser)]
#[command(name = "easyrider")]
#[command(about = "Validate a bus line stop dataset")]
#[command(version)]
pub struct Args {
    /// Read the dataset from a file instead of stdin
    #[arg(long, help = "JSON dataset file (defaults to stdin)")]
    pub input: Option<PathBuf>,

    /// Checks to run, in order
    #[arg(long = "check", value_enum, help = "Check to run (repeatable, default: all)")]
    pub checks: Vec<Check>,

    /// Report output format
    #[arg(long, value_enum, help = "Output format (text, json)")]
    pub format: Option<OutputFormat>,

    /// Explicit config file
    #[arg(long, help = "TOML config file")]
    pub config: Option<PathBuf>,

    /// Log level for diagnostics on stderr
    #[arg(long, help = "Log level (trace, debug, info, warn, error)")]
    pub log_level: Option<String>,
}

/// How reports are written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Config file contents; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub checks: Option<Vec<Check>>,
    pub format: Option<OutputFormat>,
    pub log_level: Option<String>,
}

impl FileConfig {
    /// Load and parse a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Overlay `other` on top of `self`
    fn merge(self, other: FileConfig) -> FileConfig {
        FileConfig {
            checks: other.checks.or(self.checks),
            format: other.format.or(self.format),
            log_level: other.log_level.or(self.log_level),
        }
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Dataset file; `None` means stdin
    pub input: Option<PathBuf>,
    /// Checks to run, in order
    pub checks: Vec<Check>,
    pub format: OutputFormat,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: None,
            checks: Check::ALL.to_vec(),
            format: OutputFormat::Text,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Create configuration from command-line arguments and config files
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments, consulting the user config file
    pub fn from_args(args: Args) -> Result<Self> {
        Self::from_sources(args, user_config_path().as_deref())
    }

    /// Create configuration from explicit arguments and an optional user config path
    /// (useful for testing)
    pub fn from_sources(args: Args, user_config: Option<&Path>) -> Result<Self> {
        let mut file_config = FileConfig::default();

        if let Some(path) = user_config.filter(|path| path.exists()) {
            file_config = file_config.merge(FileConfig::load(path)?);
        }

        if let Some(path) = &args.config {
            file_config = file_config.merge(FileConfig::load(path)?);
        }

        let defaults = Config::default();
        let checks = if !args.checks.is_empty() {
            args.checks
        } else {
            file_config.checks.unwrap_or(defaults.checks)
        };

        Ok(Config {
            input: args.input,
            checks,
            format: args
                .format
                .or(file_config.format)
                .unwrap_or(defaults.format),
            log_level: args
                .log_level
                .or(file_config.log_level)
                .unwrap_or(defaults.log_level),
        })
    }
}

/// `<config_dir>/easyrider/config.toml`, if the platform has a config dir
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("easyrider").join("config.toml"))
}
