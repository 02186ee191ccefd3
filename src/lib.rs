//! Easy Rider Stop Validator
//!
//! Validates a bus line dataset (lines, stops, arrival times) and produces
//! human-readable pass/fail reports.
//!
//! This library provides:
//! - Dataset loading with loose and typed record representations
//! - Six validation checks with stable text and JSON reports
//! - Configuration management

pub mod cli;
pub mod config;
pub mod dataset;
pub mod validation;

// Re-exports for clean public API
pub use config::Config;
pub use dataset::{Dataset, DatasetError, StopRecord};
pub use validation::{run_checks, Check, Report, Validator};
