//! Command-line driver: read a dataset, run the configured checks, write reports.

use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::{Config, OutputFormat};
use crate::dataset::Dataset;
use crate::validation::{Check, Report, Validator};

/// Open the configured input: a file, or stdin when no path is given
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn Read>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open dataset {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

/// Result of one check: its report, or the error that stopped it
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum CheckOutcome {
    Report(Report),
    Failed { check: Check, error: String },
}

/// Validate the dataset read from `input`, writing reports to `out`.
///
/// A check that fails on its own (an unparseable arrival time) is reported
/// on `errors` and the remaining checks still run. Load and typing errors
/// stop the run. Returns the number of checks that could not run.
///
/// In text mode each report is written as soon as it is produced, so a
/// fatal error in a later check still leaves the earlier reports on `out`.
pub fn run<R: Read, W: Write, E: Write>(
    config: &Config,
    input: R,
    out: &mut W,
    errors: &mut E,
) -> Result<usize> {
    let dataset = Dataset::from_reader(input).context("Failed to load dataset")?;
    log::info!(
        "Validating {} records with {} checks",
        dataset.len(),
        config.checks.len()
    );
    if config.checks.is_empty() {
        log::warn!("No checks selected; nothing will be validated");
    }

    let mut validator = Validator::new(&dataset);
    let mut entries = Vec::new();
    let mut failed = 0;

    for &check in &config.checks {
        let entry = match validator.run(check) {
            Ok(report) => CheckOutcome::Report(report),
            Err(err) if err.is_check_local() => {
                failed += 1;
                log::error!("{:?} check could not run: {}", check, err);
                writeln!(errors, "{:?} check could not run: {}", check, err)?;
                CheckOutcome::Failed {
                    check,
                    error: err.to_string(),
                }
            }
            Err(err) => {
                return Err(err).with_context(|| format!("{:?} check could not run", check));
            }
        };

        match (config.format, entry) {
            (OutputFormat::Text, CheckOutcome::Report(report)) => {
                let text = report.to_string();
                if !text.is_empty() {
                    writeln!(out, "{}", text)?;
                }
            }
            (OutputFormat::Text, CheckOutcome::Failed { .. }) => {}
            (OutputFormat::Json, entry) => entries.push(entry),
        }
    }

    if config.format == OutputFormat::Json {
        serde_json::to_writer_pretty(&mut *out, &entries)?;
        writeln!(out)?;
    }

    Ok(failed)
}
