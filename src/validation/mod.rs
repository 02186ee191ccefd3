//! Validation Passes
//!
//! Six independent checks over a stop dataset. Type validation works on
//! the loose records; every other check needs typed `StopRecord`s.

pub mod arrivals;
pub mod format;
pub mod lines;
pub mod on_demand;
pub mod report;
pub mod terminals;
pub mod types;

pub use arrivals::{check_arrivals, ArrivalReport, ArrivalViolation};
pub use format::{check_format, FormatRules};
pub use lines::{count_line_stops, LineStops, LineStopsReport};
pub use on_demand::{check_on_demand, OnDemandReport};
pub use report::{FieldCount, FieldErrors};
pub use terminals::{check_terminals, TerminalReport};
pub use types::check_types;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dataset::{Dataset, DatasetError, StopRecord};

/// A validation pass, in stage order
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Check {
    Types,
    Format,
    Lines,
    StartStop,
    Arrivals,
    OnDemand,
}

impl Check {
    pub const ALL: [Check; 6] = [
        Check::Types,
        Check::Format,
        Check::Lines,
        Check::StartStop,
        Check::Arrivals,
        Check::OnDemand,
    ];
}

/// Output of a single pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "check", content = "report", rename_all = "kebab-case")]
pub enum Report {
    Types(FieldErrors),
    Format(FieldErrors),
    Lines(LineStopsReport),
    StartStop(TerminalReport),
    Arrivals(ArrivalReport),
    OnDemand(OnDemandReport),
}

impl Report {
    pub fn check(&self) -> Check {
        match self {
            Report::Types(_) => Check::Types,
            Report::Format(_) => Check::Format,
            Report::Lines(_) => Check::Lines,
            Report::StartStop(_) => Check::StartStop,
            Report::Arrivals(_) => Check::Arrivals,
            Report::OnDemand(_) => Check::OnDemand,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Types(report) | Report::Format(report) => write!(f, "{report}"),
            Report::Lines(report) => write!(f, "{report}"),
            Report::StartStop(report) => write!(f, "{report}"),
            Report::Arrivals(report) => write!(f, "{report}"),
            Report::OnDemand(report) => write!(f, "{report}"),
        }
    }
}

/// Runs checks against one dataset, typing its records at most once.
#[derive(Debug)]
pub struct Validator<'a> {
    dataset: &'a Dataset,
    typed: Option<Vec<StopRecord>>,
}

impl<'a> Validator<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self {
            dataset,
            typed: None,
        }
    }

    /// Run one check.
    ///
    /// Checks that need typed records fail if the dataset has ill-typed
    /// fields; run `Check::Types` first to see which ones.
    pub fn run(&mut self, check: Check) -> Result<Report, DatasetError> {
        log::debug!("Running {:?} check", check);

        let report = match check {
            Check::Types => Report::Types(check_types(self.dataset.raw_records())),
            Check::Format => Report::Format(check_format(self.typed_records()?)),
            Check::Lines => Report::Lines(count_line_stops(self.typed_records()?)),
            Check::StartStop => Report::StartStop(check_terminals(self.typed_records()?)),
            Check::Arrivals => Report::Arrivals(check_arrivals(self.typed_records()?)?),
            Check::OnDemand => Report::OnDemand(check_on_demand(self.typed_records()?)),
        };
        Ok(report)
    }

    fn typed_records(&mut self) -> Result<&[StopRecord], DatasetError> {
        if self.typed.is_none() {
            self.typed = Some(self.dataset.stop_records()?);
        }
        Ok(self.typed.as_deref().unwrap_or_default())
    }
}

/// Run several checks in the given order, stopping at the first fatal error
pub fn run_checks(dataset: &Dataset, checks: &[Check]) -> Result<Vec<Report>, DatasetError> {
    let mut validator = Validator::new(dataset);
    checks.iter().map(|&check| validator.run(check)).collect()
}
