//! Format validation.
//!
//! Pattern checks over already well-typed records.

use std::sync::LazyLock;

use regex::Regex;

use super::report::FieldErrors;
use crate::dataset::StopRecord;

const TITLE: &str = "Format validation";
const FIELDS: [&str; 3] = ["stop_name", "stop_type", "a_time"];

/// Compiled patterns for the format-checked fields
#[derive(Debug, Clone)]
pub struct FormatRules {
    stop_name: Regex,
    stop_type: Regex,
    a_time: Regex,
}

impl FormatRules {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            stop_name: Regex::new(r"^([A-Z][a-z]+ )+(Road|Avenue|Boulevard|Street)$")?,
            stop_type: Regex::new(r"^[SOF]$")?,
            a_time: Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$")?,
        })
    }

    pub fn stop_name_matches(&self, name: &str) -> bool {
        self.stop_name.is_match(name)
    }

    /// An empty stop type is always accepted
    pub fn stop_type_matches(&self, code: &str) -> bool {
        code.is_empty() || self.stop_type.is_match(code)
    }

    pub fn a_time_matches(&self, time: &str) -> bool {
        self.a_time.is_match(time)
    }
}

impl Default for FormatRules {
    fn default() -> Self {
        Self::new().expect("Built-in format patterns must compile")
    }
}

static RULES: LazyLock<FormatRules> = LazyLock::new(FormatRules::default);

/// Count pattern mismatches for `stop_name`, `stop_type` and `a_time`
pub fn check_format(records: &[StopRecord]) -> FieldErrors {
    let rules = &*RULES;
    let mut errors = FieldErrors::new(TITLE, &FIELDS);

    for record in records {
        if !rules.stop_name_matches(&record.stop_name) {
            errors.add("stop_name");
        }
        if !rules.stop_type_matches(&record.stop_type) {
            errors.add("stop_type");
        }
        if !rules.a_time_matches(&record.a_time) {
            errors.add("a_time");
        }
    }

    log::debug!(
        "Format validation over {} records: {} errors",
        records.len(),
        errors.total()
    );
    errors
}
