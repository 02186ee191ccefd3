//! Type and required-field validation.
//!
//! Runs on the loose representation, so it can count errors that would
//! otherwise stop the conversion to typed records.

use serde_json::Value;

use super::report::FieldErrors;
use crate::dataset::{RawRecord, REQUIRED_FIELDS};

const TITLE: &str = "Type and required field validation";

/// Count per-field type errors across all records
pub fn check_types(records: &[RawRecord]) -> FieldErrors {
    let mut errors = FieldErrors::new(TITLE, &REQUIRED_FIELDS);

    for record in records {
        for field in REQUIRED_FIELDS {
            if !field_is_valid(field, record.field(field)) {
                errors.add(field);
            }
        }
    }

    log::debug!(
        "Type validation over {} records: {} errors",
        records.len(),
        errors.total()
    );
    errors
}

fn field_is_valid(field: &str, value: &Value) -> bool {
    match field {
        "bus_id" | "stop_id" | "next_stop" => value.is_i64() || value.is_u64(),
        "stop_type" => value.as_str().is_some_and(|s| s.chars().count() <= 1),
        // stop_name, a_time
        _ => value.as_str().is_some_and(|s| !s.trim().is_empty()),
    }
}
