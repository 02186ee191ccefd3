//! Arrival time monotonicity.
//!
//! Records of one bus line are expected to be contiguous in the input.
//! Within a line, each arrival time must be strictly later than the one
//! before it. Only the first offending stop of each line is kept.

use std::collections::{HashMap, HashSet};
use std::fmt;

use chrono::NaiveTime;
use serde::Serialize;

use crate::dataset::{DatasetError, StopRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArrivalViolation {
    pub bus_id: i128,
    pub stop_name: String,
}

/// Violating lines in first-seen order; empty means OK
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArrivalReport {
    pub violations: Vec<ArrivalViolation>,
}

impl ArrivalReport {
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }
}

impl fmt::Display for ArrivalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Arrival time test:")?;
        if self.is_ok() {
            return write!(f, "\nOK");
        }
        for violation in &self.violations {
            write!(
                f,
                "\nbus_id line {}: wrong time on station {}",
                violation.bus_id, violation.stop_name
            )?;
        }
        Ok(())
    }
}

/// Check that arrival times increase along every bus line.
///
/// Fails if any `a_time` cannot be parsed as HH:MM.
pub fn check_arrivals(records: &[StopRecord]) -> Result<ArrivalReport, DatasetError> {
    let mut line_order: Vec<i128> = Vec::new();
    let mut seen_lines: HashSet<i128> = HashSet::new();
    let mut first_offender: HashMap<i128, String> = HashMap::new();
    let mut current_line: Option<i128> = None;
    let mut previous: Option<NaiveTime> = None;

    for (index, record) in records.iter().enumerate() {
        let arrival = record.arrival_time(index)?;

        if current_line != Some(record.bus_id) {
            current_line = Some(record.bus_id);
            previous = None;
            if seen_lines.insert(record.bus_id) {
                line_order.push(record.bus_id);
            }
        }

        if previous.is_some_and(|prev| arrival <= prev) {
            first_offender
                .entry(record.bus_id)
                .or_insert_with(|| record.stop_name.clone());
        }
        previous = Some(arrival);
    }

    let violations: Vec<ArrivalViolation> = line_order
        .into_iter()
        .filter_map(|bus_id| {
            first_offender
                .remove(&bus_id)
                .map(|stop_name| ArrivalViolation { bus_id, stop_name })
        })
        .collect();

    if !violations.is_empty() {
        log::info!("{} bus lines have out-of-order arrivals", violations.len());
    }
    Ok(ArrivalReport { violations })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::test_support::stop;

    #[test]
    fn test_increasing_times_ok() {
        let records = vec![
            stop(128, 1, "Prospekt Avenue", "S", "08:12"),
            stop(128, 3, "Elm Street", "", "08:19"),
            stop(256, 2, "Pilotow Street", "S", "07:00"),
        ];
        let report = check_arrivals(&records).unwrap();
        assert!(report.is_ok());
        assert_eq!(report.to_string(), "Arrival time test:\nOK");
    }

    #[test]
    fn test_first_violation_per_line() {
        let records = vec![
            stop(1, 1, "First Street", "S", "08:00"),
            stop(1, 2, "Second Street", "", "08:30"),
            stop(1, 3, "Third Street", "", "08:15"),
            stop(1, 4, "Fourth Street", "F", "08:10"),
            stop(2, 5, "Fifth Avenue", "S", "09:00"),
            stop(2, 6, "Sixth Avenue", "F", "09:10"),
        ];
        let report = check_arrivals(&records).unwrap();
        assert_eq!(
            report.violations,
            vec![ArrivalViolation {
                bus_id: 1,
                stop_name: "Third Street".to_string()
            }]
        );
        assert_eq!(
            report.to_string(),
            "Arrival time test:\nbus_id line 1: wrong time on station Third Street"
        );
    }

    #[test]
    fn test_equal_times_violate() {
        let records = vec![
            stop(128, 1, "Prospekt Avenue", "S", "08:12"),
            stop(128, 3, "Elm Street", "", "08:12"),
        ];
        let report = check_arrivals(&records).unwrap();
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].stop_name, "Elm Street");
    }

    #[test]
    fn test_all_violating_lines_reported() {
        let records = vec![
            stop(128, 1, "Prospekt Avenue", "S", "08:12"),
            stop(128, 3, "Elm Street", "", "08:00"),
            stop(256, 2, "Pilotow Street", "S", "09:20"),
            stop(256, 3, "Elm Street", "", "09:45"),
            stop(512, 4, "Bourbon Street", "S", "08:13"),
            stop(512, 6, "Sunset Boulevard", "F", "08:13"),
        ];
        let report = check_arrivals(&records).unwrap();
        assert_eq!(
            report.to_string(),
            "Arrival time test:\n\
             bus_id line 128: wrong time on station Elm Street\n\
             bus_id line 512: wrong time on station Sunset Boulevard"
        );
    }

    #[test]
    fn test_time_resets_between_lines() {
        let records = vec![
            stop(128, 1, "Prospekt Avenue", "S", "23:00"),
            stop(256, 2, "Pilotow Street", "S", "06:00"),
        ];
        assert!(check_arrivals(&records).unwrap().is_ok());
    }

    #[test]
    fn test_interleaved_line_listed_once() {
        let records = vec![
            stop(128, 1, "Prospekt Avenue", "S", "08:12"),
            stop(128, 3, "Elm Street", "", "08:00"),
            stop(256, 2, "Pilotow Street", "S", "09:20"),
            stop(128, 5, "Fifth Avenue", "", "07:00"),
            stop(128, 7, "Sesame Street", "F", "06:00"),
        ];
        let report = check_arrivals(&records).unwrap();
        assert_eq!(
            report.violations,
            vec![ArrivalViolation {
                bus_id: 128,
                stop_name: "Elm Street".to_string()
            }]
        );
    }

    #[test]
    fn test_unparseable_time_is_fatal() {
        let records = vec![
            stop(128, 1, "Prospekt Avenue", "S", "08:12"),
            stop(128, 3, "Elm Street", "", "8 pm"),
        ];
        let err = check_arrivals(&records).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidTime { index: 1, .. }));
    }
}
