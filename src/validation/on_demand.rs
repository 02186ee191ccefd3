//! On-demand stop conflicts.
//!
//! An on-demand (`O`) stop name may not also be a start, a finish, or a
//! transfer stop. Transfer stops are names that occur in more than one
//! record, whatever their type.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;

use serde::Serialize;

use super::report::quoted_list;
use crate::dataset::{StopKind, StopRecord};

/// Sorted conflicting on-demand stop names; empty means OK
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OnDemandReport {
    pub wrong_stops: Vec<String>,
}

impl OnDemandReport {
    pub fn is_ok(&self) -> bool {
        self.wrong_stops.is_empty()
    }
}

impl fmt::Display for OnDemandReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "On demand stops test:")?;
        if self.is_ok() {
            write!(f, "OK")
        } else {
            write!(f, "Wrong stop type: {}", quoted_list(&self.wrong_stops))
        }
    }
}

pub fn check_on_demand(records: &[StopRecord]) -> OnDemandReport {
    let mut occurrences: HashMap<&str, usize> = HashMap::new();
    let mut on_demand: BTreeSet<&str> = BTreeSet::new();
    let mut terminals: HashSet<&str> = HashSet::new();

    for record in records {
        let name = record.stop_name.as_str();
        match record.kind() {
            StopKind::Start | StopKind::Finish => {
                terminals.insert(name);
            }
            StopKind::OnDemand => {
                on_demand.insert(name);
            }
            StopKind::Regular => {}
        }
        *occurrences.entry(name).or_insert(0) += 1;
    }

    let wrong_stops: Vec<String> = on_demand
        .into_iter()
        .filter(|name| terminals.contains(name) || occurrences[name] > 1)
        .map(str::to_string)
        .collect();

    if !wrong_stops.is_empty() {
        log::info!("{} on-demand stops conflict with other stop types", wrong_stops.len());
    }
    OnDemandReport { wrong_stops }
}
