//! Start and finish stop consistency.
//!
//! Every bus line needs exactly one `S` and exactly one `F` stop. The first
//! inconsistent line (in first-seen order) is reported on its own and the
//! scan stops there.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use serde::Serialize;

use super::report::quoted_list;
use crate::dataset::{StopKind, StopRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalReport {
    /// First bus line without exactly one start and one finish stop
    Missing { bus_id: i128 },
    /// Distinct start and finish stop names, sorted
    Consistent {
        starts: Vec<String>,
        finishes: Vec<String>,
    },
}

impl fmt::Display for TerminalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminalReport::Missing { bus_id } => {
                write!(f, "There is no start or end stop for the line: {}.", bus_id)
            }
            TerminalReport::Consistent { starts, finishes } => write!(
                f,
                "Start stops: {} {}.\nFinish stops: {} {}.",
                starts.len(),
                quoted_list(starts),
                finishes.len(),
                quoted_list(finishes)
            ),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct TerminalCounts {
    starts: usize,
    finishes: usize,
}

pub fn check_terminals(records: &[StopRecord]) -> TerminalReport {
    let mut order: Vec<i128> = Vec::new();
    let mut counts: HashMap<i128, TerminalCounts> = HashMap::new();
    let mut starts = BTreeSet::new();
    let mut finishes = BTreeSet::new();

    for record in records {
        let entry = counts.entry(record.bus_id).or_insert_with(|| {
            order.push(record.bus_id);
            TerminalCounts::default()
        });
        match record.kind() {
            StopKind::Start => {
                entry.starts += 1;
                starts.insert(record.stop_name.clone());
            }
            StopKind::Finish => {
                entry.finishes += 1;
                finishes.insert(record.stop_name.clone());
            }
            StopKind::OnDemand | StopKind::Regular => {}
        }
    }

    for bus_id in order {
        let line = counts[&bus_id];
        if line.starts != 1 || line.finishes != 1 {
            log::info!(
                "Bus line {} has {} start and {} finish stops",
                bus_id,
                line.starts,
                line.finishes
            );
            return TerminalReport::Missing { bus_id };
        }
    }

    TerminalReport::Consistent {
        starts: starts.into_iter().collect(),
        finishes: finishes.into_iter().collect(),
    }
}
