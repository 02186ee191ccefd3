//! Per-line stop counting.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::dataset::StopRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineStops {
    pub bus_id: i128,
    pub stops: usize,
}

/// Stop counts per bus line, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LineStopsReport {
    pub lines: Vec<LineStops>,
}

impl LineStopsReport {
    pub fn total_stops(&self) -> usize {
        self.lines.iter().map(|line| line.stops).sum()
    }
}

impl fmt::Display for LineStopsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "bus_id: {}, stops: {}", line.bus_id, line.stops)?;
        }
        Ok(())
    }
}

/// Count records per `bus_id`
pub fn count_line_stops(records: &[StopRecord]) -> LineStopsReport {
    let mut lines: Vec<LineStops> = Vec::new();
    let mut positions: HashMap<i128, usize> = HashMap::new();

    for record in records {
        let position = *positions.entry(record.bus_id).or_insert_with(|| {
            lines.push(LineStops {
                bus_id: record.bus_id,
                stops: 0,
            });
            lines.len() - 1
        });
        lines[position].stops += 1;
    }

    log::debug!("Counted {} bus lines", lines.len());
    LineStopsReport { lines }
}
