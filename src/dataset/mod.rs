//! Stop Dataset
//!
//! Loading of the JSON input and conversion between the loose and the
//! typed record representations.

pub mod error;
pub mod record;

pub use error::DatasetError;
pub use record::{parse_arrival_time, RawRecord, StopKind, StopRecord, REQUIRED_FIELDS};

use std::io::Read;

use serde_json::Value;

/// The full input, read once and never mutated
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<RawRecord>,
}

impl Dataset {
    /// Parse a dataset from JSON text
    pub fn from_json_str(input: &str) -> Result<Self, DatasetError> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_value(value)
    }

    /// Parse a dataset from any reader (stdin, a file)
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let value: Value = serde_json::from_reader(reader)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, DatasetError> {
        let Value::Array(items) = value else {
            return Err(DatasetError::NotAnArray);
        };

        let records = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(fields) => RawRecord::new(index, fields),
                _ => Err(DatasetError::NotAnObject { index }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!("Loaded dataset with {} records", records.len());
        Ok(Self { records })
    }

    pub fn raw_records(&self) -> &[RawRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Convert every record into its typed form, in input order.
    ///
    /// Fails on the first record whose fields have the wrong JSON type.
    pub fn stop_records(&self) -> Result<Vec<StopRecord>, DatasetError> {
        self.records.iter().map(RawRecord::to_stop_record).collect()
    }
}
