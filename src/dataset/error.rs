//! Dataset error types.
//!
//! These are fatal input errors: the dataset is malformed and a pass
//! cannot run. Rule violations found by a pass are reports, not errors.

/// Errors raised while loading or typing a stop dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// Input is not valid JSON
    #[error("input is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Top-level JSON value is not an array
    #[error("input must be a JSON array of stop records")]
    NotAnArray,

    /// An array element is not a JSON object
    #[error("record {index} is not a JSON object")]
    NotAnObject { index: usize },

    /// A required key is absent from a record
    #[error("record {index} is missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    /// A record could not be converted into a typed stop record
    #[error("record {index} has an ill-typed field: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    /// Arrival time is not a valid HH:MM time of day
    #[error("record {index} has an unparseable arrival time {value:?}")]
    InvalidTime { index: usize, value: String },
}

impl DatasetError {
    /// Whether the error only stops the check that raised it.
    ///
    /// Load and typing errors leave no usable records, so every later
    /// check would fail the same way.
    pub fn is_check_local(&self) -> bool {
        matches!(self, DatasetError::InvalidTime { .. })
    }
}
