//! Stop record types.
//!
//! Two representations of the same record:
//! - `RawRecord`: the untyped JSON object, used by type validation
//! - `StopRecord`: the typed record every later pass works on

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::DatasetError;

/// Keys every record must carry, in report order.
pub const REQUIRED_FIELDS: [&str; 6] = [
    "bus_id",
    "stop_id",
    "stop_name",
    "next_stop",
    "stop_type",
    "a_time",
];

static NULL: Value = Value::Null;

/// A stop record before any type enforcement.
///
/// Construction guarantees that all `REQUIRED_FIELDS` are present, so
/// field lookups never fail; the values may still have any JSON type.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    index: usize,
    fields: Map<String, Value>,
}

impl RawRecord {
    /// Wrap a JSON object, checking that every required key is present.
    pub fn new(index: usize, fields: Map<String, Value>) -> Result<Self, DatasetError> {
        if let Some(&field) = REQUIRED_FIELDS
            .iter()
            .find(|field| !fields.contains_key(**field))
        {
            return Err(DatasetError::MissingField { index, field });
        }
        Ok(Self { index, fields })
    }

    /// Position of this record in the input array
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn field(&self, name: &str) -> &Value {
        self.fields.get(name).unwrap_or(&NULL)
    }

    /// Convert into a typed record
    pub fn to_stop_record(&self) -> Result<StopRecord, DatasetError> {
        StopRecord::deserialize(&Value::Object(self.fields.clone())).map_err(|source| {
            DatasetError::InvalidRecord {
                index: self.index,
                source,
            }
        })
    }
}

/// One typed entry of a bus line.
///
/// Ids are `i128` so that any JSON integer, signed or unsigned 64-bit,
/// converts without loss.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StopRecord {
    pub bus_id: i128,
    pub stop_id: i128,
    pub stop_name: String,
    pub next_stop: i128,
    pub stop_type: String,
    pub a_time: String,
}

/// Role a stop plays on its line, derived from `stop_type`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopKind {
    Start,
    Finish,
    OnDemand,
    /// Blank, `T`, or anything unrecognised
    Regular,
}

impl StopKind {
    pub fn from_code(code: &str) -> Self {
        match code {
            "S" => StopKind::Start,
            "F" => StopKind::Finish,
            "O" => StopKind::OnDemand,
            _ => StopKind::Regular,
        }
    }
}

impl StopRecord {
    pub fn kind(&self) -> StopKind {
        StopKind::from_code(&self.stop_type)
    }

    /// Parse `a_time` as a 24-hour time of day.
    ///
    /// `index` is only used to locate the record in the error.
    pub fn arrival_time(&self, index: usize) -> Result<NaiveTime, DatasetError> {
        parse_arrival_time(&self.a_time).ok_or_else(|| DatasetError::InvalidTime {
            index,
            value: self.a_time.clone(),
        })
    }
}

/// Parse an "HH:MM" string into a time of day
pub fn parse_arrival_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn test_raw_record_missing_field() {
        let fields = object(json!({
            "bus_id": 128, "stop_id": 1, "stop_name": "Prospekt Avenue",
            "next_stop": 3, "stop_type": "S"
        }));
        let err = RawRecord::new(4, fields).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::MissingField {
                index: 4,
                field: "a_time"
            }
        ));
    }

    #[test]
    fn test_raw_record_to_stop_record() {
        let fields = object(json!({
            "bus_id": 128, "stop_id": 1, "stop_name": "Prospekt Avenue",
            "next_stop": 3, "stop_type": "S", "a_time": "08:12"
        }));
        let record = RawRecord::new(0, fields).unwrap().to_stop_record().unwrap();
        assert_eq!(record.bus_id, 128);
        assert_eq!(record.stop_name, "Prospekt Avenue");
        assert_eq!(record.kind(), StopKind::Start);
    }

    #[test]
    fn test_raw_record_wrong_type_is_invalid() {
        let fields = object(json!({
            "bus_id": "128", "stop_id": 1, "stop_name": "Prospekt Avenue",
            "next_stop": 3, "stop_type": "S", "a_time": "08:12"
        }));
        let err = RawRecord::new(2, fields).unwrap().to_stop_record().unwrap_err();
        assert!(matches!(err, DatasetError::InvalidRecord { index: 2, .. }));
    }

    #[test]
    fn test_raw_record_accepts_full_unsigned_range() {
        let fields = object(json!({
            "bus_id": 18446744073709551615u64, "stop_id": -1, "stop_name": "Prospekt Avenue",
            "next_stop": 3, "stop_type": "S", "a_time": "08:12"
        }));
        let record = RawRecord::new(0, fields).unwrap().to_stop_record().unwrap();
        assert_eq!(record.bus_id, u64::MAX as i128);
        assert_eq!(record.stop_id, -1);
    }

    #[test]
    fn test_stop_kind_from_code() {
        assert_eq!(StopKind::from_code("S"), StopKind::Start);
        assert_eq!(StopKind::from_code("F"), StopKind::Finish);
        assert_eq!(StopKind::from_code("O"), StopKind::OnDemand);
        assert_eq!(StopKind::from_code(""), StopKind::Regular);
        assert_eq!(StopKind::from_code("T"), StopKind::Regular);
    }

    #[test]
    fn test_parse_arrival_time() {
        assert_eq!(
            parse_arrival_time("08:15"),
            NaiveTime::from_hms_opt(8, 15, 0)
        );
        assert_eq!(parse_arrival_time("24:00"), None);
        assert_eq!(parse_arrival_time("noon"), None);
    }
}
