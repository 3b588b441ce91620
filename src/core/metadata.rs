use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Provenance of an instance that was read from a partitioned log rather
/// than a flat file.
///
/// Deserializes from a log record envelope whose `timestamp` is in epoch
/// milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RecordMetadata {
    pub topic: String,
    pub partition: i32,
    #[serde(default)]
    pub key: Option<i64>,
    pub offset: i64,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}
