//! Parsing and serde helpers for the instants carried by the data API.
//!
//! The backend emits ISO-8601 strings without a zone (`2025-01-01T00:00:00`),
//! but hand-written fixtures and other producers also use a space separator,
//! drop the seconds, or append an offset. All of them normalize to a
//! [`NaiveDateTime`]; offsets are converted to UTC first.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serializer};
use thiserror::Error;

/// Output format, identical to what the backend produces. Sub-second
/// precision is printed only when present.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid timestamp: {0:?}")]
pub struct TimestampError(pub String);

/// Parses a single timestamp string.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, TimestampError> {
    let raw = raw.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Ok(with_offset.naive_utc());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .ok_or_else(|| TimestampError(raw.to_string()))
}

/// Formats a timestamp the way the backend does.
pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// `#[serde(with = "iso")]` for a single [`NaiveDateTime`].
pub mod iso {
    use super::*;

    pub fn serialize<S: Serializer>(timestamp: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_timestamp(timestamp))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}

/// `#[serde(with = "iso_vec")]` for a `Vec<NaiveDateTime>`.
pub mod iso_vec {
    use super::*;
    use serde::ser::SerializeSeq;

    pub fn serialize<S: Serializer>(timestamps: &[NaiveDateTime], serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(timestamps.len()))?;
        for timestamp in timestamps {
            seq.serialize_element(&format_timestamp(timestamp))?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<NaiveDateTime>, D::Error> {
        Vec::<String>::deserialize(deserializer)?
            .iter()
            .map(|raw| parse_timestamp(raw).map_err(serde::de::Error::custom))
            .collect()
    }
}
