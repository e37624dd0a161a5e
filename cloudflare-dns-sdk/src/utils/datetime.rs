//! Serde helpers for the `created_on` / `modified_on` timestamps.
//!
//! The API sends RFC3339 strings. Unix timestamps (seconds or milliseconds)
//! are accepted too, since some proxies and fixtures rewrite them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Above this, a numeric timestamp is read as milliseconds.
const MILLIS_THRESHOLD: i64 = 100_000_000_000;

pub fn serialize<S>(dt: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match dt {
        Some(dt) => serializer.serialize_some(&dt.to_rfc3339()),
        None => serializer.serialize_none(),
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Timestamp {
        Text(String),
        Unix(i64),
    }

    match Option::<Timestamp>::deserialize(deserializer)? {
        Some(Timestamp::Text(s)) => DateTime::parse_from_rfc3339(&s)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(|e| Error::custom(format!("Invalid RFC3339 timestamp '{s}': {e}"))),
        Some(Timestamp::Unix(ts)) => from_unix(ts)
            .map(Some)
            .ok_or_else(|| Error::custom(format!("Invalid Unix timestamp {ts}"))),
        None => Ok(None),
    }
}

fn from_unix(ts: i64) -> Option<DateTime<Utc>> {
    if ts > MILLIS_THRESHOLD {
        DateTime::from_timestamp_millis(ts)
    } else {
        DateTime::from_timestamp(ts, 0)
    }
}
