//! Lenient serde helpers for seed payloads
//!
//! The seed document is not under our control: fields may be `null` and
//! dates may arrive as RFC 3339 strings, naive timestamps or epoch millis.
//! A value we cannot interpret becomes "absent" instead of failing the load.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Deserialize any `Default` value, treating `null` as the default
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

/// Parse a sale date the way the seed source writes them.
///
/// Accepted forms, in order:
/// - RFC 3339 with offset (`2021-11-27T20:29:54+05:30`)
/// - naive date-time, read as UTC (`2021-11-27T20:29:54`, optional fraction)
/// - plain date, midnight UTC (`2021-11-27`)
pub fn parse_sale_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// `Option<DateTime<Utc>>` as an RFC 3339 string (millisecond precision, `Z`)
pub mod lenient_datetime {
    use super::*;

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => s.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(match raw {
            Some(serde_json::Value::String(s)) => parse_sale_date(&s),
            // epoch milliseconds
            Some(serde_json::Value::Number(n)) => n
                .as_i64()
                .and_then(DateTime::<Utc>::from_timestamp_millis),
            _ => None,
        })
    }
}
