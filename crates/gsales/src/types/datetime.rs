//! Serde adapter for the service's `YYYY-MM-DD HH:MM:SS` timestamps
//!
//! Empty strings and the zero date `0000-00-00 00:00:00` mean "not set" and
//! decode to `None`.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serializer};

const FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const ZERO_DATE: &str = "0000-00-00 00:00:00";

/// Use with `#[serde(default, with = "crate::types::datetime::optional")]`.
pub mod optional {
    use super::*;

    /// Serialize an optional timestamp, `None` as `null`.
    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(datetime) => serializer.serialize_str(&datetime.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize an optional timestamp.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") | Some(ZERO_DATE) => Ok(None),
            Some(text) => NaiveDateTime::parse_from_str(text, FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
