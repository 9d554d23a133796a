//! Lenient field decoders
//!
//! The service is loose about scalar types: numbers may arrive as strings and
//! required text attributes may arrive as `null`.

use serde::{Deserialize, Deserializer};

/// Decode an optional number given as a JSON number or a numeric string.
///
/// `null` and empty strings are `None`.
///
/// Use with `#[serde(default, deserialize_with = "crate::types::lenient::optional_number")]`.
pub fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(number)) => Ok(Some(number)),
        Some(Raw::Text(text)) => match text.trim() {
            "" => Ok(None),
            trimmed => trimmed.parse().map(Some).map_err(|_| {
                serde::de::Error::custom(format!("invalid number string: {text:?}"))
            }),
        },
    }
}

/// Decode a text attribute, `null` as the empty string.
///
/// Use with `#[serde(default, deserialize_with = "crate::types::lenient::string_or_default")]`.
pub fn string_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
