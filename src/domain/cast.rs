//! Lenient field casts for incoming payloads.
//!
//! Text fields take any scalar (`5` is stored as `"5"`), list fields take a
//! single scalar as a one-element list, and number fields take numeric
//! strings. `null` is the same as an absent field.

use serde::Deserialize;
use serde::de::{Deserializer, Error};
use serde_json::Value;

fn text(value: Value) -> Result<String, String> {
    match value {
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        other => Err(format!("Cast to string failed for value {other}")),
    }
}

fn number(value: Value) -> Result<f64, String> {
    let parsed = match &value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed
        .filter(|amount| amount.is_finite())
        .ok_or_else(|| format!("Cast to Number failed for value {value}"))
}

pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Value>::deserialize(deserializer)?
        .map(text)
        .transpose()
        .map_err(D::Error::custom)
}

pub fn optional_text_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let list = match value {
        Value::Array(values) => values.into_iter().map(text).collect::<Result<Vec<_>, _>>(),
        scalar => text(scalar).map(|single| vec![single]),
    };
    list.map(Some).map_err(D::Error::custom)
}

pub fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Value>::deserialize(deserializer)?
        .map(number)
        .transpose()
        .map_err(D::Error::custom)
}
