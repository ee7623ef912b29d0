//! Tolerant deserializers for fields the backend serializes inconsistently.
//!
//! Role flags arrive either as JSON booleans or as the strings `"true"` /
//! `"false"`. Amounts and dashboard counters arrive as numbers, numeric
//! strings or `null`, and optional contact fields may be `null`.
//! These helpers are used through `#[serde(deserialize_with = ...)]` on the
//! models in [`crate::models`].

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Whether a raw JSON value counts as a set role flag.
///
/// Only boolean `true` and the exact string `"true"` are truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => s == "true",
        _ => false,
    }
}

/// Deserialize a role flag, accepting `true` or `"true"`; anything else is `false`.
pub fn loose_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().is_some_and(is_truthy))
}

/// Deserialize an amount from a number, a numeric string, or `null` (zero).
pub fn loose_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}

/// Deserialize a non-negative count, reading `null` or anything unparseable as zero.
pub fn loose_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

/// Deserialize a text field where `null` means empty.
pub fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
