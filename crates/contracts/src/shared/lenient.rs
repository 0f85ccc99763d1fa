//! Serde helpers for spreadsheet-backed JSON.
//!
//! Sheet exports are loosely typed: a numeric column may arrive as `40`,
//! `"40"` or `""`, a checkbox column as `true` or `"TRUE"`. These helpers
//! accept all of them so rows load without a schema pass.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Null(()),
}

/// Number from a JSON number or numeric string; blank or unparsable becomes 0.
pub fn f64_from_any<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawScalar::deserialize(deserializer)? {
        RawScalar::Int(v) => v as f64,
        RawScalar::Float(v) => v,
        RawScalar::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        RawScalar::Bool(_) | RawScalar::Null(()) => 0.0,
    })
}

/// Boolean from a JSON bool, `"true"`/`"false"` (any case) or 0/1.
pub fn bool_from_any<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawScalar::deserialize(deserializer)? {
        RawScalar::Bool(v) => v,
        RawScalar::Int(v) => v != 0,
        RawScalar::Float(v) => v != 0.0,
        RawScalar::Text(s) => matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "yes" | "1"),
        RawScalar::Null(()) => false,
    })
}

/// Text from a JSON string or number. Numbers keep their shortest form,
/// so `3` and `3.0` both become `"3"`.
pub fn string_from_any<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawScalar::deserialize(deserializer)? {
        RawScalar::Text(s) => s,
        RawScalar::Int(v) => v.to_string(),
        RawScalar::Float(v) => format_number(v),
        RawScalar::Bool(v) => v.to_string(),
        RawScalar::Null(()) => String::new(),
    })
}

/// Shortest decimal text for a number: `50.0` -> `"50"`, `4.2` -> `"4.2"`.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
