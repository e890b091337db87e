//! Open property bags and their display coercion.
//!
//! Record properties arrive as arbitrary JSON scalars. [`PropertyValue`]
//! keeps them as a closed set of variants so display conversion is
//! exhaustive, with [`PropertyValue::Other`] preserving anything else the
//! server may send.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// A property bag keyed by property name.
pub type PropertyMap = BTreeMap<String, PropertyValue>;

/// A single property value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    /// Arrays, objects, or anything else not covered above.
    Other(Value),
}

impl PropertyValue {
    pub fn is_null(&self) -> bool {
        matches!(self, PropertyValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Render this value as a display string.
    ///
    /// - `Null` renders as the empty string.
    /// - Booleans render as `true`/`false`.
    /// - Numbers use the shortest decimal form that round-trips, without
    ///   exponent notation; integral floats drop the decimal point.
    /// - Anything else renders as compact JSON.
    pub fn to_display_string(&self) -> String {
        match self {
            PropertyValue::Null => String::new(),
            PropertyValue::Bool(b) => b.to_string(),
            PropertyValue::Number(n) => format_number(n),
            PropertyValue::String(s) => s.clone(),
            PropertyValue::Other(v) => v.to_string(),
        }
    }
}

fn format_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        // f64's Display never uses exponent notation and prints the shortest
        // representation that parses back to the same value.
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

impl From<Value> for PropertyValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => PropertyValue::Null,
            Value::Bool(b) => PropertyValue::Bool(b),
            Value::Number(n) => PropertyValue::Number(n),
            Value::String(s) => PropertyValue::String(s),
            other => PropertyValue::Other(other),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::String(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Number(value.into())
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Number::from_f64(value)
            .map(PropertyValue::Number)
            .unwrap_or(PropertyValue::Null)
    }
}

/// Render an optional value; a missing value renders as the empty string.
pub fn stringify(value: Option<&PropertyValue>) -> String {
    value.map(PropertyValue::to_display_string).unwrap_or_default()
}

/// Render the property `key` from `properties`; missing keys render as `""`.
pub fn property_string(properties: &PropertyMap, key: &str) -> String {
    stringify(properties.get(key))
}

/// Parse `key=value` pairs into a property map.
///
/// Values are kept as strings, which is how the API expects property
/// writes.
pub fn parse_assignments<I, S>(pairs: I) -> Result<PropertyMap, crate::error::InvalidInputError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    pairs
        .into_iter()
        .map(|pair| {
            let pair = pair.as_ref();
            match pair.split_once('=') {
                Some((key, value)) if !key.trim().is_empty() => {
                    Ok((key.trim().to_string(), PropertyValue::from(value)))
                }
                _ => Err(crate::error::InvalidInputError::Other {
                    message: format!("expected key=value, got '{}'", pair),
                }),
            }
        })
        .collect()
}
