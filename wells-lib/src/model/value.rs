//! Value enum for dynamic field values

use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

/// A dynamic value held by a [`Record`](super::Record) field.
///
/// The upstream API is loosely typed: well counts arrive as JSON strings
/// (`"3547"`) on some rows and as numbers on others. Every numeric comparison
/// goes through [`Value::as_number`] so the coercion rules live in one place.
///
/// | JSON | Variant |
/// |------|---------|
/// | `null` | `Null` |
/// | integer | `Integer` |
/// | other number | `Number` |
/// | string | `Text` |
/// | bool, array, object | `Json` |
///
/// # Example
///
/// ```
/// use wells_lib::model::Value;
///
/// assert_eq!(Value::from("123.0").as_number(), 123.0);
/// assert_eq!(Value::from("abc").as_number(), 0.0);
/// assert_eq!(Value::from(7).as_number(), 7.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Null/empty value.
    #[default]
    Null,
    /// Integral value, written back without a fraction.
    Integer(i64),
    /// Floating-point value.
    Number(f64),
    /// Textual value, possibly holding a number.
    Text(String),
    /// Fallback for booleans, arrays and objects.
    Json(serde_json::Value),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Coerces the value to a number, never failing.
    ///
    /// Text is trimmed and parsed as a float; anything unparseable is `0`.
    /// Null, arrays and objects are `0`; booleans are `1` or `0`.
    pub fn as_number(&self) -> f64 {
        match self {
            Value::Integer(i) => *i as f64,
            Value::Number(n) => *n,
            Value::Text(s) => s.trim().parse().unwrap_or(0.0),
            Value::Json(serde_json::Value::Bool(b)) => f64::from(u8::from(*b)),
            Value::Json(serde_json::Value::Number(n)) => n.as_f64().unwrap_or(0.0),
            Value::Null | Value::Json(_) => 0.0,
        }
    }

    /// Returns the text if this is a `Text` value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    /// Formats the value as a flat cell, the way it appears in CSV and XML output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => f.write_str(s),
            Value::Json(v) => write!(f, "{}", v),
        }
    }
}

// =============================================================================
// Serde
// =============================================================================

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Json(v) => v.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Number(n) => match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => Value::Integer(i),
                (None, Some(f)) if n.is_f64() => Value::Number(f),
                // u64 beyond i64::MAX stays exact.
                _ => Value::Json(serde_json::Value::Number(n)),
            },
            serde_json::Value::String(s) => Value::Text(s),
            other => Value::Json(other),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}
