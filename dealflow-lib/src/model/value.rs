//! Lax raw field values

use serde::Deserialize;
use serde::Serialize;

/// A raw field value as delivered by the API.
///
/// The backend is not strict about field types: an AUM may arrive as a number,
/// a numeric string or `null` depending on which import produced the record.
/// `RawValue` keeps whatever was sent so that the formatters can decide how to
/// display it, falling back to a placeholder instead of failing.
///
/// # Example
///
/// ```
/// use dealflow_lib::model::RawValue;
///
/// let aum: RawValue = serde_json::from_str("\"2500\"").unwrap();
/// assert_eq!(aum.as_f64(), Some(2500.0));
///
/// let missing: RawValue = serde_json::from_str("null").unwrap();
/// assert!(missing.is_blank());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum RawValue {
    /// Null/empty value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Any JSON number.
    Number(f64),
    /// String value.
    Text(String),
    /// Fallback for objects and arrays.
    Json(serde_json::Value),
}

impl RawValue {
    /// Returns `true` if the value carries nothing displayable.
    ///
    /// Null, empty or whitespace-only strings, and the `"null"` /
    /// `"undefined"` sentinels some imports write count as blank.
    pub fn is_blank(&self) -> bool {
        match self {
            RawValue::Null => true,
            RawValue::Text(s) => is_sentinel(s),
            _ => false,
        }
    }

    /// Returns the value as a number, parsing numeric strings.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RawValue::Number(n) if n.is_finite() => Some(*n),
            RawValue::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        }
    }

    /// Returns the string slice if this is a text value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            RawValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            RawValue::Null => "null",
            RawValue::Bool(_) => "bool",
            RawValue::Number(_) => "number",
            RawValue::Text(_) => "text",
            RawValue::Json(_) => "json",
        }
    }
}

/// Deserializes an identifier sent either as a string or as a number.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match RawValue::deserialize(deserializer)? {
        RawValue::Null => Ok(String::new()),
        RawValue::Json(v) => Err(serde::de::Error::custom(format!("invalid id: {}", v))),
        other => Ok(other.to_string()),
    }
}

/// Deserializes a text field, accepting numbers and booleans as text.
///
/// Objects and arrays cannot be displayed as text and decode as `None`.
pub(crate) fn deserialize_lax_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match RawValue::deserialize(deserializer)? {
        RawValue::Null | RawValue::Json(_) => None,
        other => Some(other.to_string()),
    })
}

/// Deserializes a flag; anything but `true` or `"true"` is `false`.
pub(crate) fn deserialize_lax_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match RawValue::deserialize(deserializer)? {
        RawValue::Bool(b) => b,
        RawValue::Text(s) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    })
}

/// Returns `true` for strings the backend uses to mean "no value".
///
/// Case-insensitive: imports write `null`, `NULL` and `Null` alike.
pub(crate) fn is_sentinel(s: &str) -> bool {
    let s = s.trim();
    s.is_empty()
        || s == "-"
        || s.eq_ignore_ascii_case("null")
        || s.eq_ignore_ascii_case("undefined")
}

impl std::fmt::Display for RawValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawValue::Null => Ok(()),
            RawValue::Bool(b) => write!(f, "{}", b),
            RawValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            RawValue::Number(n) => write!(f, "{}", n),
            RawValue::Text(s) => f.write_str(s),
            RawValue::Json(v) => write!(f, "{}", v),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for RawValue {
    fn from(v: bool) -> Self {
        RawValue::Bool(v)
    }
}

impl From<i32> for RawValue {
    fn from(v: i32) -> Self {
        RawValue::Number(v as f64)
    }
}

impl From<i64> for RawValue {
    fn from(v: i64) -> Self {
        RawValue::Number(v as f64)
    }
}

impl From<u32> for RawValue {
    fn from(v: u32) -> Self {
        RawValue::Number(v as f64)
    }
}

impl From<f64> for RawValue {
    fn from(v: f64) -> Self {
        RawValue::Number(v)
    }
}

impl From<String> for RawValue {
    fn from(v: String) -> Self {
        RawValue::Text(v)
    }
}

impl From<&str> for RawValue {
    fn from(v: &str) -> Self {
        RawValue::Text(v.to_string())
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => RawValue::Null,
        }
    }
}
