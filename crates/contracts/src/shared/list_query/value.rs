use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Scalar value of a single record field
///
/// Dates arriving as JSON stay `Text`; they are only read as dates when the
/// screen declares the field as `FieldKind::Date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    Date(NaiveDateTime),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Interpret the value as an instant.
    ///
    /// Accepts `Date` values and text in `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS`,
    /// `YYYY-MM-DDTHH:MM:SS` or RFC 3339 (converted to UTC). Anything else is `None`.
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            FieldValue::Date(dt) => Some(*dt),
            FieldValue::Text(s) => parse_datetime(s),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<NaiveDateTime> for FieldValue {
    fn from(value: NaiveDateTime) -> Self {
        FieldValue::Date(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

/// Convert a JSON scalar into a field value.
/// Arrays and objects are kept as their JSON text.
impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => FieldValue::Null,
            serde_json::Value::Bool(b) => FieldValue::Bool(b),
            serde_json::Value::Number(n) => n
                .as_f64()
                .map(FieldValue::Number)
                .unwrap_or(FieldValue::Null),
            serde_json::Value::String(s) => FieldValue::Text(s),
            other => FieldValue::Text(other.to_string()),
        }
    }
}

fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Declared type of a field, supplied by the screen configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    #[default]
    Text,
    Number,
    Boolean,
    Date,
}

/// List record: field name -> value
pub type Record = BTreeMap<String, FieldValue>;

/// Read access to named fields of a list row
pub trait FieldAccess {
    /// Returns the field value, or `None` when the row has no such field
    fn field_value(&self, field: &str) -> Option<FieldValue>;
}

impl FieldAccess for Record {
    fn field_value(&self, field: &str) -> Option<FieldValue> {
        self.get(field).cloned()
    }
}

impl FieldAccess for serde_json::Map<String, serde_json::Value> {
    fn field_value(&self, field: &str) -> Option<FieldValue> {
        self.get(field).cloned().map(FieldValue::from)
    }
}

impl<T: FieldAccess + ?Sized> FieldAccess for &T {
    fn field_value(&self, field: &str) -> Option<FieldValue> {
        (**self).field_value(field)
    }
}

/// Build a record from `(name, value)` pairs
pub fn record<K, V, I>(pairs: I) -> Record
where
    K: Into<String>,
    V: Into<FieldValue>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
