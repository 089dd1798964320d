//! Field values used for repository search

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A polymorphic field value that can hold different types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Uuid(Uuid),
    Date(NaiveDate),
    Null,
}

impl FieldValue {
    /// Get the value as a string if possible
    pub fn as_string(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as an integer if possible
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the value as a UUID if possible
    pub fn as_uuid(&self) -> Option<Uuid> {
        match self {
            FieldValue::Uuid(u) => Some(*u),
            _ => None,
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Compare against a raw search string.
    ///
    /// Strings match case-insensitively, numbers and booleans match on their
    /// parsed value, dates on their ISO form.
    pub fn matches(&self, raw: &str) -> bool {
        let raw = raw.trim();
        match self {
            FieldValue::String(s) => s.trim().eq_ignore_ascii_case(raw),
            FieldValue::Integer(i) => raw.parse::<i64>().is_ok_and(|v| v == *i),
            FieldValue::Float(f) => raw
                .parse::<f64>()
                .is_ok_and(|v| (v - f).abs() < f64::EPSILON),
            FieldValue::Boolean(b) => raw.parse::<bool>().is_ok_and(|v| v == *b),
            FieldValue::Uuid(u) => Uuid::parse_str(raw).is_ok_and(|v| v == *u),
            FieldValue::Date(d) => raw.parse::<NaiveDate>().is_ok_and(|v| v == *d),
            FieldValue::Null => raw.is_empty() || raw.eq_ignore_ascii_case("null"),
        }
    }
}
