//! Cell values and the record capability for bulk loading

use std::borrow::Cow;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A cell value with type information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(Cow<'static, str>),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Convert a JSON value into a cell value
    pub fn from_json(value: &serde_json::Value) -> CellValue {
        use serde_json::Value;

        match value {
            Value::Null => CellValue::Null,
            Value::Bool(b) => CellValue::Bool(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    CellValue::Int(i)
                } else if let Some(f) = n.as_f64() {
                    CellValue::Float(f)
                } else {
                    CellValue::String(Cow::Owned(n.to_string()))
                }
            }
            Value::String(s) => CellValue::parse_text(s),
            // Nested arrays/objects become their compact JSON text
            other => CellValue::String(Cow::Owned(other.to_string())),
        }
    }

    /// Parse text into a date or datetime where it matches the fixed
    /// conventions, otherwise keep it as a string
    pub fn parse_text(s: &str) -> CellValue {
        let trimmed = s.trim();

        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return CellValue::Date(date);
        }

        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
            return CellValue::DateTime(dt);
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
            return CellValue::DateTime(dt);
        }

        CellValue::String(Cow::Owned(s.to_string()))
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(Cow::Owned(s.to_string()))
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(Cow::Owned(s))
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<i32> for CellValue {
    fn from(i: i32) -> Self {
        CellValue::Int(i as i64)
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(d: NaiveDate) -> Self {
        CellValue::Date(d)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(dt: NaiveDateTime) -> Self {
        CellValue::DateTime(dt)
    }
}

impl<T> From<Option<T>> for CellValue
where
    T: Into<CellValue>,
{
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => CellValue::Null,
        }
    }
}

/// Capability interface for self-describing records: a record exposes
/// its fields as ordered (name, value) pairs, which the table builder
/// loads one row at a time.
pub trait Record {
    fn fields(&self) -> Vec<(String, CellValue)>;
}

impl Record for serde_json::Map<String, serde_json::Value> {
    fn fields(&self) -> Vec<(String, CellValue)> {
        self.iter()
            .map(|(name, value)| (name.clone(), CellValue::from_json(value)))
            .collect()
    }
}

impl Record for Vec<(String, CellValue)> {
    fn fields(&self) -> Vec<(String, CellValue)> {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text() {
        assert_eq!(
            CellValue::parse_text("2024-01-01"),
            CellValue::Date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
        );
        assert_eq!(
            CellValue::parse_text("2024-01-01 13:05:09"),
            CellValue::DateTime(
                NaiveDate::from_ymd_opt(2024, 1, 1)
                    .unwrap()
                    .and_hms_opt(13, 5, 9)
                    .unwrap()
            )
        );
        assert_eq!(CellValue::parse_text("hello"), CellValue::from("hello"));
    }

    #[test]
    fn test_from_json() {
        use serde_json::json;

        assert_eq!(CellValue::from_json(&json!(null)), CellValue::Null);
        assert_eq!(CellValue::from_json(&json!(true)), CellValue::Bool(true));
        assert_eq!(CellValue::from_json(&json!(42)), CellValue::Int(42));
        assert_eq!(CellValue::from_json(&json!(3.14)), CellValue::Float(3.14));
        assert_eq!(
            CellValue::from_json(&json!("text")),
            CellValue::from("text")
        );
        assert_eq!(
            CellValue::from_json(&json!([1, 2])),
            CellValue::from("[1,2]")
        );
    }

    #[test]
    fn test_json_record_fields() {
        let value = serde_json::json!({"Name": "Ada", "Age": 36});
        let record = value.as_object().unwrap();
        let fields = record.fields();
        assert_eq!(fields[0], ("Name".to_string(), CellValue::from("Ada")));
        assert_eq!(fields[1], ("Age".to_string(), CellValue::Int(36)));
    }
}
