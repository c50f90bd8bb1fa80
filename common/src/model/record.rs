//! Resource records as returned by the hosted service.
//!
//! A record is an identifier plus a loosely typed map of field values. The
//! value type mirrors what the service actually sends: JSON scalars, nested
//! references exposing their own `id`, and anything else kept opaque.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A nested reference to another resource (owner, company, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceRef {
    pub id: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Boolean(bool),
    Number(f64),
    Text(String),
    Reference(ResourceRef),
    Other(serde_json::Value),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// The raw string form of a value, as used for option matching and edit drafts.
    pub fn raw_string(&self) -> String {
        match self {
            FieldValue::Null => String::new(),
            FieldValue::Boolean(b) => b.to_string(),
            FieldValue::Number(n) => format_plain_number(*n),
            FieldValue::Text(s) => s.clone(),
            FieldValue::Reference(r) => r.id.clone(),
            FieldValue::Other(v) => v.to_string(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

/// Integers print without a trailing `.0`.
pub(crate) fn format_plain_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceRecord {
    pub id: String,
    #[serde(default)]
    pub fields: BTreeMap<String, FieldValue>,
}

impl ResourceRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn with_field(mut self, field_id: &str, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(field_id.to_string(), value.into());
        self
    }

    /// Returns the value of a field, treating explicit nulls as missing.
    pub fn value(&self, field_id: &str) -> Option<&FieldValue> {
        self.fields.get(field_id).filter(|v| !v.is_null())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_mixed_field_values() {
        let record: ResourceRecord = serde_json::from_str(
            r#"{
                "id": "r1",
                "fields": {
                    "firstName": "Ada",
                    "amount": 1200,
                    "won": true,
                    "closeDate": null,
                    "owner": { "id": "u7", "name": "Grace" },
                    "tags": ["a", "b"]
                }
            }"#,
        )
        .unwrap();

        assert_eq!(record.value("firstName"), Some(&FieldValue::from("Ada")));
        assert_eq!(record.value("amount"), Some(&FieldValue::Number(1200.0)));
        assert_eq!(record.value("won"), Some(&FieldValue::Boolean(true)));
        assert_eq!(record.value("closeDate"), None);
        match record.value("owner") {
            Some(FieldValue::Reference(r)) => assert_eq!(r.id, "u7"),
            other => panic!("expected reference, got {:?}", other),
        }
        assert!(matches!(record.value("tags"), Some(FieldValue::Other(_))));
    }

    #[test]
    fn raw_string_drops_integer_fraction() {
        assert_eq!(FieldValue::Number(42.0).raw_string(), "42");
        assert_eq!(FieldValue::Number(4.5).raw_string(), "4.5");
    }
}
