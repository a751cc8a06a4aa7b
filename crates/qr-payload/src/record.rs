//! JSON-backed host object.
//!
//! Accepts the shape of a host REST representation: nested objects with a
//! `display` key are related objects, other nested objects are plain maps.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::value::{FieldSource, FieldValue, Related};

/// A host object snapshot built from a JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set a field.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Convert a JSON value. Returns `None` unless it is an object.
    pub fn from_json(value: &Value) -> Option<Self> {
        let Value::Object(map) = value else {
            return None;
        };
        let fields = map
            .iter()
            .filter_map(|(k, v)| convert(v).map(|fv| (k.clone(), fv)))
            .collect();
        Some(Self { fields })
    }
}

fn convert(value: &Value) -> Option<FieldValue> {
    match value {
        Value::Null => Some(FieldValue::Null),
        Value::Bool(b) => Some(FieldValue::Bool(*b)),
        Value::Number(n) => n
            .as_i64()
            .map(FieldValue::Int)
            .or_else(|| n.as_f64().map(FieldValue::Float)),
        Value::String(s) => Some(FieldValue::Text(s.clone())),
        Value::Array(_) => None,
        Value::Object(map) => {
            let fields: BTreeMap<String, FieldValue> = map
                .iter()
                .filter_map(|(k, v)| convert(v).map(|fv| (k.clone(), fv)))
                .collect();
            match map.get("display").and_then(Value::as_str) {
                Some(display) => Some(FieldValue::Related(Related {
                    display: display.to_string(),
                    fields,
                })),
                None => Some(FieldValue::Map(fields)),
            }
        }
    }
}

impl FieldSource for Record {
    fn field(&self, name: &str) -> Option<FieldValue> {
        self.fields.get(name).cloned()
    }
}
