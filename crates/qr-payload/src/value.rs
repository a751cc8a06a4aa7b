//! Field values exposed by host objects.

use std::collections::BTreeMap;

/// A value read from a host object attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// Keyed data such as custom fields.
    Map(BTreeMap<String, FieldValue>),
    /// Another host object (a termination, its device, a site...).
    Related(Related),
}

/// A related host object, rendered by its display name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Related {
    pub display: String,
    pub fields: BTreeMap<String, FieldValue>,
}

impl Related {
    pub fn new(display: impl Into<String>) -> Self {
        Self {
            display: display.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder: attach a field to the related object.
    pub fn with_field(mut self, name: impl Into<String>, value: FieldValue) -> Self {
        self.fields.insert(name.into(), value);
        self
    }
}

impl FieldValue {
    /// Host truthiness: null, false, zero, empty text and empty maps are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Null => false,
            FieldValue::Bool(b) => *b,
            FieldValue::Int(i) => *i != 0,
            FieldValue::Float(f) => *f != 0.0,
            FieldValue::Text(s) => !s.is_empty(),
            FieldValue::Map(m) => !m.is_empty(),
            FieldValue::Related(_) => true,
        }
    }

    /// Render a scalar or related value as text. Maps have no text form.
    pub fn to_text(&self) -> Option<String> {
        match self {
            FieldValue::Null | FieldValue::Map(_) => None,
            FieldValue::Bool(b) => Some(b.to_string()),
            FieldValue::Int(i) => Some(i.to_string()),
            FieldValue::Float(f) => Some(float_text(*f)),
            FieldValue::Text(s) => Some(s.clone()),
            FieldValue::Related(r) => Some(r.display.clone()),
        }
    }
}

/// Whole floats keep a trailing `.0` so `5.0` is not shown as `5`.
fn float_text(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e16 {
        format!("{f:.1}")
    } else {
        f.to_string()
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<Related> for FieldValue {
    fn from(r: Related) -> Self {
        FieldValue::Related(r)
    }
}

/// Read-only attribute access on a host object.
///
/// `None` means the object has no such attribute, which is distinct from
/// an attribute holding [`FieldValue::Null`].
pub trait FieldSource {
    fn field(&self, name: &str) -> Option<FieldValue>;

    fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }
}

impl FieldSource for Related {
    fn field(&self, name: &str) -> Option<FieldValue> {
        self.fields.get(name).cloned()
    }
}

impl FieldSource for BTreeMap<String, FieldValue> {
    fn field(&self, name: &str) -> Option<FieldValue> {
        self.get(name).cloned()
    }
}
