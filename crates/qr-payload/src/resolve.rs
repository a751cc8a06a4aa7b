//! Best-effort resolution of configured field names.

use tracing::debug;

use crate::error::ResolveError;
use crate::value::{FieldSource, FieldValue};

/// Field rendered together with its unit attribute.
pub const LENGTH_FIELD: &str = "length";
const LENGTH_UNIT_FIELD: &str = "length_unit";

/// Cable ends, rendered as `<device> <termination>`.
pub const TERMINATION_FIELDS: &[&str] = &["termination_a", "termination_b"];

/// A configured field name, optionally qualified with a sub-key
/// (`custom_fields.asset_tag`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRef<'a> {
    pub attribute: &'a str,
    pub key: Option<&'a str>,
}

impl<'a> FieldRef<'a> {
    /// Split on the first `.`. An empty sub-key or a second `.` makes the
    /// reference malformed, in which case it is treated as a plain attribute.
    pub fn parse(name: &'a str) -> Self {
        match name.split_once('.') {
            Some((attribute, key)) if !key.is_empty() && !key.contains('.') => Self {
                attribute,
                key: Some(key),
            },
            Some((attribute, "")) => Self {
                attribute,
                key: None,
            },
            _ => Self {
                attribute: name,
                key: None,
            },
        }
    }
}

/// Resolve one field reference against a host object.
///
/// `Ok(None)` means the attribute is absent or falsy. `Err` means it exists
/// but has a shape the reference cannot use.
pub fn resolve<S>(source: &S, field: &FieldRef<'_>) -> Result<Option<String>, ResolveError>
where
    S: FieldSource + ?Sized,
{
    let Some(value) = source.field(field.attribute).filter(FieldValue::is_truthy) else {
        return Ok(None);
    };

    if let Some(key) = field.key {
        return match value {
            FieldValue::Map(map) => Ok(map
                .get(key)
                .filter(|v| v.is_truthy())
                .and_then(FieldValue::to_text)),
            _ => Err(ResolveError::NotAMapping {
                field: field.attribute.to_string(),
                key: key.to_string(),
            }),
        };
    }

    if field.attribute == LENGTH_FIELD {
        return render_length(source, &value).map(Some);
    }
    if TERMINATION_FIELDS.contains(&field.attribute) {
        return render_termination(field.attribute, &value).map(Some);
    }

    value
        .to_text()
        .map(Some)
        .ok_or_else(|| ResolveError::NotScalar {
            field: field.attribute.to_string(),
        })
}

fn render_length<S>(source: &S, value: &FieldValue) -> Result<String, ResolveError>
where
    S: FieldSource + ?Sized,
{
    let length = value.to_text().ok_or_else(|| ResolveError::NotScalar {
        field: LENGTH_FIELD.to_string(),
    })?;
    let unit = source
        .field(LENGTH_UNIT_FIELD)
        .filter(FieldValue::is_truthy)
        .and_then(|u| u.to_text());
    match unit {
        Some(unit) => Ok(format!("{length} {unit}")),
        None => {
            debug!("length has no unit, rendering bare value");
            Ok(length)
        }
    }
}

fn render_termination(name: &str, value: &FieldValue) -> Result<String, ResolveError> {
    let missing = || ResolveError::MissingRelation {
        field: name.to_string(),
        relation: "device",
    };
    let FieldValue::Related(termination) = value else {
        return Err(missing());
    };
    let device = termination
        .field("device")
        .filter(FieldValue::is_truthy)
        .and_then(|d| d.to_text())
        .ok_or_else(missing)?;
    Ok(format!("{device} {}", termination.display))
}
