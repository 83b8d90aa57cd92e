use serde_json::Value;

use crate::utils::error::{Error, Result};

/// A typed setter applied to one field during construction.
pub type Setter<T> = fn(&mut T, &Value) -> Result<()>;

/// JSON-object-to-model loading through an explicit field table.
///
/// Each model registers a table of field name → setter. Keys present in the
/// response but absent from the table are skipped silently, so new API
/// fields never break decoding. A setter failure (bad date, unknown tag)
/// fails the whole construction; no partially-populated model escapes.
pub trait Attributes: Default + Sized + 'static {
    const FIELDS: &'static [(&'static str, Setter<Self>)];

    fn from_value(value: &Value) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| {
            Error::MalformedResponse(format!("expected a JSON object, got {value}"))
        })?;

        let mut target = Self::default();
        for (key, raw) in object {
            if let Some((_, setter)) = Self::FIELDS.iter().find(|(name, _)| *name == key.as_str()) {
                setter(&mut target, raw)?;
            }
        }
        Ok(target)
    }
}

// Field coercion helpers shared by the model setters. `null` always reads
// as an absent value; a value of the wrong JSON type is a data error.

pub(crate) fn expect_string(field: &str, value: &Value) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        other => Err(type_error(field, "a string", other)),
    }
}

pub(crate) fn expect_bool(field: &str, value: &Value) -> Result<Option<bool>> {
    match value {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(*b)),
        other => Err(type_error(field, "a boolean", other)),
    }
}

pub(crate) fn expect_u64(field: &str, value: &Value) -> Result<Option<u64>> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_u64()
            .map(Some)
            .ok_or_else(|| type_error(field, "a non-negative integer", value)),
        other => Err(type_error(field, "a non-negative integer", other)),
    }
}

pub(crate) fn expect_f64(field: &str, value: &Value) -> Result<Option<f64>> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => Ok(n.as_f64()),
        other => Err(type_error(field, "a number", other)),
    }
}

pub(crate) fn expect_string_array(field: &str, value: &Value) -> Result<Vec<String>> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .iter()
            .map(|item| {
                expect_string(field, item)?
                    .ok_or_else(|| type_error(field, "an array of strings", value))
            })
            .collect(),
        other => Err(type_error(field, "an array of strings", other)),
    }
}

fn type_error(field: &str, expected: &str, got: &Value) -> Error {
    Error::MalformedResponse(format!("field {field:?} expected {expected}, got {got}"))
}
