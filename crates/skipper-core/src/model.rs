//! # Model Capability
//!
//! A model is a domain value that can be built from a JSON object taken out of
//! an API envelope. The envelope decoder is generic over [`Model`], so asking
//! it to decode a type without this capability does not compile.
//!
//! Field extraction follows one rule: a required field that is absent or holds
//! the wrong primitive type is a [`DecodeError::MissingField`] naming both the
//! model and the field.

use crate::error::DecodeError;
use serde_json::{Map, Value};

/// JSON object as handed to [`Model::from_json`]
pub type JsonObject = Map<String, Value>;

/// Capability: construct `Self` from a parsed JSON object.
pub trait Model: Sized {
    /// Type name reported in decode errors
    const NAME: &'static str;

    /// Build the model from a JSON object.
    fn from_json(object: &JsonObject) -> Result<Self, DecodeError>;

    /// Build the model from any JSON value, rejecting non-objects.
    fn from_value(value: &Value) -> Result<Self, DecodeError> {
        let object = value
            .as_object()
            .ok_or(DecodeError::NotAnObject { model: Self::NAME })?;
        Self::from_json(object)
    }
}

pub(crate) fn required_str(
    object: &JsonObject,
    model: &'static str,
    field: &'static str,
) -> Result<String, DecodeError> {
    object
        .get(field)
        .and_then(|v| v.as_str())
        .map(String::from)
        .ok_or_else(|| DecodeError::missing(model, field))
}

pub(crate) fn required_i64(
    object: &JsonObject,
    model: &'static str,
    field: &'static str,
) -> Result<i64, DecodeError> {
    object
        .get(field)
        .and_then(|v| v.as_i64())
        .ok_or_else(|| DecodeError::missing(model, field))
}

pub(crate) fn required_f64(
    object: &JsonObject,
    model: &'static str,
    field: &'static str,
) -> Result<f64, DecodeError> {
    object
        .get(field)
        .and_then(|v| v.as_f64())
        .ok_or_else(|| DecodeError::missing(model, field))
}

pub(crate) fn required_object(
    object: &JsonObject,
    model: &'static str,
    field: &'static str,
) -> Result<JsonObject, DecodeError> {
    object
        .get(field)
        .and_then(|v| v.as_object())
        .cloned()
        .ok_or_else(|| DecodeError::missing(model, field))
}

/// Absent and `null` are both `None`; any other non-integer is an error.
pub(crate) fn optional_i64(
    object: &JsonObject,
    model: &'static str,
    field: &'static str,
) -> Result<Option<i64>, DecodeError> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v
            .as_i64()
            .map(Some)
            .ok_or_else(|| DecodeError::missing(model, field)),
    }
}

/// Opaque passthrough; absent and `null` are both `None`.
pub(crate) fn optional_value(object: &JsonObject, field: &str) -> Option<Value> {
    match object.get(field) {
        None | Some(Value::Null) => None,
        Some(v) => Some(v.clone()),
    }
}
