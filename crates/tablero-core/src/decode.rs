//! # Response Decoding
//!
//! Validated decoding of the two JSON payloads the backend returns.
//!
//! Both decoders check the payload shape before anything reaches a view.
//! A mismatch comes back as `TableroError::MalformedResponse` naming the
//! endpoint and the first offending element.

use crate::primitives::{COLUMNS, DATA_PATH, UPLOAD_PATH};
use crate::types::{Row, RowId, TableroError, UploadOutcome};
use serde_json::{Map, Value};

// =============================================================================
// DATASET
// =============================================================================

/// Decode a `/data` body into rows, preserving the backend's order.
///
/// Every element must be an object carrying all four columns:
/// - `id`: number or string
/// - `nombre`, `email`: string or null
/// - `puntaje`: number or null
pub fn decode_rows(body: &[u8]) -> Result<Vec<Row>, TableroError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| TableroError::malformed(DATA_PATH, format!("invalid JSON: {e}")))?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(TableroError::malformed(
                DATA_PATH,
                format!("expected an array, got {}", kind_of(&other)),
            ));
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| decode_row(index, item))
        .collect()
}

fn decode_row(index: usize, item: Value) -> Result<Row, TableroError> {
    let mut fields = match item {
        Value::Object(fields) => fields,
        other => {
            return Err(TableroError::malformed(
                DATA_PATH,
                format!("row {index}: expected an object, got {}", kind_of(&other)),
            ));
        }
    };

    if let Some(missing) = COLUMNS.iter().find(|column| !fields.contains_key(**column)) {
        return Err(TableroError::malformed(
            DATA_PATH,
            format!("row {index}: missing field `{missing}`"),
        ));
    }

    let id = match take(&mut fields, "id") {
        Value::Number(n) => RowId::Number(n),
        Value::String(s) => RowId::Text(s),
        other => {
            return Err(TableroError::malformed(
                DATA_PATH,
                format!("row {index}: `id` must be a number or string, got {}", kind_of(&other)),
            ));
        }
    };

    let nombre = optional_text(index, "nombre", take(&mut fields, "nombre"))?;
    let email = optional_text(index, "email", take(&mut fields, "email"))?;

    let puntaje = match take(&mut fields, "puntaje") {
        Value::Null => None,
        Value::Number(n) => Some(n),
        other => {
            return Err(TableroError::malformed(
                DATA_PATH,
                format!("row {index}: `puntaje` must be a number, got {}", kind_of(&other)),
            ));
        }
    };

    Ok(Row {
        id,
        nombre,
        email,
        puntaje,
    })
}

fn optional_text(index: usize, field: &str, value: Value) -> Result<Option<String>, TableroError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        other => Err(TableroError::malformed(
            DATA_PATH,
            format!("row {index}: `{field}` must be a string, got {}", kind_of(&other)),
        )),
    }
}

fn take(fields: &mut Map<String, Value>, key: &str) -> Value {
    fields.remove(key).unwrap_or(Value::Null)
}

// =============================================================================
// UPLOAD OUTCOME
// =============================================================================

/// Decode an `/upload` body.
///
/// `error` is checked first: any truthy value means rejection, whatever
/// else the object holds. Otherwise a non-null `message` means acceptance.
pub fn decode_upload_outcome(body: &[u8]) -> Result<UploadOutcome, TableroError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| TableroError::malformed(UPLOAD_PATH, format!("invalid JSON: {e}")))?;

    let fields = match value {
        Value::Object(fields) => fields,
        other => {
            return Err(TableroError::malformed(
                UPLOAD_PATH,
                format!("expected an object, got {}", kind_of(&other)),
            ));
        }
    };

    if let Some(error) = fields.get("error").filter(|v| is_truthy(v)) {
        return Ok(UploadOutcome::Rejected(display_text(error)));
    }

    match fields.get("message") {
        Some(message) if !message.is_null() => Ok(UploadOutcome::Accepted(display_text(message))),
        _ => Err(TableroError::malformed(
            UPLOAD_PATH,
            "neither `error` nor `message` present",
        )),
    }
}

/// Truthiness as a dynamic client would judge the value.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// =============================================================================
// TESTS
// =============================================================================
