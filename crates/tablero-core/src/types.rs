//! # Core Type Definitions
//!
//! This module contains the data model shared by every Tablero component:
//! - Dataset records (`Row`, `RowId`)
//! - Upload responses (`UploadOutcome`)
//! - Files selected for upload (`FilePayload`)
//! - Error types (`TableroError`)

use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;
use thiserror::Error;

// =============================================================================
// ROW
// =============================================================================

/// Opaque row identifier.
///
/// The backend assigns it and the client never interprets it. Both numeric
/// and textual identifiers are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    Number(Number),
    Text(String),
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => f.write_str(&number_text(n)),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// One record of the dataset.
///
/// `nombre`, `email` and `puntaje` map to nullable columns on the backend,
/// so each may be absent in a given record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub id: RowId,
    pub nombre: Option<String>,
    pub email: Option<String>,
    pub puntaje: Option<Number>,
}

impl Row {
    /// Render the row as four text cells in `id, nombre, email, puntaje` order.
    ///
    /// Values are emitted verbatim. A null value becomes an empty cell.
    #[must_use]
    pub fn cells(&self) -> [String; 4] {
        [
            self.id.to_string(),
            self.nombre.clone().unwrap_or_default(),
            self.email.clone().unwrap_or_default(),
            self.puntaje.as_ref().map(number_text).unwrap_or_default(),
        ]
    }
}

/// Text of a JSON number as a browser would print it.
///
/// Integers print as-is. Floats print in shortest form without a trailing
/// `.0`, and negative zero prints as `0`.
pub fn number_text(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

// =============================================================================
// UPLOAD OUTCOME
// =============================================================================

/// Result reported by the upload endpoint in its JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// The backend reported an `error`. The dataset was not changed.
    Rejected(String),
    /// The backend reported a `message`. The dataset may have changed.
    Accepted(String),
}

impl UploadOutcome {
    /// Text to present to the user for this outcome.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Rejected(text) | Self::Accepted(text) => text,
        }
    }

    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

// =============================================================================
// FILE PAYLOAD
// =============================================================================

/// A file selected for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePayload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl FilePayload {
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// MIME type guessed from the file extension.
    #[must_use]
    pub fn mime_type(&self) -> String {
        mime_guess::from_path(&self.file_name)
            .first_or_octet_stream()
            .to_string()
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in Tablero.
///
/// Every failure of a network operation ends up here and is shown to the
/// user. Nothing is swallowed.
#[derive(Debug, Error)]
pub enum TableroError {
    /// The backend could not be reached.
    #[error("Cannot connect to {0}")]
    ConnectionFailed(String),

    /// The backend answered with an error status and no usable body.
    #[error("HTTP {status} from {endpoint}: {body}")]
    HttpStatus {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// The response body does not match the expected shape.
    #[error("Malformed response from {endpoint}: {reason}")]
    MalformedResponse { endpoint: String, reason: String },

    /// The backend refused an upload and reported why.
    #[error("Upload rejected: {0}")]
    UploadRejected(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),

    /// The configuration could not be loaded.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl TableroError {
    pub(crate) fn malformed(endpoint: &str, reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            endpoint: endpoint.to_string(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_follow_fixed_column_order() {
        let row = Row {
            id: RowId::Number(Number::from(7_u64)),
            nombre: Some("Ana".to_string()),
            email: Some("ana@example.com".to_string()),
            puntaje: Some(Number::from(95_u64)),
        };
        assert_eq!(row.cells(), ["7", "Ana", "ana@example.com", "95"]);
    }

    #[test]
    fn null_fields_render_as_empty_cells() {
        let row = Row {
            id: RowId::Text("a-1".to_string()),
            nombre: None,
            email: None,
            puntaje: None,
        };
        assert_eq!(row.cells(), ["a-1", "", "", ""]);
    }

    #[test]
    fn markup_is_not_escaped() {
        let row = Row {
            id: RowId::Number(Number::from(1_u64)),
            nombre: Some("<b>Luis</b>".to_string()),
            email: None,
            puntaje: None,
        };
        assert_eq!(row.cells()[1], "<b>Luis</b>");
    }

    #[test]
    fn outcome_text_and_kind() {
        let ok = UploadOutcome::Accepted("OK".to_string());
        let err = UploadOutcome::Rejected("X".to_string());
        assert!(ok.is_accepted());
        assert!(!err.is_accepted());
        assert_eq!(ok.text(), "OK");
        assert_eq!(err.text(), "X");
    }

    #[test]
    fn mime_type_from_extension() {
        assert_eq!(
            FilePayload::new("datos.xlsx", vec![]).mime_type(),
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        );
        assert_eq!(FilePayload::new("datos.csv", vec![]).mime_type(), "text/csv");
        assert_eq!(
            FilePayload::new("datos", vec![]).mime_type(),
            "application/octet-stream"
        );
    }
}
