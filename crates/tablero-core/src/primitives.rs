//! # Wire Contract Primitives
//!
//! Fixed paths and field names of the backend contract this client assumes.
//!
//! These are compiled into the binary. Only the base URL is configurable.

/// Data endpoint: returns the full dataset as a JSON array of rows.
pub const DATA_PATH: &str = "/data";

/// Upload endpoint: accepts a multipart body and answers with a JSON outcome.
pub const UPLOAD_PATH: &str = "/upload";

/// Download endpoint: returns the dataset as a spreadsheet export.
pub const DOWNLOAD_PATH: &str = "/download";

/// Multipart field name carrying the uploaded file.
pub const UPLOAD_FIELD: &str = "file";

/// Column order of every rendered row.
///
/// Cells are always emitted in this order, whatever the key order of the
/// JSON object the row was decoded from.
pub const COLUMNS: [&str; 4] = ["id", "nombre", "email", "puntaje"];
