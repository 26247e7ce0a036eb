//! # Terminal Views
//!
//! Implementations of the core view seams for a terminal session:
//! - `TerminalTable`: collects rows, prints aligned columns or JSON
//! - `TerminalNotifier`: alerts on stdout, errors on stderr
//! - `FileForm`: a file selection given as a path on disk

use std::path::{Path, PathBuf};
use tablero_core::{
    FilePayload, MemoryTable, Notifier, TableBody, TableroError, UploadForm,
    primitives::COLUMNS,
};

// =============================================================================
// TABLE
// =============================================================================

/// Table body printed to the terminal.
#[derive(Debug, Default)]
pub struct TerminalTable {
    inner: MemoryTable,
}

impl TerminalTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aligned text rendering with a header line.
    pub fn render_text(&self) -> String {
        let rows = self.inner.rows();
        let mut widths = COLUMNS.map(|c| c.chars().count());
        for row in rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        out.push_str(&format_line(&COLUMNS.map(String::from), &widths));
        out.push_str(&format_line(&widths.map(|w| "-".repeat(w)), &widths));
        for row in rows {
            out.push_str(&format_line(row, &widths));
        }
        out.push_str(&format!("({} rows)\n", rows.len()));
        out
    }

    /// JSON rendering: an array of objects keyed by column name.
    pub fn render_json(&self) -> serde_json::Value {
        let rows = self
            .inner
            .rows()
            .iter()
            .map(|row| {
                let object: serde_json::Map<String, serde_json::Value> = COLUMNS
                    .iter()
                    .zip(row)
                    .map(|(column, cell)| (column.to_string(), cell.clone().into()))
                    .collect();
                serde_json::Value::Object(object)
            })
            .collect();
        serde_json::Value::Array(rows)
    }
}

fn format_line(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    format!("{}\n", padded.join("  ").trim_end())
}

impl TableBody for TerminalTable {
    fn clear(&mut self) {
        self.inner.clear();
    }

    fn append_row(&mut self, cells: [String; 4]) {
        self.inner.append_row(cells);
    }

    fn row_count(&self) -> usize {
        self.inner.row_count()
    }
}

// =============================================================================
// NOTIFIER
// =============================================================================

/// Alerts go to stdout; errors go to stderr, as a log line or as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier {
    json_mode: bool,
}

impl TerminalNotifier {
    pub fn new(json_mode: bool) -> Self {
        Self { json_mode }
    }
}

impl Notifier for TerminalNotifier {
    fn alert(&self, text: &str) {
        if self.json_mode {
            println!("{}", serde_json::json!({ "alert": text }));
        } else {
            println!("{text}");
        }
    }

    fn show_error(&self, error: &TableroError) {
        if self.json_mode {
            tracing::debug!("{}", error);
            eprintln!("{}", serde_json::json!({ "error": error.to_string() }));
        } else {
            tracing::error!("Error: {}", error);
        }
    }
}

// =============================================================================
// FILE FORM
// =============================================================================

/// Upload form whose selection is a path given on the command line.
#[derive(Debug, Clone, Default)]
pub struct FileForm {
    path: Option<PathBuf>,
}

impl FileForm {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

impl UploadForm for FileForm {
    fn selected_file(&self) -> Result<Option<FilePayload>, TableroError> {
        let Some(path) = &self.path else {
            return Ok(None);
        };

        let validated = validate_file_path(path)?;
        let bytes = std::fs::read(&validated)
            .map_err(|e| TableroError::IoError(format!("Read file: {}", e)))?;
        let file_name = validated
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Some(FilePayload::new(file_name, bytes)))
    }
}

/// Resolve `path` and require it to be an existing regular file.
fn validate_file_path(path: &Path) -> Result<PathBuf, TableroError> {
    let canonical = path.canonicalize().map_err(|e| {
        TableroError::IoError(format!("Invalid file path '{}': {}", path.display(), e))
    })?;

    if !canonical.is_file() {
        return Err(TableroError::IoError(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    Ok(canonical)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn filled_table() -> TerminalTable {
        let mut table = TerminalTable::new();
        table.append_row(["1", "Ana", "ana@x.cl", "95"].map(String::from));
        table.append_row(["12", "Bernardo", "", "7"].map(String::from));
        table
    }

    #[test]
    fn text_rendering_aligns_columns() {
        let text = filled_table().render_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "id  nombre    email     puntaje");
        assert_eq!(lines[2], "1   Ana       ana@x.cl  95");
        assert_eq!(lines[3], "12  Bernardo            7");
        assert_eq!(lines[4], "(2 rows)");
    }

    #[test]
    fn empty_table_renders_header_only() {
        let text = TerminalTable::new().render_text();
        assert_eq!(text.lines().count(), 3);
        assert!(text.ends_with("(0 rows)\n"));
    }

    #[test]
    fn json_rendering_uses_column_keys() {
        let json = filled_table().render_json();
        assert_eq!(json[0]["nombre"], "Ana");
        assert_eq!(json[1]["id"], "12");
        assert_eq!(json.as_array().unwrap().len(), 2);
    }

    #[test]
    fn form_without_selection_yields_none() {
        assert!(FileForm::new(None).selected_file().unwrap().is_none());
    }

    #[test]
    fn form_reads_selected_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registros.xlsx");
        std::fs::write(&path, b"PK\x03\x04").unwrap();

        let file = FileForm::new(Some(path)).selected_file().unwrap().unwrap();
        assert_eq!(file.file_name, "registros.xlsx");
        assert_eq!(file.bytes, b"PK\x03\x04");
    }

    #[test]
    fn form_rejects_missing_and_directory_paths() {
        let dir = tempfile::tempdir().unwrap();
        let missing = FileForm::new(Some(dir.path().join("nope.xlsx")));
        assert!(matches!(missing.selected_file(), Err(TableroError::IoError(_))));

        let directory = FileForm::new(Some(dir.path().to_path_buf()));
        assert!(matches!(directory.selected_file(), Err(TableroError::IoError(_))));
    }
}
