//! # View Seams
//!
//! The page collaborators the controller talks to, expressed as traits so
//! a terminal, a test double or any other surface can stand in for them:
//! - `TableBody`: the rows area of the results table
//! - `Notifier`: blocking alerts and the visible error state
//! - `UploadForm`: the file selection of the upload form
//!
//! `render_rows` is the only place that writes rows into a table body.

use crate::types::{FilePayload, Row, TableroError};

// =============================================================================
// TABLE BODY
// =============================================================================

/// The body of the results table.
pub trait TableBody {
    /// Remove every row.
    fn clear(&mut self);

    /// Append one row of cells at the end.
    fn append_row(&mut self, cells: [String; 4]);

    /// Number of rows currently shown.
    fn row_count(&self) -> usize;
}

/// Replace the whole content of `body` with `rows`, in order.
///
/// Returns the number of rows written.
pub fn render_rows<T: TableBody + ?Sized>(body: &mut T, rows: &[Row]) -> usize {
    body.clear();
    for row in rows {
        body.append_row(row.cells());
    }
    rows.len()
}

/// Table body kept in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryTable {
    rows: Vec<[String; 4]>,
}

impl MemoryTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The rows currently held, in display order.
    #[must_use]
    pub fn rows(&self) -> &[[String; 4]] {
        &self.rows
    }
}

impl TableBody for MemoryTable {
    fn clear(&mut self) {
        self.rows.clear();
    }

    fn append_row(&mut self, cells: [String; 4]) {
        self.rows.push(cells);
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }
}

// =============================================================================
// NOTIFIER
// =============================================================================

/// User-facing feedback.
pub trait Notifier {
    /// Show a blocking alert with `text`.
    fn alert(&self, text: &str);

    /// Put the page into its visible error state.
    fn show_error(&self, error: &TableroError);
}

// =============================================================================
// UPLOAD FORM
// =============================================================================

/// The upload form's file input.
pub trait UploadForm {
    /// The file currently selected, if any.
    ///
    /// `Ok(None)` means nothing was selected, which is not an error.
    fn selected_file(&self) -> Result<Option<FilePayload>, TableroError>;
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RowId;

    fn row(id: u64, nombre: &str) -> Row {
        Row {
            id: RowId::Number(id.into()),
            nombre: Some(nombre.to_string()),
            email: Some(format!("{nombre}@example.com")),
            puntaje: Some(id.into()),
        }
    }

    #[test]
    fn render_into_empty_table() {
        let mut table = MemoryTable::new();
        let written = render_rows(&mut table, &[row(1, "ana"), row(2, "bea")]);
        assert_eq!(written, 2);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows()[1], ["2", "bea", "bea@example.com", "2"]);
    }

    #[test]
    fn render_replaces_previous_content() {
        let mut table = MemoryTable::new();
        render_rows(&mut table, &[row(1, "ana"), row(2, "bea"), row(3, "ciro")]);
        render_rows(&mut table, &[row(9, "zoe")]);
        assert_eq!(table.rows(), &[["9", "zoe", "zoe@example.com", "9"].map(String::from)]);
    }

    #[test]
    fn render_empty_clears() {
        let mut table = MemoryTable::new();
        render_rows(&mut table, &[row(1, "ana")]);
        assert_eq!(render_rows(&mut table, &[]), 0);
        assert_eq!(table.row_count(), 0);
    }
}
