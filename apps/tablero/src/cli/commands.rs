//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use super::CommandError;
use crate::client::{Backend, TableroClient};
use crate::config::ClientConfig;
use crate::controller::{PageController, SubmitOutcome};
use crate::terminal::{FileForm, TerminalNotifier, TerminalTable};
use std::path::{Path, PathBuf};
use tablero_core::TableroError;

/// Validate output path: the parent directory must exist.
fn validate_output_path(path: &Path) -> Result<PathBuf, TableroError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let canonical_parent = parent.canonicalize().map_err(|e| {
        TableroError::IoError(format!(
            "Invalid output directory '{}': {}",
            parent.display(),
            e
        ))
    })?;

    if !canonical_parent.is_dir() {
        return Err(TableroError::IoError(format!(
            "Output directory '{}' is not a valid directory",
            parent.display()
        )));
    }

    let filename = path
        .file_name()
        .ok_or_else(|| TableroError::IoError("Output path has no filename".to_string()))?;

    Ok(canonical_parent.join(filename))
}

fn print_table(table: &TerminalTable, json_mode: bool) {
    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&table.render_json()).unwrap_or_default()
        );
    } else {
        print!("{}", table.render_text());
    }
}

// =============================================================================
// SHOW COMMAND
// =============================================================================

/// Load the dataset and print it.
pub async fn cmd_show(config: &ClientConfig, json_mode: bool) -> Result<(), CommandError> {
    let client = TableroClient::new(config)?;
    let (page, initial) = PageController::init_page(
        client,
        TerminalNotifier::new(json_mode),
        None::<FileForm>,
        TerminalTable::new(),
    )
    .await;
    initial.map_err(CommandError::Shown)?;

    page.with_table(|table| print_table(table, json_mode));
    Ok(())
}

// =============================================================================
// UPLOAD COMMAND
// =============================================================================

/// Submit `file` through the upload form and print the refreshed dataset.
pub async fn cmd_upload(
    config: &ClientConfig,
    json_mode: bool,
    file: Option<PathBuf>,
) -> Result<(), CommandError> {
    let client = TableroClient::new(config)?;
    let (page, initial) = PageController::init_page(
        client,
        TerminalNotifier::new(json_mode),
        Some(FileForm::new(file)),
        TerminalTable::new(),
    )
    .await;

    // A failed initial load was already shown; the form still works.
    if let Err(e) = initial {
        tracing::debug!("continuing after failed initial load: {}", e);
    }

    match page.submit().await.map_err(CommandError::Shown)? {
        SubmitOutcome::Accepted { rows, .. } => {
            tracing::info!(rows, "upload accepted");
            page.with_table(|table| print_table(table, json_mode));
            Ok(())
        }
        SubmitOutcome::Rejected(error) => Err(TableroError::UploadRejected(error).into()),
        SubmitOutcome::NoForm => Ok(()),
    }
}

// =============================================================================
// DOWNLOAD COMMAND
// =============================================================================

/// Fetch the spreadsheet export and write it to `output`.
pub async fn cmd_download(config: &ClientConfig, output: &Path) -> Result<(), CommandError> {
    let validated_output = validate_output_path(output)?;
    let client = TableroClient::new(config)?;

    tracing::info!("Downloading export from {}", client.base_url());
    let data = client.download().await?;

    std::fs::write(&validated_output, &data)
        .map_err(|e| TableroError::IoError(format!("Write file: {}", e)))?;

    println!("Downloaded {} bytes to {:?}", data.len(), validated_output);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn output_in_existing_directory_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = validate_output_path(&dir.path().join("out.xlsx")).unwrap();
        assert!(path.ends_with("out.xlsx"));
    }

    #[test]
    fn bare_filename_resolves_against_current_dir() {
        let path = validate_output_path(Path::new("registros.xlsx")).unwrap();
        assert!(path.is_absolute());
    }

    #[test]
    fn missing_directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = validate_output_path(&dir.path().join("missing").join("out.xlsx")).unwrap_err();
        assert!(err.to_string().contains("Invalid output directory"));
    }
}
