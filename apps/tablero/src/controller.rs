//! # Page Controller
//!
//! Drives the page: fills the results table from the data endpoint and
//! handles upload submissions.
//!
//! ## Flows
//!
//! ```text
//! init_page ──► load_data ──► GET /data ──► render_rows
//!
//! submit ──► POST /upload ──┬─ error   ──► alert(error)
//!                           └─ message ──► alert(message) ──► load_data
//! ```
//!
//! Both flows suspend only while talking to the backend. The table is
//! rebuilt in one synchronous step, so concurrent flows may interleave
//! their requests but never produce a half-built table.

use crate::client::Backend;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tablero_core::{Notifier, TableBody, TableroError, UploadForm, UploadOutcome, render_rows};

/// What a form submission ended in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The page has no upload form; nothing was sent.
    NoForm,
    /// The backend reported an error. The table was not reloaded.
    Rejected(String),
    /// The backend accepted the file and the table was reloaded.
    Accepted { message: String, rows: usize },
}

/// The page's single controller.
pub struct PageController<B, N, F, T> {
    backend: B,
    notifier: N,
    form: Option<F>,
    table: Mutex<T>,
}

impl<B, N, F, T> PageController<B, N, F, T>
where
    B: Backend,
    N: Notifier,
    F: UploadForm,
    T: TableBody,
{
    /// Wire the controller to its collaborators without loading anything.
    pub fn new(backend: B, notifier: N, form: Option<F>, table: T) -> Self {
        Self {
            backend,
            notifier,
            form,
            table: Mutex::new(table),
        }
    }

    /// Initialize the page and run the initial load.
    ///
    /// The controller is returned even when the initial load fails: the
    /// failure has already been shown and the form stays usable.
    pub async fn init_page(
        backend: B,
        notifier: N,
        form: Option<F>,
        table: T,
    ) -> (Self, Result<usize, TableroError>) {
        let page = Self::new(backend, notifier, form, table);
        tracing::debug!(has_form = page.has_upload_form(), "page initialized");
        let initial = page.load_data().await;
        (page, initial)
    }

    /// Fetch the dataset and replace the table content with it.
    ///
    /// Returns the number of rows shown. On failure the table keeps its
    /// previous content.
    pub async fn load_data(&self) -> Result<usize, TableroError> {
        let rows = self
            .backend
            .fetch_rows()
            .await
            .map_err(|e| self.report(e))?;

        let shown = render_rows(&mut *self.lock_table(), &rows);
        tracing::info!(rows = shown, "table refreshed");
        Ok(shown)
    }

    /// Handle a submission of the upload form.
    pub async fn submit(&self) -> Result<SubmitOutcome, TableroError> {
        let Some(form) = &self.form else {
            return Ok(SubmitOutcome::NoForm);
        };

        let file = form.selected_file().map_err(|e| self.report(e))?;
        if file.is_none() {
            tracing::info!("submitting upload with no file selected");
        }

        let outcome = self
            .backend
            .upload(file)
            .await
            .map_err(|e| self.report(e))?;

        match outcome {
            UploadOutcome::Rejected(error) => {
                tracing::warn!("upload rejected: {}", error);
                self.notifier.alert(&error);
                Ok(SubmitOutcome::Rejected(error))
            }
            UploadOutcome::Accepted(message) => {
                self.notifier.alert(&message);
                let rows = self.load_data().await?;
                Ok(SubmitOutcome::Accepted { message, rows })
            }
        }
    }

    pub fn has_upload_form(&self) -> bool {
        self.form.is_some()
    }

    /// Run `f` against the current table content.
    pub fn with_table<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.lock_table())
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    fn lock_table(&self) -> MutexGuard<'_, T> {
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn report(&self, error: TableroError) -> TableroError {
        tracing::warn!("{}", error);
        self.notifier.show_error(&error);
        error
    }
}
