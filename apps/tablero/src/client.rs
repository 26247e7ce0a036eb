//! # Tablero HTTP Client
//!
//! Wrapper around the registros backend for use by the page controller
//! and the CLI.
//!
//! The controller only sees the `Backend` trait, so tests can swap the
//! network for an in-memory double.

use crate::config::ClientConfig;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use std::time::Duration;
use tablero_core::{
    FilePayload, Row, TableroError, UploadOutcome, decode_rows, decode_upload_outcome,
    primitives::{DATA_PATH, DOWNLOAD_PATH, UPLOAD_FIELD, UPLOAD_PATH},
};

// =============================================================================
// BACKEND SEAM
// =============================================================================

/// The backend operations the page controller and the CLI depend on.
#[async_trait]
pub trait Backend: Send + Sync {
    /// `GET /data` → the full dataset, in backend order.
    async fn fetch_rows(&self) -> Result<Vec<Row>, TableroError>;

    /// `POST /upload` → the outcome reported in the JSON body.
    ///
    /// `None` sends the form without a file part.
    async fn upload(&self, file: Option<FilePayload>) -> Result<UploadOutcome, TableroError>;

    /// `GET /download` → spreadsheet export of the dataset.
    async fn download(&self) -> Result<Vec<u8>, TableroError>;
}

// =============================================================================
// HTTP CLIENT
// =============================================================================

/// HTTP client for the registros backend.
#[derive(Clone)]
pub struct TableroClient {
    http: reqwest::Client,
    base_url: String,
}

impl TableroClient {
    /// Create a client from a resolved configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, TableroError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TableroError::ConfigError(format!("HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// The backend URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.http.request(method, &url)
    }

    /// Send a request and read the whole body.
    ///
    /// Both the send and the body read are suspension points; a failure in
    /// either is reported as a connection failure.
    async fn exchange(
        &self,
        path: &str,
        req: reqwest::RequestBuilder,
    ) -> Result<(reqwest::StatusCode, Vec<u8>), TableroError> {
        let resp = req.send().await.map_err(|e| {
            TableroError::ConnectionFailed(format!("{}{}: {e}", self.base_url, path))
        })?;
        let status = resp.status();
        let body = resp.bytes().await.map_err(|e| {
            TableroError::ConnectionFailed(format!("{}{}: {e}", self.base_url, path))
        })?;

        tracing::debug!(path, status = status.as_u16(), bytes = body.len(), "response received");
        Ok((status, body.to_vec()))
    }
}

#[async_trait]
impl Backend for TableroClient {
    async fn fetch_rows(&self) -> Result<Vec<Row>, TableroError> {
        let req = self.request(reqwest::Method::GET, DATA_PATH);
        let (status, body) = self.exchange(DATA_PATH, req).await?;
        if !status.is_success() {
            return Err(status_error(DATA_PATH, status, &body));
        }
        decode_rows(&body)
    }

    async fn upload(&self, file: Option<FilePayload>) -> Result<UploadOutcome, TableroError> {
        let mut form = Form::new();
        if let Some(file) = file {
            let mime = file.mime_type();
            tracing::info!(file = %file.file_name, bytes = file.bytes.len(), %mime, "uploading file");
            let part = Part::bytes(file.bytes)
                .file_name(file.file_name)
                .mime_str(&mime)
                .map_err(|e| TableroError::IoError(format!("Invalid MIME type {mime}: {e}")))?;
            form = form.part(UPLOAD_FIELD, part);
        }

        let req = self.request(reqwest::Method::POST, UPLOAD_PATH).multipart(form);
        let (status, body) = self.exchange(UPLOAD_PATH, req).await?;

        // The JSON body decides the outcome; the backend pairs `error` with 4xx.
        match decode_upload_outcome(&body) {
            Ok(outcome) => Ok(outcome),
            Err(_) if !status.is_success() => Err(status_error(UPLOAD_PATH, status, &body)),
            Err(e) => Err(e),
        }
    }

    async fn download(&self) -> Result<Vec<u8>, TableroError> {
        let req = self.request(reqwest::Method::GET, DOWNLOAD_PATH);
        let (status, body) = self.exchange(DOWNLOAD_PATH, req).await?;
        if !status.is_success() {
            return Err(status_error(DOWNLOAD_PATH, status, &body));
        }
        Ok(body)
    }
}

fn status_error(path: &str, status: reqwest::StatusCode, body: &[u8]) -> TableroError {
    TableroError::HttpStatus {
        endpoint: path.to_string(),
        status: status.as_u16(),
        body: String::from_utf8_lossy(body).into_owned(),
    }
}
