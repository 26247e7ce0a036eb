//! # Client Configuration
//!
//! Resolution order, lowest to highest precedence:
//! 1. Built-in defaults
//! 2. TOML file (`--config` or `TABLERO_CONFIG`)
//! 3. Environment: `TABLERO_URL`, `TABLERO_TIMEOUT_SECS`
//! 4. The `--url` flag

use serde::Deserialize;
use std::path::Path;
use tablero_core::TableroError;

/// Default backend URL (the backend's stock development port).
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Resolved client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, TableroError> {
        let config: Self =
            toml::from_str(source).map_err(|e| TableroError::ConfigError(e.to_string()))?;
        config.normalized().validated()
    }

    /// Load from an optional file, then apply process environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, TableroError> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// Load from an optional file, then apply overrides read through `lookup`.
    pub fn load_with<F>(path: Option<&Path>, lookup: F) -> Result<Self, TableroError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = match path {
            Some(path) => {
                let source = std::fs::read_to_string(path).map_err(|e| {
                    TableroError::ConfigError(format!("Cannot read {}: {e}", path.display()))
                })?;
                tracing::debug!("Loaded configuration from {}", path.display());
                Self::from_toml_str(&source)?
            }
            None => Self::default(),
        };

        base.with_env(lookup)
    }

    /// Apply `TABLERO_URL` / `TABLERO_TIMEOUT_SECS` as read through `lookup`.
    pub fn with_env<F>(mut self, lookup: F) -> Result<Self, TableroError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("TABLERO_URL").filter(|u| !u.trim().is_empty()) {
            self.base_url = url;
        }

        if let Some(raw) = lookup("TABLERO_TIMEOUT_SECS") {
            self.timeout_secs = raw.trim().parse().map_err(|_| {
                TableroError::ConfigError(format!("TABLERO_TIMEOUT_SECS is not a number: {raw}"))
            })?;
        }

        self.normalized().validated()
    }

    /// Apply the `--url` flag, which wins over every other source.
    #[must_use]
    pub fn with_url_override(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.base_url = url;
        }
        self.normalized()
    }

    fn normalized(mut self) -> Self {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        self.base_url = trimmed.to_string();
        self
    }

    /// A zero timeout would fail every request immediately.
    fn validated(self) -> Result<Self, TableroError> {
        if self.timeout_secs == 0 {
            return Err(TableroError::ConfigError(
                "timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(self)
    }
}
