//! # Application Errors
//!
//! Everything that can stop `galene-docgen` before it writes a document.
//! Bad form input never lands here: numeric fields coerce and a failed rate
//! refresh becomes an inline warning on the page.

use thiserror::Error;

use crate::config::ConfigError;

/// Fatal errors for one docgen run.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not decode form events: {0}")]
    Events(#[from] serde_json::Error),
}

/// Result type for docgen operations.
pub type AppResult<T> = Result<T, AppError>;
