//! Unified application error type.
//! The sync core speaks in three narrow failure types (validation, remote,
//! storage); everything above it (cli, config, export) returns AppError.

use std::io;
use thiserror::Error;

// ---------------------------
// Validation
// ---------------------------

/// Malformed input. Blocks the operation before any I/O happens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("Field '{0}' is required")]
    MissingField(&'static str),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Unknown person: {0}")]
    UnknownPerson(String),
}

// ---------------------------
// Remote API
// ---------------------------

/// Any failure of a call to the remote API, network or HTTP status alike.
#[derive(Error, Debug)]
pub enum RemoteFailure {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Server answered {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Unexpected response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for RemoteFailure {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            RemoteFailure::Timeout(e.to_string())
        } else if e.is_decode() {
            RemoteFailure::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            RemoteFailure::Status {
                status: status.as_u16(),
                url: e.url().map(|u| u.to_string()).unwrap_or_default(),
            }
        } else {
            RemoteFailure::Network(e.to_string())
        }
    }
}

// ---------------------------
// Local mirror
// ---------------------------

/// Read/write failure of the local mirror. Logged, never fatal.
#[derive(Error, Debug)]
pub enum StorageFailure {
    #[error("Mirror database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Mirror serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Corrupt mirror entry '{key}': {reason}")]
    Corrupt { key: String, reason: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error(transparent)]
    Storage(#[from] StorageFailure),

    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
