//! Error types for the ledger
//!
//! All errors use thiserror for structured error handling.
//! The binary prints them as user-facing messages and exits non-zero.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Bad input: non-positive amount, empty category, duplicate username...
    #[error("Validation error: {0}")]
    Validation(String),

    /// Unknown user or wrong password
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Missing session or session bound to another database
    #[error("Session error: {0}")]
    Session(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Chart error: {0}")]
    Chart(String),

    #[error("{0}")]
    Generic(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
