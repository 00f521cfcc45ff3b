//! Error handling for the air quality monitor
//!
//! Every failure the menu can hit is reported to the user and the loop
//! continues, except a closed input stream which ends the session.

use std::path::PathBuf;

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Persistence errors
    #[error("Cannot read {}: {source}", path.display())]
    ReadData {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write {}: {source}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No valid rows in {}", path.display())]
    EmptyData { path: PathBuf },

    // Domain errors
    #[error(transparent)]
    Domain(#[from] shared::DomainError),

    // Console errors
    #[error("Input closed")]
    InputClosed,

    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),
}

impl AppError {
    /// Stable short code shown next to the message
    pub fn code(&self) -> &'static str {
        match self {
            AppError::ReadData { .. } => "READ_FAILED",
            AppError::WriteFile { .. } => "WRITE_FAILED",
            AppError::Csv(_) => "CSV_ERROR",
            AppError::Json(_) => "JSON_ERROR",
            AppError::EmptyData { .. } => "EMPTY_DATA",
            AppError::Domain(_) => "DOMAIN_ERROR",
            AppError::InputClosed => "INPUT_CLOSED",
            AppError::Io(_) => "IO_ERROR",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
