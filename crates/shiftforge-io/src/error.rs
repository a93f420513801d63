//! I/O error types.

use std::path::PathBuf;

use shiftforge_core::ShiftForgeError;
use thiserror::Error;

/// Errors raised while reading input tables or writing results.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Excel error: {0}")]
    Excel(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Unsupported input format: {0} (expected a directory, .xlsx, .xlsm, .xls or .ods)")]
    UnsupportedFormat(String),

    #[error("{table}: missing column '{column}'")]
    MissingColumn { table: String, column: String },

    #[error("{table} row {row}, column '{column}': {message} (value '{value}')")]
    InvalidField {
        table: String,
        row: usize,
        column: String,
        value: String,
        message: String,
    },

    #[error(transparent)]
    Domain(#[from] ShiftForgeError),
}

/// Result type alias for table I/O.
pub type Result<T> = std::result::Result<T, IoError>;
