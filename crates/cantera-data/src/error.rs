//! Error types for table loading.

use thiserror::Error;

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while loading metric tables.
#[derive(Debug, Error)]
pub enum DataError {
    /// Polars error (CSV parsing, frame operations).
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A required column is absent from a table.
    #[error("Missing column '{column}' in table '{table}'")]
    MissingColumn {
        /// Table name the column was expected in.
        table: String,
        /// Column name that was not found.
        column: String,
    },
}
