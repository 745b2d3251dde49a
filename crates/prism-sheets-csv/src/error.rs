//! CSV error types

use thiserror::Error;

/// Result type for CSV operations
pub type CsvResult<T> = std::result::Result<T, CsvError>;

/// Errors that can occur while reading a sheet export
#[derive(Debug, Error)]
pub enum CsvError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV library error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The export ended before the header row
    #[error("No header row at record {row}")]
    MissingHeader { row: usize },

    /// The requested index column is not in the header
    #[error("Index column not found: {0}")]
    MissingIndexColumn(String),
}
