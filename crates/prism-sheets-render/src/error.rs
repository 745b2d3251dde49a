//! Render error types

use thiserror::Error;

/// Result type for rendering
pub type RenderResult<T> = std::result::Result<T, RenderError>;

/// Errors that can occur while rendering markup
#[derive(Debug, Error)]
pub enum RenderError {
    /// Template syntax or evaluation failure
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    /// Text handed to the table parser is not a wiki table
    #[error("Malformed wiki table: {0}")]
    MalformedTable(String),
}
