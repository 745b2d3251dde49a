//! Error types for prism-sheets-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in prism-sheets-core
#[derive(Debug, Error)]
pub enum Error {
    /// No registry label contains the requested name
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// The same label is registered twice
    #[error("Sheet label registered twice: {0}")]
    DuplicateLabel(String),

    /// Two labels share one sheet id
    #[error("Sheet id {id} registered for both '{first}' and '{second}'")]
    DuplicateId {
        id: u64,
        first: String,
        second: String,
    },

    /// A label is contained in another label, so it can never be looked up exactly
    #[error("Sheet label '{inner}' is contained in '{outer}'")]
    OverlappingLabels { inner: String, outer: String },
}
