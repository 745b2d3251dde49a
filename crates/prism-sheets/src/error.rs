//! Bot error types

use prism_sheets_csv::CsvError;
use prism_sheets_render::RenderError;
use prism_sheets_wiki::WikiError;
use thiserror::Error;

/// Result type alias using [`BotError`]
pub type BotResult<T> = std::result::Result<T, BotError>;

/// Errors that can occur while updating a page
#[derive(Debug, Error)]
pub enum BotError {
    /// No registry label contains the sheet name
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// Network, HTTP status or decoding failure while downloading a sheet
    #[error("Failed to fetch sheet '{sheet}': {reason}")]
    Fetch { sheet: String, reason: String },

    /// The downloaded export is not a readable table
    #[error("Failed to read sheet '{sheet}': {source}")]
    Csv {
        sheet: String,
        #[source]
        source: CsvError,
    },

    /// A bot template page does not exist
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// Template text or data could not be rendered
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// A shaper needed a column the sheet does not have
    #[error("Sheet '{sheet}' has no column '{column}'")]
    MissingColumn { sheet: String, column: String },

    /// The wiki rejected a page write
    #[error("Write error: {0}")]
    Write(WikiError),

    /// Any other wiki failure (reads, login, transport)
    #[error("Wiki error: {0}")]
    Wiki(WikiError),

    /// The sheet registry is inconsistent
    #[error("Invalid sheet registry: {0}")]
    Registry(prism_sheets_core::Error),

    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<prism_sheets_core::Error> for BotError {
    fn from(e: prism_sheets_core::Error) -> Self {
        match e {
            prism_sheets_core::Error::SheetNotFound(name) => BotError::SheetNotFound(name),
            other => BotError::Registry(other),
        }
    }
}

impl From<WikiError> for BotError {
    fn from(e: WikiError) -> Self {
        match e {
            WikiError::TemplateNotFound(name) => BotError::TemplateNotFound(name),
            e @ WikiError::WriteRejected { .. } => BotError::Write(e),
            other => BotError::Wiki(other),
        }
    }
}
