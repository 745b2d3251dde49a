//! Wiki error types

use thiserror::Error;

/// Result type for wiki operations
pub type WikiResult<T> = std::result::Result<T, WikiError>;

/// Errors that can occur while talking to the wiki
#[derive(Debug, Error)]
pub enum WikiError {
    /// Transport error (connect, timeout, body decoding)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// The API answered with an error object
    #[error("API error [{code}]: {info}")]
    Api { code: String, info: String },

    /// Login did not succeed
    #[error("Login failed: {0}")]
    Login(String),

    /// `Template:bot/<name>` does not exist
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// The wiki refused an edit
    #[error("Write to '{title}' rejected: {reason}")]
    WriteRejected { title: String, reason: String },

    /// Response did not have the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),
}
