//! Error types for format operations

use thiserror::Error;

/// Errors that can occur while loading a dictionary or generating a format
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// The dictionary export could not be parsed
    #[error("Parse error: {0}")]
    ParseError(String),
    /// A token failed boundary validation
    #[error("Invalid token '{name}': {reason}")]
    InvalidToken { name: String, reason: String },
    /// A format parameter could not be interpreted
    #[error("Invalid option: {0}")]
    InvalidOption(String),
    /// Error while assembling the output document
    #[error("Serialization error: {0}")]
    SerializationError(String),
}
