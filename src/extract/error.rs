/// Error types for the extract module
use thiserror::Error;

/// Errors that can occur while configuring or running an extractor
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The record did not carry exactly one field
    #[error("Expected single string field, got {fields}")]
    Shape {
        /// Number of fields found on the record
        fields: usize,
    },

    /// A percent-escape or byte sequence could not be decoded
    #[error("Decoding error: {0}")]
    Decoding(String),

    /// Invalid construction-time configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}
