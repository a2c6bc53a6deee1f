//! Error types for resultweb-utils

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Invalid timestamp: {input}")]
    InvalidTimestamp { input: String },
}

/// Result type with FormatError
pub type FormatResult<T> = Result<T, FormatError>;
