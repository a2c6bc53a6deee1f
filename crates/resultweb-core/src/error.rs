//! Error types for resultweb-core

use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// IO error
    IoError,
    /// Invalid data format
    InvalidFormat,
    /// Missing required field
    MissingField,
    /// Key path collides with a non-object value
    PathConflict,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::IoError => write!(f, "IO_ERROR"),
            ErrorCode::InvalidFormat => write!(f, "INVALID_FORMAT"),
            ErrorCode::MissingField => write!(f, "MISSING_FIELD"),
            ErrorCode::PathConflict => write!(f, "PATH_CONFLICT"),
        }
    }
}

/// Core error type
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {message}")]
    InvalidJson { path: String, message: String },

    #[error("Exercise result is not a JSON object")]
    NotAnObject,

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Key path {path} runs through a non-object value")]
    PathConflict { path: String },
}

impl CoreError {
    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::Io { .. } => ErrorCode::IoError,
            CoreError::InvalidJson { .. } => ErrorCode::InvalidFormat,
            CoreError::NotAnObject => ErrorCode::InvalidFormat,
            CoreError::MissingField { .. } => ErrorCode::MissingField,
            CoreError::PathConflict { .. } => ErrorCode::PathConflict,
        }
    }
}

/// Result type with CoreError
pub type CoreResult<T> = Result<T, CoreError>;
