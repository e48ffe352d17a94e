//! Shared Error Types
//!
//! This module defines the input-validation error shared by every layer of
//! the application. Handlers produce it when a submitted form is missing a
//! field or fails a policy check, before anything is persisted.
//!
//! # Error Categories
//!
//! - `ValidationError` - A form field failed a presence or policy check
//! - `SerializationError` - A form body could not be mapped onto its typed input
//!
//! # Usage
//!
//! ```rust
//! use postboard::shared::error::SharedError;
//!
//! let error = SharedError::validation("password", "Password is too weak");
//! assert_eq!(error.field(), Some("password"));
//! ```
use thiserror::Error;

/// Shared error types that can occur while reading user input
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Form body could not be deserialized into its typed input
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message, shown to the user as-is
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The offending field, if the error is tied to one
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::ValidationError { field, .. } => Some(field),
            Self::SerializationError { .. } => None,
        }
    }

    /// The message suitable for re-rendering a form
    pub fn user_message(&self) -> &str {
        match self {
            Self::ValidationError { message, .. } => message,
            Self::SerializationError { message } => message,
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("Malformed form body: {}", err))
    }
}
