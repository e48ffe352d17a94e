/**
 * Backend Error Types
 *
 * This module defines the error types used by the store functions and the
 * HTTP handlers. Handlers return `BackendError`, which converts into a
 * rendered error page (see `conversion`).
 *
 * # Error Categories
 *
 * ## Store Errors
 *
 * `StoreError` classifies persistence failures so handlers can react to
 * them individually:
 * - Document validation (a model rule rejected the record)
 * - Duplicate key (a unique column already holds the value)
 * - Missing record
 * - Anything else the database reports
 *
 * ## Handler Errors
 *
 * `BackendError` wraps store, hashing, template, upload and input errors.
 * Its status code decides how the error page is rendered; only 4xx
 * messages are shown to the user verbatim.
 */

use thiserror::Error;
use axum::http::StatusCode;
use crate::shared::SharedError;
use crate::backend::uploads::UploadError;

/// Message shown on every 5xx error page
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again later.";

/// Message shown when a record or route does not exist
pub const NOT_FOUND_MESSAGE: &str = "The page you are looking for does not exist.";

/// Message shown when a unique value is already taken
pub const DUPLICATE_RECORD_MESSAGE: &str = "That record already exists.";

/// Persistence errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// A model-level rule rejected the record before it was written
    #[error("{0}")]
    Validation(String),

    /// A unique index already holds the value
    #[error("Duplicate key: {0}")]
    Duplicate(String),

    /// The referenced record does not exist
    #[error("{entity} not found")]
    NotFound {
        /// Name of the missing entity ("Post", "User", ...)
        entity: &'static str,
    },

    /// Session snapshot could not be encoded or decoded
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// Schema migration failed
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Any other database failure
    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl StoreError {
    /// Create a new not-found error
    pub fn not_found(entity: &'static str) -> Self {
        Self::NotFound { entity }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return Self::Duplicate(db_err.message().to_string());
            }
        }
        Self::Database(err)
    }
}

/// Backend-specific error types
///
/// This enum represents every error a handler can return. Each variant
/// maps to an HTTP status and renders as an error page.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status (e.g. unknown route)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Persistence error
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Password hashing or verification failed
    #[error("Hash error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Template lookup or rendering failed
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    /// Multipart reading or file storage failed
    #[error(transparent)]
    Upload(#[from] UploadError),

    /// Input error (from shared module)
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// A blocking task panicked or was cancelled
    #[error("Task error: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl BackendError {
    /// Create a new handler error with a status code
    ///
    /// # Example
    ///
    /// ```rust
    /// use postboard::backend::error::BackendError;
    /// use axum::http::StatusCode;
    ///
    /// let err = BackendError::handler(StatusCode::BAD_REQUEST, "Invalid request");
    /// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    /// ```
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a 404 error
    pub fn not_found() -> Self {
        Self::handler(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE)
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `Store` - 422 for validation, 409 for duplicates, 404 for missing records, else 500
    /// - `Upload` - The multipart rejection's status, or 500 for I/O failures
    /// - `SharedError` - 422 for validation, 400 for malformed bodies
    /// - Everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::Store(err) => match err {
                StoreError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
                StoreError::Duplicate(_) => StatusCode::CONFLICT,
                StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Upload(err) => err.status_code(),
            Self::SharedError(err) => match err {
                SharedError::ValidationError { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                SharedError::SerializationError { .. } => StatusCode::BAD_REQUEST,
            },
            Self::Hash(_) | Self::Template(_) | Self::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message shown to the user
    ///
    /// Server-side failures never leak their details; they get the generic
    /// message and the full error is logged instead.
    pub fn message(&self) -> String {
        let status = self.status_code();
        if status.is_server_error() {
            return GENERIC_ERROR_MESSAGE.to_string();
        }
        if status == StatusCode::NOT_FOUND {
            return NOT_FOUND_MESSAGE.to_string();
        }
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::Store(StoreError::Duplicate(_)) => DUPLICATE_RECORD_MESSAGE.to_string(),
            Self::SharedError(err) => err.user_message().to_string(),
            other => other.to_string(),
        }
    }
}
