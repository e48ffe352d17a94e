//! Backend Error Module
//!
//! This module defines the error types used by the store functions and the
//! request handlers, and their conversion into rendered error pages.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - StoreError and BackendError definitions
//! └── conversion.rs - IntoResponse for BackendError
//! ```
//!
//! # How handlers use it
//!
//! Expected failures (a duplicate email, a weak password) are handled
//! inside the handler by re-rendering the form. Everything else is returned
//! as `Err(BackendError)` and ends up on the error page:
//!
//! ```rust,no_run
//! use postboard::backend::error::BackendError;
//! use axum::response::Response;
//!
//! # async fn example() -> Result<Response, BackendError> {
//! Err(BackendError::not_found())
//! # }
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{BackendError, StoreError, DUPLICATE_RECORD_MESSAGE, GENERIC_ERROR_MESSAGE, NOT_FOUND_MESSAGE};
