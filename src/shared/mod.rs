//! Shared Module
//!
//! This module contains types that are shared between the request handlers,
//! the store and the templates. None of them carry credentials, so every type
//! here is safe to serialize into a session or a rendered page.

/// Shared error types
pub mod error;

/// User profile type
pub mod user;

/// Post and comment read models
pub mod post;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use post::{CommentDetail, PostDetail, PostSummary};
pub use user::UserProfile;
