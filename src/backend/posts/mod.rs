//! Posts Module
//!
//! Posts, their comments, and the pages that create and show them.
//!
//! - **`db`** - Post model and queries
//! - **`comments`** - Comment model and the transactional append
//! - **`handlers`** - HTTP handlers

/// Post model and database operations
pub mod db;

/// Comment model and database operations
pub mod comments;

/// HTTP handlers for post endpoints
pub mod handlers;
