//! Postboard - Main Library
//!
//! Postboard is a small server-rendered social board: people sign up with an
//! optional avatar, log in, publish posts with pictures and comment on each
//! other's posts.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared by every layer
//!   - User profiles, expanded posts and comments
//!   - Input error types
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server and routes
//!   - SQLite persistence via sqlx
//!   - bcrypt password hashing and server-side sessions
//!   - minijinja templates
//!
//! # Usage
//!
//! ```rust,no_run
//! use postboard::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(config).await?;
//! // Use app with axum::serve
//! # Ok(())
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
