//! Backend Module
//!
//! This module contains all server-side code for Postboard: an Axum HTTP
//! server with server-rendered pages for signup, login, posts and comments.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Users, password hashing, sessions, auth pages
//! - **`posts`** - Posts, comments and their pages
//! - **`middleware`** - Session guard and extractors
//! - **`uploads`** - Multipart reading and file storage
//! - **`views`** - Template rendering
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── posts/          - Posts and comments
//! ├── middleware/     - Request middleware
//! ├── uploads/        - Uploaded files
//! ├── views/          - Templates
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! Handlers share an `AppState` holding the SQLite pool, the upload store
//! and the configuration. There is no other in-process mutable state;
//! sessions live in the database.
//!
//! # Error Handling
//!
//! Handlers return `Result<Response, BackendError>`. Expected failures
//! (bad form input, wrong password) re-render the form; everything else
//! becomes an error page through `BackendError`'s `IntoResponse`.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Posts and comments
pub mod posts;

/// Middleware for request processing
pub mod middleware;

/// Uploaded file handling
pub mod uploads;

/// Server-side templates
pub mod views;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::create_app;
