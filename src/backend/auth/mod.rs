//! Authentication Module
//!
//! This module handles user registration, login and session management.
//! It provides HTTP handlers for the authentication pages and manages user
//! records, password hashes and server-side sessions.
//!
//! # Architecture
//!
//! - **`users`** - User data model and database operations
//! - **`password`** - Password policy and bcrypt hashing
//! - **`sessions`** - Server-side session store and cookies
//! - **`handlers`** - HTTP handlers for authentication pages
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── password.rs     - Password policy and hashing
//! ├── sessions.rs     - Session rows and cookies
//! └── handlers/       - HTTP handlers
//! ```

/// User data model and database operations
pub mod users;

/// Password policy and hashing
pub mod password;

/// Session store and cookies
pub mod sessions;

/// HTTP handlers for authentication pages
pub mod handlers;

pub use handlers::{login, login_form, logout, signup, signup_form, user_profile};
