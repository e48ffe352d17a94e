//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//! Routes are organized by functionality into focused submodules.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Paths and module exports
//! ├── router.rs       - Main router creation
//! ├── auth_routes.rs  - Signup, login, logout, profile
//! └── post_routes.rs  - Home page, posts, comments
//! ```
//!
//! # Route Table
//!
//! | Method | Path | Guarded |
//! |---|---|---|
//! | GET | `/` | no |
//! | GET, POST | `/signup` | no |
//! | GET, POST | `/login` | no |
//! | GET, POST | `/post-form` | yes |
//! | GET, POST | `/post/{id}` | yes |
//! | POST | `/logout` | yes |
//! | GET | `/userProfile` | yes |
//! | GET | `/avatar/*` | no |
//!
//! Guarded routes redirect to `/login` when there is no live session.
//! Unknown paths render the 404 error page.

use uuid::Uuid;

/// Main router creation
pub mod router;

/// Authentication routes
pub mod auth_routes;

/// Post and comment routes
pub mod post_routes;

pub use router::create_router;

/// Home page
pub const ROOT_PATH: &str = "/";
/// Registration form
pub const SIGNUP_PATH: &str = "/signup";
/// Login form; also where the guard sends anonymous requests
pub const LOGIN_PATH: &str = "/login";
/// Logout action
pub const LOGOUT_PATH: &str = "/logout";
/// Profile of the logged-in user
pub const PROFILE_PATH: &str = "/userProfile";
/// New post form
pub const POST_FORM_PATH: &str = "/post-form";
/// Post detail and comment form
pub const POST_PATH: &str = "/post/{id}";

/// URL of a post's detail page
pub fn post_path(id: Uuid) -> String {
    format!("/post/{}", id)
}
