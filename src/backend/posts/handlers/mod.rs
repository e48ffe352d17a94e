//! Post Handlers Module
//!
//! HTTP handlers for the home page, post creation, post detail and
//! comments. Everything except `home` runs behind the session guard.
//!
//! # Handlers
//!
//! - **`home`** - GET / - List posts
//! - **`post_form`** - GET /post-form - Empty post form
//! - **`submit_post`** - POST /post-form - Create a post
//! - **`show_post`** - GET /post/{id} - Post with expanded comments
//! - **`submit_comment`** - POST /post/{id} - Comment on a post

/// Form types
pub mod types;

/// Home page
pub mod index;

/// Post creation
pub mod create;

/// Post detail
pub mod detail;

/// Comment creation
pub mod comment;

pub use comment::submit_comment;
pub use create::{post_form, submit_post};
pub use detail::show_post;
pub use index::home;
