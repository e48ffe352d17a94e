//! Middleware Module
//!
//! This module contains HTTP middleware for the backend server.
//!
//! - **`auth`** - The route guard and the extractors built on it

pub mod auth;

pub use auth::{load_session, require_session, AuthUser, MaybeUser, SessionContext};
