//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - An in-process server over an in-memory database
//! - Form builders and user/post fixtures
//! - Custom assertion helpers

pub mod app;
pub mod assertions;
pub mod fixtures;

// Re-export commonly used utilities
pub use app::*;
pub use assertions::*;
pub use fixtures::*;
