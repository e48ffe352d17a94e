//! Integration tests
//!
//! Full-router tests for every page, run against an in-memory database

mod auth_test;
mod posts_test;
mod session_test;
