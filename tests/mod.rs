//! Test suite for Postboard
//!
//! This module organizes all integration tests

pub mod common;
pub mod integration;
