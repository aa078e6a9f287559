//! Unit tests - resolution, classification and lifting through the public API
//!
//! These tests need no external dependencies.

mod lifting_tests;
mod resolution_tests;
