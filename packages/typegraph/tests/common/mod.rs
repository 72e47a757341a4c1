//! Common test utilities for typegraph
//!
//! Builders for declaration graphs and fixtures for scanning sources.

#![allow(dead_code)]

mod builders;
mod fixtures;

// Re-export all utilities
pub use builders::*;
pub use fixtures::*;
