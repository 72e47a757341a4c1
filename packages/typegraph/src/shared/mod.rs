//! Shared module - Common types and utilities
//!
//! This module contains types that are shared across all features.
//! It has no parser dependencies (no tree-sitter).

pub mod models;

// Re-exports for convenience
pub use models::*;
