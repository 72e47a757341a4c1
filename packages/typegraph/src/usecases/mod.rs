//! Usecase Layer - scan entry points
//!
//! Ties discovery, parsing and the type model together. Used by the
//! `typegraph-scan` binary and by library consumers.

pub mod report;
pub mod scan_for_types;

// Re-export main API
pub use report::BatchReport;
pub use scan_for_types::{scan_for_types, ScanOptions, TypeScanner};
