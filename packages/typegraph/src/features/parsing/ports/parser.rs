//! Parser port (interface)
//!
//! Defines the contract for turning declaration-file text into statements.
//! The scan use case accepts any implementation, so the bundled tree-sitter
//! adapter can be replaced.

use std::path::Path;

use crate::features::parsing::domain::{LanguageVersion, ParsedFile};
use crate::shared::models::Result;

/// Parser trait - abstraction over the parsing implementation
pub trait DeclarationParser: Send + Sync {
    /// Parse source text into top-level statements
    fn parse(&self, source: &str, file_path: &Path, version: LanguageVersion)
        -> Result<ParsedFile>;

    /// Short name used in logs
    fn parser_name(&self) -> &'static str;
}
