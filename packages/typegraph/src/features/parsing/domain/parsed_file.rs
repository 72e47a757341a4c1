//! Parsed file representation
//!
//! Abstracts the parser output for the declaration extractor.

use super::language_version::LanguageVersion;
use super::syntax_node::StatementNode;
use crate::shared::models::Span;
use std::path::PathBuf;

/// One parsed declaration file
#[derive(Debug, Clone)]
pub struct ParsedFile {
    /// Top-level statements in source order
    pub statements: Vec<StatementNode>,

    /// File path (provenance and error messages)
    pub file_path: PathBuf,

    /// Language version the file was parsed with
    pub language_version: LanguageVersion,

    /// Whether parsing had errors
    pub has_errors: bool,

    /// Parse errors (if any)
    pub errors: Vec<ParseError>,
}

/// Parse error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub span: Span,
}

impl ParsedFile {
    pub fn new(
        statements: Vec<StatementNode>,
        file_path: impl Into<PathBuf>,
        language_version: LanguageVersion,
    ) -> Self {
        Self {
            statements,
            file_path: file_path.into(),
            language_version,
            has_errors: false,
            errors: Vec::new(),
        }
    }

    pub fn with_errors(mut self, errors: Vec<ParseError>) -> Self {
        self.has_errors = !errors.is_empty();
        self.errors = errors;
        self
    }

    /// Number of statements that are type declarations
    pub fn declaration_count(&self) -> usize {
        self.statements
            .iter()
            .filter(|s| s.kind.is_type_declaration())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}
