//! TypeScript declaration extractors
//!
//! Lower tree-sitter nodes into the parser-neutral statement model:
//! - Statements (export/declare unwrapping, kind tagging)
//! - Heritage clauses (extends, implements)
//! - Members (interface, class and enum bodies)
//!
//! Design: Each extractor is independent and testable.

pub mod common;
pub mod declaration;
pub mod heritage;
pub mod member;

pub use declaration::lower_statement;
