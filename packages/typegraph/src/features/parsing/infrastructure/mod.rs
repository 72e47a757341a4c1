//! Parsing infrastructure (adapters)

pub mod extractors;
pub mod jsdoc;
pub mod tree_sitter;

pub use self::tree_sitter::TreeSitterDeclarationParser;
pub use jsdoc::normalize_jsdoc;
