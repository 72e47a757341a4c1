//! Tree-sitter infrastructure

pub mod node_kinds;
mod parser;

pub use parser::TreeSitterDeclarationParser;
