//! Parsing Feature
//!
//! Turns declaration-file text into parser-neutral statements.
//!
//! ## Structure
//! - `domain/` - ParsedFile, StatementNode, JsDoc, LanguageVersion
//! - `ports/` - DeclarationParser trait
//! - `infrastructure/` - TreeSitterDeclarationParser, extractors, JSDoc normalizer

pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports
pub use domain::{
    HeritageClauseNode, HeritageExpression, HeritageToken, JsDoc, JsDocTag, LanguageVersion,
    MemberName, MemberNode, MemberNodeKind, ParseError, ParsedFile, StatementKind, StatementNode,
};
pub use infrastructure::{normalize_jsdoc, TreeSitterDeclarationParser};
pub use ports::DeclarationParser;
