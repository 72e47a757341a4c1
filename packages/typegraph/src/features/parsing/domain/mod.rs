//! Parsing domain models

mod jsdoc;
mod language_version;
mod parsed_file;
mod syntax_node;

pub use jsdoc::{JsDoc, JsDocTag};
pub use language_version::{LanguageVersion, UnknownLanguageVersion};
pub use parsed_file::{ParseError, ParsedFile};
pub use syntax_node::{
    HeritageClauseNode, HeritageExpression, HeritageToken, MemberName, MemberNode,
    MemberNodeKind, StatementKind, StatementNode,
};
