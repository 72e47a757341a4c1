//! Parser-neutral view of top-level statements
//!
//! A parser adapter lowers its concrete tree into these nodes. Only the shape
//! the declaration model needs is kept: kind tag, optional name, JSDoc blocks,
//! members and heritage clauses.

use super::jsdoc::JsDoc;
use crate::shared::models::Span;
use serde::{Deserialize, Serialize};

/// Statement kind tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementKind {
    Interface,
    Enum,
    Class,
    TypeAlias,

    /// Anything else (imports, functions, namespaces, ...), with the raw kind
    Other(String),
}

impl StatementKind {
    pub fn is_type_declaration(&self) -> bool {
        matches!(
            self,
            StatementKind::Interface
                | StatementKind::Enum
                | StatementKind::Class
                | StatementKind::TypeAlias
        )
    }
}

/// Member kind tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberNodeKind {
    Property,
    Method,
    EnumMember,
    Constructor,
    IndexSignature,
    CallSignature,
    ConstructSignature,
    Other(String),
}

/// Member name as written in source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberName {
    Identifier(String),
    /// String literal name, quotes removed
    StringLiteral(String),
    NumericLiteral(String),
    /// `#name`
    PrivateName(String),
    /// `[expr]`, kept as raw text
    Computed(String),
}

impl MemberName {
    /// The name as a plain string, or `None` for computed names
    pub fn simple_name(&self) -> Option<&str> {
        match self {
            MemberName::Identifier(name)
            | MemberName::StringLiteral(name)
            | MemberName::NumericLiteral(name)
            | MemberName::PrivateName(name) => Some(name),
            MemberName::Computed(_) => None,
        }
    }
}

/// One member of an interface, class or enum body
#[derive(Debug, Clone)]
pub struct MemberNode {
    pub kind: MemberNodeKind,
    pub name: Option<MemberName>,
    pub is_optional: bool,
    pub docs: Vec<JsDoc>,
    pub span: Span,
}

impl MemberNode {
    pub fn new(kind: MemberNodeKind, span: Span) -> Self {
        Self {
            kind,
            name: None,
            is_optional: false,
            docs: Vec::new(),
            span,
        }
    }

    pub fn with_name(mut self, name: MemberName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn optional(mut self, is_optional: bool) -> Self {
        self.is_optional = is_optional;
        self
    }

    pub fn with_docs(mut self, docs: Vec<JsDoc>) -> Self {
        self.docs = docs;
        self
    }
}

/// `extends` or `implements`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeritageToken {
    Extends,
    Implements,
}

impl HeritageToken {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeritageToken::Extends => "extends",
            HeritageToken::Implements => "implements",
        }
    }
}

/// A base-type expression inside a heritage clause
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "form", content = "text", rename_all = "lowercase")]
pub enum HeritageExpression {
    /// A bare identifier (`Base`)
    Identifier(String),
    /// Qualified, generic or otherwise non-trivial expression (`ns.Base`, `Base<T>`)
    Complex(String),
}

impl HeritageExpression {
    /// Raw expression text
    pub fn text(&self) -> &str {
        match self {
            HeritageExpression::Identifier(text) | HeritageExpression::Complex(text) => text,
        }
    }

    pub fn identifier(&self) -> Option<&str> {
        match self {
            HeritageExpression::Identifier(name) => Some(name),
            HeritageExpression::Complex(_) => None,
        }
    }
}

/// One raw heritage clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeritageClauseNode {
    pub token: HeritageToken,
    pub types: Vec<HeritageExpression>,
}

impl HeritageClauseNode {
    pub fn new(token: HeritageToken, types: Vec<HeritageExpression>) -> Self {
        Self { token, types }
    }
}

/// One top-level statement of a parsed file
#[derive(Debug, Clone)]
pub struct StatementNode {
    pub kind: StatementKind,
    pub name: Option<String>,
    pub docs: Vec<JsDoc>,
    pub members: Vec<MemberNode>,
    pub heritage: Vec<HeritageClauseNode>,
    pub span: Span,
}

impl StatementNode {
    pub fn new(kind: StatementKind, span: Span) -> Self {
        Self {
            kind,
            name: None,
            docs: Vec::new(),
            members: Vec::new(),
            heritage: Vec::new(),
            span,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_docs(mut self, docs: Vec<JsDoc>) -> Self {
        self.docs = docs;
        self
    }

    pub fn with_members(mut self, members: Vec<MemberNode>) -> Self {
        self.members = members;
        self
    }

    pub fn with_member(mut self, member: MemberNode) -> Self {
        self.members.push(member);
        self
    }

    pub fn with_heritage(mut self, clause: HeritageClauseNode) -> Self {
        self.heritage.push(clause);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_kind_is_type_declaration() {
        assert!(StatementKind::Interface.is_type_declaration());
        assert!(StatementKind::TypeAlias.is_type_declaration());
        assert!(!StatementKind::Other("import_statement".into()).is_type_declaration());
    }

    #[test]
    fn test_member_name_simple_name() {
        assert_eq!(MemberName::Identifier("id".into()).simple_name(), Some("id"));
        assert_eq!(MemberName::StringLiteral("x-y".into()).simple_name(), Some("x-y"));
        assert_eq!(MemberName::PrivateName("#p".into()).simple_name(), Some("#p"));
        assert_eq!(MemberName::Computed("[Symbol.iterator]".into()).simple_name(), None);
    }

    #[test]
    fn test_heritage_expression_identifier() {
        assert_eq!(HeritageExpression::Identifier("Base".into()).identifier(), Some("Base"));
        assert_eq!(HeritageExpression::Complex("ns.Base".into()).identifier(), None);
        assert_eq!(HeritageExpression::Complex("ns.Base".into()).text(), "ns.Base");
    }
}
