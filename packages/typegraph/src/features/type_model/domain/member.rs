//! Type members

use serde::{Deserialize, Serialize};

use super::declaration::DeclId;
use crate::features::parsing::domain::JsDoc;
use crate::shared::models::Span;

/// Member kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    Property,
    Method,
    EnumMember,
}

/// A member declared directly on a declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
    /// Owning declaration
    pub owner: DeclId,
    pub name: String,
    pub kind: MemberKind,
    pub is_optional: bool,
    pub docs: Vec<JsDoc>,
    pub span: Span,
}

impl Member {
    pub fn new(owner: DeclId, name: impl Into<String>, kind: MemberKind) -> Self {
        Self {
            owner,
            name: name.into(),
            kind,
            is_optional: false,
            docs: Vec::new(),
            span: Span::zero(),
        }
    }

    pub fn optional(mut self, is_optional: bool) -> Self {
        self.is_optional = is_optional;
        self
    }

    pub fn with_docs(mut self, docs: Vec<JsDoc>) -> Self {
        self.docs = docs;
        self
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}
