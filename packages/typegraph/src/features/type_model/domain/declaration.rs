//! Declaration records
//!
//! One [`Declaration`] per interface, enum, class or type alias found in a
//! scan. Members and heritage clauses refer back to their owner through a
//! [`DeclId`] (an index into the batch), never through a pointer.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use super::heritage::HeritageClause;
use super::member::Member;
use crate::features::parsing::domain::{JsDoc, StatementKind};
use crate::shared::models::Span;

/// Identity of a declaration: its position in the batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeclId(pub usize);

impl DeclId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for DeclId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Declaration kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeclarationKind {
    #[serde(rename = "interface")]
    Interface,
    #[serde(rename = "enum")]
    Enum,
    #[serde(rename = "class")]
    Class,
    #[serde(rename = "type")]
    TypeAlias,
}

impl DeclarationKind {
    /// Keyword-style label (`interface`, `enum`, `class`, `type`)
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationKind::Interface => "interface",
            DeclarationKind::Enum => "enum",
            DeclarationKind::Class => "class",
            DeclarationKind::TypeAlias => "type",
        }
    }

    /// Map a statement kind; `None` for statements that are not type declarations
    pub fn from_statement_kind(kind: &StatementKind) -> Option<Self> {
        match kind {
            StatementKind::Interface => Some(DeclarationKind::Interface),
            StatementKind::Enum => Some(DeclarationKind::Enum),
            StatementKind::Class => Some(DeclarationKind::Class),
            StatementKind::TypeAlias => Some(DeclarationKind::TypeAlias),
            StatementKind::Other(_) => None,
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a declaration came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Origin {
    pub file_path: PathBuf,
    pub span: Span,
}

impl Origin {
    pub fn new(file_path: impl Into<PathBuf>, span: Span) -> Self {
        Self {
            file_path: file_path.into(),
            span,
        }
    }
}

/// Fields shared by every declaration kind
#[derive(Debug, Clone)]
pub struct DeclarationHeader {
    pub id: DeclId,
    pub name: String,
    pub docs: Vec<JsDoc>,
    pub origin: Origin,
}

/// One extracted type declaration
#[derive(Debug, Clone, Serialize)]
pub struct Declaration {
    pub id: DeclId,
    pub name: String,
    pub kind: DeclarationKind,
    /// Members declared directly on this declaration
    pub members: Vec<Member>,
    /// Heritage clauses (always empty for enums and type aliases)
    pub heritage: Vec<HeritageClause>,
    pub docs: Vec<JsDoc>,
    pub origin: Origin,
}

impl Declaration {
    fn from_header(
        header: DeclarationHeader,
        kind: DeclarationKind,
        members: Vec<Member>,
        heritage: Vec<HeritageClause>,
    ) -> Self {
        Self {
            id: header.id,
            name: header.name,
            kind,
            members,
            heritage,
            docs: header.docs,
            origin: header.origin,
        }
    }

    pub fn interface(
        header: DeclarationHeader,
        members: Vec<Member>,
        heritage: Vec<HeritageClause>,
    ) -> Self {
        Self::from_header(header, DeclarationKind::Interface, members, heritage)
    }

    pub fn class(
        header: DeclarationHeader,
        members: Vec<Member>,
        heritage: Vec<HeritageClause>,
    ) -> Self {
        Self::from_header(header, DeclarationKind::Class, members, heritage)
    }

    pub fn enumeration(header: DeclarationHeader, members: Vec<Member>) -> Self {
        Self::from_header(header, DeclarationKind::Enum, members, Vec::new())
    }

    /// Alias members are not extracted
    pub fn type_alias(header: DeclarationHeader) -> Self {
        Self::from_header(header, DeclarationKind::TypeAlias, Vec::new(), Vec::new())
    }

    /// Own member by name (last one wins, like the merged view)
    pub fn member(&self, name: &str) -> Option<&Member> {
        self.members.iter().rev().find(|m| m.name == name)
    }

    /// Distinct resolved heritage targets, in declaration order
    pub fn heritage_targets(&self) -> Vec<DeclId> {
        let mut seen = FxHashSet::default();
        self.heritage
            .iter()
            .flat_map(|clause| clause.references.iter())
            .flat_map(|reference| reference.resolved_targets.iter().copied())
            .filter(|target| seen.insert(*target))
            .collect()
    }
}
