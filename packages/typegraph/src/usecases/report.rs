//! JSON report of a scanned batch

use std::path::PathBuf;

use serde::Serialize;

use crate::features::parsing::domain::{HeritageToken, JsDoc};
use crate::features::type_model::domain::{
    DeclId, Declaration, DeclarationKind, Member, MemberKind, TypeBatch,
};
use crate::shared::models::{Result, Span};

/// Batch summary plus one entry per reported declaration
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub total_declarations: usize,
    pub unresolved_references: usize,
    pub declarations: Vec<DeclarationReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeclarationReport {
    pub id: DeclId,
    pub kind: DeclarationKind,
    pub name: String,
    pub file_path: PathBuf,
    pub span: Span,
    pub docs: Vec<JsDoc>,
    pub members: Vec<MemberReport>,
    pub heritage: Vec<HeritageReport>,
    pub merged_members: Vec<MemberReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MemberReport {
    pub name: String,
    pub kind: MemberKind,
    pub is_optional: bool,
    /// Name of the declaring type
    pub declared_in: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub docs: Vec<JsDoc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeritageReport {
    pub token: HeritageToken,
    pub references: Vec<ReferenceReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReferenceReport {
    pub expression: String,
    pub targets: Vec<TargetReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TargetReport {
    pub id: DeclId,
    pub name: String,
    pub kind: DeclarationKind,
}

impl BatchReport {
    /// Report every declaration, or only those named `only_named`
    pub fn from_batch(batch: &TypeBatch, only_named: Option<&str>) -> Self {
        let unresolved_references = batch
            .iter()
            .flat_map(|d| d.heritage.iter())
            .flat_map(|c| c.references.iter())
            .filter(|r| !r.is_resolved())
            .count();

        let declarations = match only_named {
            Some(name) => batch
                .by_name(name)
                .map(|d| DeclarationReport::new(batch, d))
                .collect(),
            None => batch
                .iter()
                .map(|d| DeclarationReport::new(batch, d))
                .collect(),
        };

        Self {
            total_declarations: batch.len(),
            unresolved_references,
            declarations,
        }
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

impl DeclarationReport {
    fn new(batch: &TypeBatch, decl: &Declaration) -> Self {
        let heritage = decl
            .heritage
            .iter()
            .map(|clause| HeritageReport {
                token: clause.token,
                references: clause
                    .references
                    .iter()
                    .map(|reference| ReferenceReport {
                        expression: reference.referenced_name.clone(),
                        targets: reference
                            .resolved_targets
                            .iter()
                            .filter_map(|id| batch.get(*id))
                            .map(|target| TargetReport {
                                id: target.id,
                                name: target.name.clone(),
                                kind: target.kind,
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            id: decl.id,
            kind: decl.kind,
            name: decl.name.clone(),
            file_path: decl.origin.file_path.clone(),
            span: decl.origin.span,
            docs: decl.docs.clone(),
            members: decl
                .members
                .iter()
                .map(|m| MemberReport::new(batch, m))
                .collect(),
            heritage,
            merged_members: batch
                .merged_members(decl.id)
                .values()
                .map(|m| MemberReport::new(batch, m))
                .collect(),
        }
    }
}

impl MemberReport {
    fn new(batch: &TypeBatch, member: &Member) -> Self {
        Self {
            name: member.name.clone(),
            kind: member.kind,
            is_optional: member.is_optional,
            declared_in: batch
                .get(member.owner)
                .map(|owner| owner.name.clone())
                .unwrap_or_default(),
            docs: member.docs.clone(),
        }
    }
}
