//! Heritage clauses and references

use serde::Serialize;

use super::declaration::DeclId;
use crate::features::parsing::domain::{HeritageExpression, HeritageToken};

/// One `extends` / `implements` clause of a declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeritageClause {
    /// Owning declaration
    pub owner: DeclId,
    pub token: HeritageToken,
    pub references: Vec<HeritageReference>,
}

impl HeritageClause {
    pub fn new(owner: DeclId, token: HeritageToken, references: Vec<HeritageReference>) -> Self {
        Self {
            owner,
            token,
            references,
        }
    }
}

/// One base-type expression of a clause
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeritageReference {
    /// Raw expression text
    pub referenced_name: String,
    pub expression: HeritageExpression,
    /// Batch declarations named `referenced_name`, owner excluded, batch order
    pub resolved_targets: Vec<DeclId>,
}

impl HeritageReference {
    /// Reference before heritage resolution
    pub fn unresolved(expression: HeritageExpression) -> Self {
        Self {
            referenced_name: expression.text().to_string(),
            expression,
            resolved_targets: Vec::new(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        !self.resolved_targets.is_empty()
    }
}
