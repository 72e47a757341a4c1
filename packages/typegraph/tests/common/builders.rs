//! Test data builders
//!
//! Builds resolved batches directly from declaration shapes, without parsing.

use typegraph::features::parsing::{HeritageExpression, HeritageToken};
use typegraph::features::type_model::{
    resolve_heritage, DeclarationHeader, HeritageClause, HeritageReference,
};
use typegraph::{DeclId, Declaration, DeclarationKind, Member, MemberKind, Origin, Span, TypeBatch};

/// Builder for TypeBatch
#[derive(Debug, Default)]
pub struct BatchBuilder {
    declarations: Vec<Declaration>,
}

impl BatchBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an interface extending `bases`
    pub fn interface(self, name: &str, members: &[&str], bases: &[&str]) -> Self {
        self.push(DeclarationKind::Interface, name, members, bases)
    }

    /// Add a class extending / implementing `bases`
    pub fn class(self, name: &str, members: &[&str], bases: &[&str]) -> Self {
        self.push(DeclarationKind::Class, name, members, bases)
    }

    /// Add an enum
    pub fn enumeration(self, name: &str, members: &[&str]) -> Self {
        self.push(DeclarationKind::Enum, name, members, &[])
    }

    /// Add a type alias
    pub fn alias(self, name: &str) -> Self {
        self.push(DeclarationKind::TypeAlias, name, &[], &[])
    }

    /// Add a declaration whose heritage holds a complex expression
    pub fn interface_with_expression(self, name: &str, members: &[&str], expression: &str) -> Self {
        let mut builder = self.push(DeclarationKind::Interface, name, members, &[]);
        if let Some(decl) = builder.declarations.last_mut() {
            decl.heritage.push(HeritageClause::new(
                decl.id,
                HeritageToken::Extends,
                vec![HeritageReference::unresolved(HeritageExpression::Complex(
                    expression.to_string(),
                ))],
            ));
        }
        builder
    }

    fn push(
        mut self,
        kind: DeclarationKind,
        name: &str,
        members: &[&str],
        bases: &[&str],
    ) -> Self {
        let id = DeclId(self.declarations.len());
        let header = DeclarationHeader {
            id,
            name: name.to_string(),
            docs: Vec::new(),
            origin: Origin::new("fixture.d.ts", Span::zero()),
        };
        let member_kind = if kind == DeclarationKind::Enum {
            MemberKind::EnumMember
        } else {
            MemberKind::Property
        };
        let members: Vec<Member> = members
            .iter()
            .map(|m| Member::new(id, *m, member_kind))
            .collect();
        let heritage = if bases.is_empty() {
            Vec::new()
        } else {
            vec![HeritageClause::new(
                id,
                HeritageToken::Extends,
                bases
                    .iter()
                    .map(|b| HeritageReference::unresolved(HeritageExpression::Identifier(b.to_string())))
                    .collect(),
            )]
        };

        let decl = match kind {
            DeclarationKind::Interface => Declaration::interface(header, members, heritage),
            DeclarationKind::Class => Declaration::class(header, members, heritage),
            DeclarationKind::Enum => Declaration::enumeration(header, members),
            DeclarationKind::TypeAlias => Declaration::type_alias(header),
        };
        self.declarations.push(decl);
        self
    }

    /// Resolve heritage and build the batch
    pub fn build(self) -> TypeBatch {
        resolve_heritage(self.declarations)
    }
}
