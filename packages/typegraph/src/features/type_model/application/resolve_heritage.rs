//! Heritage resolution
//!
//! Binds every heritage reference to the batch declarations carrying the
//! referenced name. Only plain identifier expressions resolve; dotted names,
//! generic instantiations and call expressions get no targets. A declaration
//! never resolves to itself, so `interface A extends A {}` is inert.

use tracing::debug;

use crate::features::type_model::domain::{Declaration, TypeBatch};

/// Resolve heritage references of a whole batch
///
/// Declaration ids must equal their position in `declarations`.
pub fn resolve_heritage(mut declarations: Vec<Declaration>) -> TypeBatch {
    let by_name = TypeBatch::index_names(&declarations);

    let mut resolved = 0usize;
    let mut unresolved = 0usize;

    for decl in &mut declarations {
        let owner = decl.id;
        for clause in &mut decl.heritage {
            for reference in &mut clause.references {
                reference.resolved_targets = reference
                    .expression
                    .identifier()
                    .and_then(|name| by_name.get(name))
                    .map(|ids| ids.iter().copied().filter(|id| *id != owner).collect())
                    .unwrap_or_default();

                if reference.is_resolved() {
                    resolved += 1;
                } else {
                    unresolved += 1;
                }
            }
        }
    }

    debug!(
        declarations = declarations.len(),
        resolved, unresolved, "resolved heritage references"
    );

    TypeBatch::from_resolved(declarations, by_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::parsing::domain::{HeritageExpression, HeritageToken};
    use crate::features::type_model::domain::{
        DeclId, DeclarationHeader, HeritageClause, HeritageReference, Origin,
    };
    use crate::shared::models::Span;

    fn header(id: usize, name: &str) -> DeclarationHeader {
        DeclarationHeader {
            id: DeclId(id),
            name: name.to_string(),
            docs: Vec::new(),
            origin: Origin::new("a.d.ts", Span::zero()),
        }
    }

    fn extends(id: usize, expressions: Vec<HeritageExpression>) -> Vec<HeritageClause> {
        vec![HeritageClause::new(
            DeclId(id),
            HeritageToken::Extends,
            expressions.into_iter().map(HeritageReference::unresolved).collect(),
        )]
    }

    fn ident(name: &str) -> HeritageExpression {
        HeritageExpression::Identifier(name.to_string())
    }

    fn targets(batch: &TypeBatch, id: usize) -> Vec<Vec<DeclId>> {
        batch[DeclId(id)].heritage[0]
            .references
            .iter()
            .map(|r| r.resolved_targets.clone())
            .collect()
    }

    #[test]
    fn test_resolves_all_same_named_declarations_in_batch_order() {
        let batch = resolve_heritage(vec![
            Declaration::interface(header(0, "B"), Vec::new(), Vec::new()),
            Declaration::interface(header(1, "A"), Vec::new(), extends(1, vec![ident("B")])),
            Declaration::class(header(2, "B"), Vec::new(), Vec::new()),
        ]);

        assert_eq!(targets(&batch, 1), vec![vec![DeclId(0), DeclId(2)]]);
    }

    #[test]
    fn test_excludes_owner() {
        let batch = resolve_heritage(vec![Declaration::interface(
            header(0, "A"),
            Vec::new(),
            extends(0, vec![ident("A")]),
        )]);

        assert_eq!(targets(&batch, 0), vec![Vec::<DeclId>::new()]);
        assert!(batch[DeclId(0)].heritage_targets().is_empty());
    }

    #[test]
    fn test_owner_excluded_but_namesakes_kept() {
        let batch = resolve_heritage(vec![
            Declaration::interface(header(0, "A"), Vec::new(), extends(0, vec![ident("A")])),
            Declaration::interface(header(1, "A"), Vec::new(), Vec::new()),
        ]);

        assert_eq!(targets(&batch, 0), vec![vec![DeclId(1)]]);
    }

    #[test]
    fn test_complex_and_unknown_names_resolve_to_nothing() {
        let batch = resolve_heritage(vec![
            Declaration::interface(header(0, "B"), Vec::new(), Vec::new()),
            Declaration::interface(
                header(1, "A"),
                Vec::new(),
                extends(
                    1,
                    vec![
                        HeritageExpression::Complex("ns.B".into()),
                        HeritageExpression::Complex("B<string>".into()),
                        ident("Missing"),
                    ],
                ),
            ),
        ]);

        assert_eq!(targets(&batch, 1), vec![Vec::new(), Vec::new(), Vec::new()]);
    }

    #[test]
    fn test_enum_and_alias_can_be_targets() {
        let batch = resolve_heritage(vec![
            Declaration::enumeration(header(0, "E"), Vec::new()),
            Declaration::type_alias(header(1, "T")),
            Declaration::interface(
                header(2, "I"),
                Vec::new(),
                extends(2, vec![ident("E"), ident("T")]),
            ),
        ]);

        assert_eq!(targets(&batch, 2), vec![vec![DeclId(0)], vec![DeclId(1)]]);
    }

    #[test]
    fn test_batch_keeps_name_index() {
        let batch = resolve_heritage(vec![
            Declaration::interface(header(0, "A"), Vec::new(), Vec::new()),
            Declaration::class(header(1, "B"), Vec::new(), Vec::new()),
            Declaration::interface(header(2, "A"), Vec::new(), Vec::new()),
        ]);

        assert_eq!(batch.ids_named("A"), &[DeclId(0), DeclId(2)]);
        assert_eq!(batch.first_named("B").map(|d| d.id), Some(DeclId(1)));
        assert_eq!(
            batch.by_name("A").map(|d| d.id).collect::<Vec<_>>(),
            vec![DeclId(0), DeclId(2)]
        );
        assert!(batch.ids_named("Missing").is_empty());
        assert!(batch.first_named("Missing").is_none());
    }
}
