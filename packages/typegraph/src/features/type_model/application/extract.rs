//! Declaration extraction
//!
//! Produces one [`Declaration`] per recognised statement of a parsed file.
//! Heritage references are recorded unresolved; resolution needs the whole
//! batch and happens in [`resolve_heritage`](super::resolve_heritage).

use tracing::trace;

use crate::features::parsing::domain::{
    HeritageClauseNode, MemberNode, MemberNodeKind, ParsedFile, StatementNode,
};
use crate::features::type_model::domain::{
    DeclId, Declaration, DeclarationHeader, DeclarationKind, HeritageClause, HeritageReference,
    Member, MemberKind, Origin,
};

/// Name given to declarations without an identifier
pub const UNDEFINED_NAME: &str = "undefined";

/// Extract the declarations of one file, numbering them from `first_id`
pub fn extract_declarations(file: &ParsedFile, first_id: DeclId) -> Vec<Declaration> {
    let mut declarations = Vec::new();

    for statement in &file.statements {
        let Some(kind) = DeclarationKind::from_statement_kind(&statement.kind) else {
            trace!(kind = ?statement.kind, "skipping non-declaration statement");
            continue;
        };

        let id = DeclId(first_id.index() + declarations.len());
        declarations.push(extract_declaration(file, statement, kind, id));
    }

    declarations
}

fn extract_declaration(
    file: &ParsedFile,
    statement: &StatementNode,
    kind: DeclarationKind,
    id: DeclId,
) -> Declaration {
    let header = DeclarationHeader {
        id,
        name: statement
            .name
            .clone()
            .unwrap_or_else(|| UNDEFINED_NAME.to_string()),
        docs: statement.docs.clone(),
        origin: Origin::new(file.file_path.clone(), statement.span),
    };

    match kind {
        DeclarationKind::Interface => Declaration::interface(
            header,
            extract_members(&statement.members, id),
            extract_heritage(&statement.heritage, id),
        ),
        DeclarationKind::Class => Declaration::class(
            header,
            extract_members(&statement.members, id),
            extract_heritage(&statement.heritage, id),
        ),
        DeclarationKind::Enum => {
            Declaration::enumeration(header, extract_members(&statement.members, id))
        }
        DeclarationKind::TypeAlias => Declaration::type_alias(header),
    }
}

/// Keep members with a simple string name; computed and nameless members are dropped
fn extract_members(nodes: &[MemberNode], owner: DeclId) -> Vec<Member> {
    nodes
        .iter()
        .filter_map(|node| {
            let name = node.name.as_ref()?.simple_name()?;
            let kind = match node.kind {
                MemberNodeKind::EnumMember => MemberKind::EnumMember,
                MemberNodeKind::Method => MemberKind::Method,
                _ => MemberKind::Property,
            };
            Some(
                Member::new(owner, name, kind)
                    .optional(node.is_optional)
                    .with_docs(node.docs.clone())
                    .with_span(node.span),
            )
        })
        .collect()
}

fn extract_heritage(clauses: &[HeritageClauseNode], owner: DeclId) -> Vec<HeritageClause> {
    clauses
        .iter()
        .map(|clause| {
            HeritageClause::new(
                owner,
                clause.token,
                clause
                    .types
                    .iter()
                    .cloned()
                    .map(HeritageReference::unresolved)
                    .collect(),
            )
        })
        .collect()
}
