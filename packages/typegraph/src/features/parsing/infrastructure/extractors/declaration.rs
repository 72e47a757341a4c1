//! Top-level statement lowering
//!
//! Maps one top-level tree-sitter statement to a [`StatementNode`]:
//! - `export`, `export default`, `declare` wrappers are unwrapped
//! - interfaces, classes (plain, abstract, anonymous default), enums and
//!   type aliases get their name, members and heritage
//! - everything else becomes `StatementKind::Other` with the raw kind
//!
//! JSDoc blocks are read in front of the outermost statement node, which is
//! where they sit for `export interface ...`.

use tree_sitter::Node;

use super::common::*;
use super::heritage::{extract_class_heritage, extract_interface_heritage};
use super::member::{extract_body_members, extract_enum_members, BodyKind};
use crate::features::parsing::domain::{StatementKind, StatementNode};
use crate::features::parsing::infrastructure::tree_sitter::node_kinds;
use crate::shared::models::Span;

/// Lower one top-level statement
pub fn lower_statement(statement: &Node, source: &str) -> StatementNode {
    let docs = leading_jsdoc(statement, source);
    let declaration = unwrap_declaration(statement);
    let span = node_to_span(statement);

    let lowered = match declaration.kind() {
        node_kinds::INTERFACE_DECLARATION => lower_interface(&declaration, source, span),
        node_kinds::CLASS_DECLARATION
        | node_kinds::ABSTRACT_CLASS_DECLARATION
        | node_kinds::CLASS => lower_class(&declaration, source, span),
        node_kinds::ENUM_DECLARATION => lower_enum(&declaration, source, span),
        node_kinds::TYPE_ALIAS_DECLARATION => lower_type_alias(&declaration, source, span),
        other => StatementNode::new(StatementKind::Other(other.to_string()), span),
    };

    lowered.with_docs(docs)
}

/// Strip `export` / `declare` wrappers down to the declaration node
fn unwrap_declaration<'t>(statement: &Node<'t>) -> Node<'t> {
    let mut current = *statement;

    loop {
        let inner = match current.kind() {
            node_kinds::EXPORT_STATEMENT => current
                .child_by_field_name(node_kinds::fields::DECLARATION)
                .or_else(|| exported_class_expression(&current)),
            node_kinds::AMBIENT_DECLARATION => {
                named_children_without_comments(&current).into_iter().next()
            }
            _ => None,
        };

        match inner {
            Some(next) => current = next,
            None => return current,
        }
    }
}

/// `export default class { ... }` exposes the class as an expression child
fn exported_class_expression<'t>(export: &Node<'t>) -> Option<Node<'t>> {
    named_children_without_comments(export)
        .into_iter()
        .find(|c| c.kind() == node_kinds::CLASS)
}

fn with_optional_name(node: StatementNode, name: Option<String>) -> StatementNode {
    match name {
        Some(name) => node.with_name(name),
        None => node,
    }
}

fn lower_interface(node: &Node, source: &str, span: Span) -> StatementNode {
    let mut lowered = with_optional_name(
        StatementNode::new(StatementKind::Interface, span),
        field_name_text(node, source),
    );

    for clause in extract_interface_heritage(node, source) {
        lowered = lowered.with_heritage(clause);
    }

    if let Some(body) = node.child_by_field_name(node_kinds::fields::BODY) {
        lowered = lowered.with_members(extract_body_members(&body, source, BodyKind::Interface));
    }

    lowered
}

fn lower_class(node: &Node, source: &str, span: Span) -> StatementNode {
    let mut lowered = with_optional_name(
        StatementNode::new(StatementKind::Class, span),
        field_name_text(node, source),
    );

    for clause in extract_class_heritage(node, source) {
        lowered = lowered.with_heritage(clause);
    }

    if let Some(body) = node.child_by_field_name(node_kinds::fields::BODY) {
        lowered = lowered.with_members(extract_body_members(&body, source, BodyKind::Class));
    }

    lowered
}

fn lower_enum(node: &Node, source: &str, span: Span) -> StatementNode {
    let mut lowered = with_optional_name(
        StatementNode::new(StatementKind::Enum, span),
        field_name_text(node, source),
    );

    if let Some(body) = node.child_by_field_name(node_kinds::fields::BODY) {
        lowered = lowered.with_members(extract_enum_members(&body, source));
    }

    lowered
}

fn lower_type_alias(node: &Node, source: &str, span: Span) -> StatementNode {
    with_optional_name(
        StatementNode::new(StatementKind::TypeAlias, span),
        field_name_text(node, source),
    )
}
