//! Heritage clause extraction
//!
//! Interfaces carry an `extends_type_clause` (older grammars: `extends_clause`).
//! Classes carry a `class_heritage` node holding an `extends_clause` and/or an
//! `implements_clause`. Only bare identifiers become
//! [`HeritageExpression::Identifier`]; qualified names, generic instantiations
//! and calls are kept as [`HeritageExpression::Complex`] text.

use tree_sitter::Node;

use super::common::*;
use crate::features::parsing::domain::{HeritageClauseNode, HeritageExpression, HeritageToken};
use crate::features::parsing::infrastructure::tree_sitter::node_kinds;

/// Extract the `extends` list of an interface declaration
pub fn extract_interface_heritage(node: &Node, source: &str) -> Vec<HeritageClauseNode> {
    let clause = find_child_by_kind(node, node_kinds::EXTENDS_TYPE_CLAUSE)
        .or_else(|| find_child_by_kind(node, node_kinds::EXTENDS_CLAUSE));

    clause
        .map(|c| {
            vec![HeritageClauseNode::new(
                HeritageToken::Extends,
                clause_expressions(&c, source),
            )]
        })
        .unwrap_or_default()
}

/// Extract the `extends` and `implements` clauses of a class declaration
pub fn extract_class_heritage(node: &Node, source: &str) -> Vec<HeritageClauseNode> {
    let Some(heritage) = find_child_by_kind(node, node_kinds::CLASS_HERITAGE) else {
        return Vec::new();
    };

    named_children_without_comments(&heritage)
        .into_iter()
        .filter_map(|clause| {
            let token = match clause.kind() {
                node_kinds::EXTENDS_CLAUSE => HeritageToken::Extends,
                node_kinds::IMPLEMENTS_CLAUSE => HeritageToken::Implements,
                _ => return None,
            };
            Some(HeritageClauseNode::new(
                token,
                clause_expressions(&clause, source),
            ))
        })
        .collect()
}

/// Base-type expressions of one clause, in source order
///
/// A `type_arguments` node following an expression belongs to it
/// (`extends Base<T>`), which turns the expression complex.
fn clause_expressions(clause: &Node, source: &str) -> Vec<HeritageExpression> {
    let mut expressions: Vec<HeritageExpression> = Vec::new();

    for child in named_children_without_comments(clause) {
        if child.kind() == node_kinds::TYPE_ARGUMENTS {
            if let Some(previous) = expressions.pop() {
                let text = format!("{}{}", previous.text(), node_text(&child, source));
                expressions.push(HeritageExpression::Complex(text));
            }
            continue;
        }
        expressions.push(heritage_expression(&child, source));
    }

    expressions
}

fn heritage_expression(node: &Node, source: &str) -> HeritageExpression {
    let text = node_text(node, source).to_string();
    match node.kind() {
        node_kinds::IDENTIFIER | node_kinds::TYPE_IDENTIFIER => HeritageExpression::Identifier(text),
        _ => HeritageExpression::Complex(text),
    }
}
