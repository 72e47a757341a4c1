//! Node helpers shared by the statement and member lowering code
//!
//! Spans are 1-based. Leading JSDoc is gathered from the comment siblings
//! directly above a node.

use tree_sitter::Node;

use crate::features::parsing::domain::JsDoc;
use crate::features::parsing::infrastructure::jsdoc::normalize_jsdoc;
use crate::features::parsing::infrastructure::tree_sitter::node_kinds;
use crate::shared::models::Span;

pub fn node_to_span(node: &Node) -> Span {
    let (start, end) = (node.start_position(), node.end_position());
    Span::new(
        start.row as u32 + 1,
        start.column as u32 + 1,
        end.row as u32 + 1,
        end.column as u32 + 1,
    )
}

/// Source text covered by a node, empty if the range is out of bounds
pub fn node_text<'s>(node: &Node, source: &'s str) -> &'s str {
    source.get(node.byte_range()).unwrap_or("")
}

/// First direct child with this kind
pub fn find_child_by_kind<'t>(node: &Node<'t>, kind: &str) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find(|c| c.kind() == kind);
    found
}

/// Check if node has a direct child of the given kind (named or anonymous)
pub fn has_child_kind(node: &Node, kind: &str) -> bool {
    find_child_by_kind(node, kind).is_some()
}

/// Named children, comments excluded
pub fn named_children_without_comments<'t>(node: &Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    let children = node
        .named_children(&mut cursor)
        .filter(|c| c.kind() != node_kinds::COMMENT)
        .collect();
    children
}

/// Text of the `name` field, if present
pub fn field_name_text(node: &Node, source: &str) -> Option<String> {
    node.child_by_field_name(node_kinds::fields::NAME)
        .map(|n| node_text(&n, source).to_string())
}

/// Collect the JSDoc blocks written immediately before `node`
///
/// Walks back over contiguous comment siblings and keeps the `/** */` ones,
/// returned in source order. A comment starting on the line where the
/// preceding node ends trails that node and is not collected.
pub fn leading_jsdoc(node: &Node, source: &str) -> Vec<JsDoc> {
    let mut comments = Vec::new();
    let mut current = node.prev_sibling();

    while let Some(sibling) = current {
        if sibling.kind() != node_kinds::COMMENT {
            break;
        }
        comments.push(sibling);
        current = sibling.prev_sibling();
    }

    let anchor_row = current.map(|anchor| anchor.end_position().row);
    comments
        .iter()
        .rev()
        .filter(|comment| anchor_row.map_or(true, |row| comment.start_position().row > row))
        .filter_map(|comment| normalize_jsdoc(node_text(comment, source)))
        .collect()
}
