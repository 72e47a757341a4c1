//! Member extraction for interface, class and enum bodies

use tree_sitter::Node;

use super::common::*;
use crate::features::parsing::domain::{MemberName, MemberNode, MemberNodeKind};
use crate::features::parsing::infrastructure::tree_sitter::node_kinds;

/// Which body is being lowered; class bodies treat `constructor` specially
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Interface,
    Class,
}

/// Extract the members of an interface or class body
pub fn extract_body_members(body: &Node, source: &str, body_kind: BodyKind) -> Vec<MemberNode> {
    let mut members = Vec::new();
    for child in named_children_without_comments(body) {
        if child.kind() == node_kinds::INTERFACE_BODY {
            members.extend(extract_body_members(&child, source, body_kind));
        } else if let Some(member) = extract_member(&child, source, body_kind) {
            members.push(member);
        }
    }
    members
}

fn extract_member(node: &Node, source: &str, body_kind: BodyKind) -> Option<MemberNode> {
    let kind = match node.kind() {
        node_kinds::PROPERTY_SIGNATURE | node_kinds::PUBLIC_FIELD_DEFINITION => {
            MemberNodeKind::Property
        }
        node_kinds::METHOD_SIGNATURE
        | node_kinds::METHOD_DEFINITION
        | node_kinds::ABSTRACT_METHOD_SIGNATURE => MemberNodeKind::Method,
        node_kinds::CALL_SIGNATURE => MemberNodeKind::CallSignature,
        node_kinds::CONSTRUCT_SIGNATURE => MemberNodeKind::ConstructSignature,
        node_kinds::INDEX_SIGNATURE => MemberNodeKind::IndexSignature,
        // Decorators and static blocks are not members
        node_kinds::DECORATOR | node_kinds::CLASS_STATIC_BLOCK => return None,
        other => MemberNodeKind::Other(other.to_string()),
    };

    let mut member = MemberNode::new(kind, node_to_span(node))
        .optional(has_child_kind(node, node_kinds::OPTIONAL_TOKEN))
        .with_docs(leading_jsdoc(node, source));

    // Index signatures carry a `name` field for the key binding, not a member name
    let is_named_kind = matches!(member.kind, MemberNodeKind::Property | MemberNodeKind::Method);
    let name_node = node
        .child_by_field_name(node_kinds::fields::NAME)
        .filter(|_| is_named_kind);

    if let Some(name_node) = name_node {
        let name = member_name(&name_node, source);
        let is_constructor = body_kind == BodyKind::Class
            && member.kind == MemberNodeKind::Method
            && name.simple_name() == Some(node_kinds::CONSTRUCTOR_NAME);

        if is_constructor {
            // Constructors are nameless members
            member.kind = MemberNodeKind::Constructor;
        } else {
            member = member.with_name(name);
        }
    }

    Some(member)
}

/// Extract the members of an enum body
pub fn extract_enum_members(body: &Node, source: &str) -> Vec<MemberNode> {
    named_children_without_comments(body)
        .into_iter()
        .map(|child| {
            let name_node = if child.kind() == node_kinds::ENUM_ASSIGNMENT {
                child.child_by_field_name(node_kinds::fields::NAME)
            } else {
                Some(child)
            };

            let member = MemberNode::new(MemberNodeKind::EnumMember, node_to_span(&child))
                .with_docs(leading_jsdoc(&child, source));
            match name_node {
                Some(n) => member.with_name(member_name(&n, source)),
                None => member,
            }
        })
        .collect()
}

/// Classify a property name node
pub fn member_name(node: &Node, source: &str) -> MemberName {
    let text = node_text(node, source);
    match node.kind() {
        node_kinds::PROPERTY_IDENTIFIER | node_kinds::IDENTIFIER | node_kinds::TYPE_IDENTIFIER => {
            MemberName::Identifier(text.to_string())
        }
        node_kinds::PRIVATE_PROPERTY_IDENTIFIER => MemberName::PrivateName(text.to_string()),
        node_kinds::STRING => MemberName::StringLiteral(unquote(text).to_string()),
        node_kinds::NUMBER => MemberName::NumericLiteral(text.to_string()),
        _ => MemberName::Computed(text.to_string()),
    }
}

fn unquote(text: &str) -> &str {
    let bytes = text.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if (first == b'"' || first == b'\'') && first == last {
            return &text[1..text.len() - 1];
        }
    }
    text
}
