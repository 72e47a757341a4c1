//! TypeScript tree-sitter node kinds
//!
//! These constants match the node type names of the tree-sitter-typescript
//! grammar. Only the kinds the declaration lowering looks at are listed.
//! Source: https://github.com/tree-sitter/tree-sitter-typescript/blob/master/common/define-grammar.js

// Program structure
pub const PROGRAM: &str = "program";
pub const COMMENT: &str = "comment";
pub const ERROR: &str = "ERROR";

// Statement wrappers
pub const EXPORT_STATEMENT: &str = "export_statement";
pub const AMBIENT_DECLARATION: &str = "ambient_declaration";

// Declarations
pub const CLASS_DECLARATION: &str = "class_declaration";
pub const ABSTRACT_CLASS_DECLARATION: &str = "abstract_class_declaration";
/// Anonymous class, e.g. `export default class { }`
pub const CLASS: &str = "class";
pub const INTERFACE_DECLARATION: &str = "interface_declaration";
pub const ENUM_DECLARATION: &str = "enum_declaration";
pub const TYPE_ALIAS_DECLARATION: &str = "type_alias_declaration";

// Heritage
pub const CLASS_HERITAGE: &str = "class_heritage";
pub const EXTENDS_CLAUSE: &str = "extends_clause";
pub const EXTENDS_TYPE_CLAUSE: &str = "extends_type_clause";
pub const IMPLEMENTS_CLAUSE: &str = "implements_clause";
pub const TYPE_ARGUMENTS: &str = "type_arguments";

// Interface and class members
/// Also appears nested inside an interface body after `;` followed by a comment
pub const INTERFACE_BODY: &str = "interface_body";
pub const PROPERTY_SIGNATURE: &str = "property_signature";
pub const METHOD_SIGNATURE: &str = "method_signature";
pub const CALL_SIGNATURE: &str = "call_signature";
pub const CONSTRUCT_SIGNATURE: &str = "construct_signature";
pub const INDEX_SIGNATURE: &str = "index_signature";
pub const METHOD_DEFINITION: &str = "method_definition";
pub const ABSTRACT_METHOD_SIGNATURE: &str = "abstract_method_signature";
pub const PUBLIC_FIELD_DEFINITION: &str = "public_field_definition";
pub const DECORATOR: &str = "decorator";
pub const CLASS_STATIC_BLOCK: &str = "class_static_block";

// Enum members
pub const ENUM_ASSIGNMENT: &str = "enum_assignment";

// Names
pub const IDENTIFIER: &str = "identifier";
pub const TYPE_IDENTIFIER: &str = "type_identifier";
pub const PROPERTY_IDENTIFIER: &str = "property_identifier";
pub const PRIVATE_PROPERTY_IDENTIFIER: &str = "private_property_identifier";
pub const STRING: &str = "string";
pub const NUMBER: &str = "number";
pub const COMPUTED_PROPERTY_NAME: &str = "computed_property_name";

// Tokens
pub const OPTIONAL_TOKEN: &str = "?";

// Field names
pub mod fields {
    pub const NAME: &str = "name";
    pub const BODY: &str = "body";
    pub const DECLARATION: &str = "declaration";
}

/// Name of the constructor method in a class body
pub const CONSTRUCTOR_NAME: &str = "constructor";
