//! Tree-sitter parser implementation
//!
//! This is where the tree-sitter dependency lives.

use std::path::Path;

use ::tree_sitter::{Node, Parser as TSParser, Tree};
use tracing::{trace, warn};

use super::node_kinds;
use crate::features::parsing::domain::{LanguageVersion, ParseError, ParsedFile, StatementNode};
use crate::features::parsing::infrastructure::extractors::common::node_to_span;
use crate::features::parsing::infrastructure::extractors::lower_statement;
use crate::features::parsing::ports::DeclarationParser;
use crate::shared::models::{Result, TypeGraphError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Grammar {
    TypeScript,
    Tsx,
}

/// Tree-sitter based declaration parser
///
/// The tree-sitter grammars accept every ECMAScript target, so the language
/// version is recorded on the [`ParsedFile`] but does not change the grammar.
#[derive(Debug, Clone)]
pub struct TreeSitterDeclarationParser {
    grammar: Grammar,
}

impl TreeSitterDeclarationParser {
    /// Parser for `.ts` / `.d.ts` sources
    pub fn new() -> Self {
        Self {
            grammar: Grammar::TypeScript,
        }
    }

    /// Parser for `.tsx` sources
    pub fn tsx() -> Self {
        Self {
            grammar: Grammar::Tsx,
        }
    }

    fn get_ts_language(&self) -> ::tree_sitter::Language {
        match self.grammar {
            Grammar::TypeScript => tree_sitter_typescript::language_typescript(),
            Grammar::Tsx => tree_sitter_typescript::language_tsx(),
        }
    }

    /// Convert tree-sitter tree to our domain model
    fn convert_tree(
        &self,
        tree: &Tree,
        source: &str,
        file_path: &Path,
        version: LanguageVersion,
    ) -> ParsedFile {
        let root = tree.root_node();

        let mut cursor = root.walk();
        let statements: Vec<StatementNode> = root
            .named_children(&mut cursor)
            .filter(|c| c.kind() != node_kinds::COMMENT)
            .map(|c| lower_statement(&c, source))
            .collect();

        let mut errors = Vec::new();
        if root.has_error() {
            self.collect_errors(&root, &mut errors);
        }

        ParsedFile::new(statements, file_path, version).with_errors(errors)
    }

    /// Collect parse errors
    fn collect_errors(&self, node: &Node, errors: &mut Vec<ParseError>) {
        if node.is_error() || node.is_missing() {
            let span = node_to_span(node);
            let message = if node.is_missing() {
                format!("missing `{}` at {}", node.kind(), span)
            } else {
                format!("unexpected syntax at {}", span)
            };
            errors.push(ParseError { message, span });
        }

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.has_error() || child.is_missing() {
                self.collect_errors(&child, errors);
            }
        }
    }
}

impl Default for TreeSitterDeclarationParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DeclarationParser for TreeSitterDeclarationParser {
    fn parse(
        &self,
        source: &str,
        file_path: &Path,
        version: LanguageVersion,
    ) -> Result<ParsedFile> {
        let mut parser = TSParser::new();
        parser.set_language(&self.get_ts_language()).map_err(|e| {
            TypeGraphError::parse(format!("Failed to set language: {}", e)).with_source(e)
        })?;

        let tree = parser.parse(source, None).ok_or_else(|| {
            TypeGraphError::parse("Failed to parse source code")
                .with_file(file_path)
        })?;

        let parsed = self.convert_tree(&tree, source, file_path, version);

        trace!(
            file = %file_path.display(),
            %version,
            statements = parsed.statements.len(),
            "parsed declaration file"
        );
        if parsed.has_errors {
            warn!(
                file = %file_path.display(),
                errors = parsed.errors.len(),
                "declaration file has syntax errors"
            );
        }

        Ok(parsed)
    }

    fn parser_name(&self) -> &'static str {
        match self.grammar {
            Grammar::TypeScript => "tree-sitter-typescript",
            Grammar::Tsx => "tree-sitter-tsx",
        }
    }
}
