//! Scan use case
//!
//! discovery → parse (rayon, order preserving) → extract → resolve heritage
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use typegraph::usecases::{scan_for_types, ScanOptions};
//!
//! let batch = scan_for_types("node_modules/@types/node", &ScanOptions::default())?;
//! for decl in &batch {
//!     let merged = batch.merged_members(decl.id);
//!     println!("{} {}: {} members", decl.kind, decl.name, merged.len());
//! }
//! ```

use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::ScanConfig;
use crate::features::discovery::discover_declaration_files;
use crate::features::parsing::domain::{LanguageVersion, ParsedFile};
use crate::features::parsing::infrastructure::TreeSitterDeclarationParser;
use crate::features::parsing::ports::DeclarationParser;
use crate::features::type_model::application::{extract_declarations, resolve_heritage};
use crate::features::type_model::domain::{DeclId, TypeBatch};
use crate::shared::models::{Result, TypeGraphError};

/// Options of a one-shot scan
#[derive(Clone, Default)]
pub struct ScanOptions {
    pub config: ScanConfig,
    parser: Option<Arc<dyn DeclarationParser>>,
}

impl ScanOptions {
    pub fn new(config: ScanConfig) -> Self {
        Self {
            config,
            parser: None,
        }
    }

    /// Builder: Set language version
    pub fn with_language_version(mut self, version: LanguageVersion) -> Self {
        self.config.language_version = version;
        self
    }

    /// Builder: Replace the tree-sitter parser
    pub fn with_parser(mut self, parser: Arc<dyn DeclarationParser>) -> Self {
        self.parser = Some(parser);
        self
    }
}

impl fmt::Debug for ScanOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScanOptions")
            .field("config", &self.config)
            .field("parser", &self.parser.as_ref().map(|p| p.parser_name()))
            .finish()
    }
}

/// Scan every declaration file under `dir` into one batch
pub fn scan_for_types(dir: impl AsRef<Path>, options: &ScanOptions) -> Result<TypeBatch> {
    let mut scanner = TypeScanner::new(options.config.clone())?;
    if let Some(parser) = &options.parser {
        scanner = scanner.with_parser(Arc::clone(parser));
    }
    scanner.scan_dir(dir.as_ref())
}

/// Reusable scanner
pub struct TypeScanner {
    config: ScanConfig,
    parser: Arc<dyn DeclarationParser>,
}

impl TypeScanner {
    /// Scanner with the tree-sitter parser
    pub fn new(config: ScanConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            parser: Arc::new(TreeSitterDeclarationParser::new()),
        })
    }

    pub fn with_parser(mut self, parser: Arc<dyn DeclarationParser>) -> Self {
        self.parser = parser;
        self
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Discover, parse and model every declaration file under `dir`
    pub fn scan_dir(&self, dir: &Path) -> Result<TypeBatch> {
        let start = Instant::now();

        let files = discover_declaration_files(dir, &self.config)?;
        let parsed = self.run_parallel(&files, |path| self.read_and_parse(path))?;
        let batch = self.build_batch(&parsed);

        info!(
            dir = %dir.display(),
            files = files.len(),
            declarations = batch.len(),
            parser = self.parser.parser_name(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "scanned declaration files"
        );
        Ok(batch)
    }

    /// Model in-memory sources, in the given order
    pub fn scan_sources<P, S>(&self, sources: &[(P, S)]) -> Result<TypeBatch>
    where
        P: AsRef<Path> + Sync,
        S: AsRef<str> + Sync,
    {
        let parsed = self.run_parallel(sources, |(path, text)| {
            self.parse_source(text.as_ref(), path.as_ref())
        })?;
        Ok(self.build_batch(&parsed))
    }

    fn run_parallel<T, F>(&self, items: &[T], parse: F) -> Result<Vec<ParsedFile>>
    where
        T: Sync,
        F: Fn(&T) -> Result<ParsedFile> + Send + Sync,
    {
        if self.config.parallel {
            items.par_iter().map(parse).collect()
        } else {
            items.iter().map(parse).collect()
        }
    }

    fn read_and_parse(&self, path: &Path) -> Result<ParsedFile> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            TypeGraphError::io(format!("Failed to read file: {}", e))
                .with_file(path)
                .with_source(e)
        })?;
        self.parse_source(&source, path)
    }

    fn parse_source(&self, source: &str, path: &Path) -> Result<ParsedFile> {
        let parsed = self
            .parser
            .parse(source, path, self.config.language_version)?;

        if self.config.strict_syntax {
            if let Some(first) = parsed.errors.first() {
                return Err(TypeGraphError::parse(format!(
                    "{} syntax error(s): {}",
                    parsed.errors.len(),
                    first.message
                ))
                .with_file(path)
                .with_line(first.span.start_line));
            }
        }

        Ok(parsed)
    }

    /// Extract in file order with running ids, then resolve the whole batch
    fn build_batch(&self, parsed: &[ParsedFile]) -> TypeBatch {
        let mut declarations = Vec::new();
        for file in parsed {
            let extracted = extract_declarations(file, DeclId(declarations.len()));
            debug!(
                file = %file.file_path.display(),
                declarations = extracted.len(),
                "extracted declarations"
            );
            declarations.extend(extracted);
        }

        resolve_heritage(declarations)
    }
}

impl fmt::Debug for TypeScanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeScanner")
            .field("config", &self.config)
            .field("parser", &self.parser.parser_name())
            .finish()
    }
}
