/*
 * Typegraph - declaration-file type model
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (Span, TypeGraphError)
 * - features/    : Vertical slices (discovery → parsing → type_model)
 * - config/      : ScanConfig (builder + YAML)
 * - usecases/    : Scan entry points and JSON report
 *
 * Pipeline:
 * - Rayon parallel parsing, order preserving
 * - Heritage resolved once over the whole batch
 * - Merged members computed on demand, cycle safe
 */

#![allow(clippy::module_inception)] // Module naming intentional

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and utilities
pub mod shared;

/// Feature modules
pub mod features;

/// Configuration system
pub mod config;

/// Usecase layer (scan_for_types, TypeScanner, BatchReport)
pub mod usecases;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{ConfigError, ScanConfig};
pub use features::discovery::discover_declaration_files;
pub use features::parsing::{
    DeclarationParser, JsDoc, JsDocTag, LanguageVersion, ParsedFile, TreeSitterDeclarationParser,
};
pub use features::type_model::{
    merged_members, DeclId, Declaration, DeclarationKind, HeritageClause, HeritageReference,
    Member, MemberKind, MergedMembers, Origin, TypeBatch,
};
pub use shared::models::{ErrorKind, Result, Span, TypeGraphError};
pub use usecases::{scan_for_types, BatchReport, ScanOptions, TypeScanner};
