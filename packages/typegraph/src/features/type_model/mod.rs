//! Type Model Feature
//!
//! Declarations, heritage graph and merged members of one scan batch.
//!
//! ## Structure
//! - `domain/` - TypeBatch, Declaration, Member, HeritageClause
//! - `application/` - extraction, heritage resolution, member merging

pub mod application;
pub mod domain;

// Re-exports
pub use application::{
    extract_declarations, merged_members, resolve_heritage, MergedMembers, UNDEFINED_NAME,
};
pub use domain::{
    DeclId, Declaration, DeclarationHeader, DeclarationKind, HeritageClause, HeritageReference,
    Member, MemberKind, Origin, TypeBatch,
};
