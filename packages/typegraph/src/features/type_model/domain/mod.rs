//! Type model domain

mod batch;
mod declaration;
mod heritage;
mod member;

pub use batch::TypeBatch;
pub use declaration::{DeclId, Declaration, DeclarationHeader, DeclarationKind, Origin};
pub use heritage::{HeritageClause, HeritageReference};
pub use member::{Member, MemberKind};
