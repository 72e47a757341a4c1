//! Type model application
//!
//! extract (per file) → resolve heritage (whole batch) → merge (on demand)

mod extract;
mod merge_members;
mod resolve_heritage;

pub use extract::{extract_declarations, UNDEFINED_NAME};
pub use merge_members::{merged_members, MergedMembers};
pub use resolve_heritage::resolve_heritage;
