//! Feature modules
//!
//! - `discovery` - declaration file enumeration
//! - `parsing` - declaration text → parser-neutral statements
//! - `type_model` - declarations, heritage resolution, member merging

pub mod discovery;
pub mod parsing;
pub mod type_model;
