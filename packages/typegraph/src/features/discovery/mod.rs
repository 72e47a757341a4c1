//! Discovery Feature
//!
//! Enumerates the declaration files of a directory tree with `walkdir`.

mod walker;

pub use walker::discover_declaration_files;
