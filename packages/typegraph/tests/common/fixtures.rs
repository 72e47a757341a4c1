//! Test fixtures

use std::fs;
use std::path::Path;

use typegraph::{DeclId, ScanConfig, TypeBatch, TypeScanner};

/// Model in-memory `(path, source)` pairs with the default configuration
pub fn scan_sources(sources: &[(&str, &str)]) -> TypeBatch {
    TypeScanner::new(ScanConfig::default())
        .expect("default config is valid")
        .scan_sources(sources)
        .expect("sources should scan")
}

/// Write `(relative path, contents)` pairs below `root`
pub fn write_tree(root: &Path, files: &[(&str, &str)]) {
    for (relative, contents) in files {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create fixture dir");
        }
        fs::write(path, contents).expect("write fixture");
    }
}

/// Merged members of `id` as `(member name, declaring type name)` pairs
pub fn merged_owners(batch: &TypeBatch, id: DeclId) -> Vec<(String, String)> {
    batch
        .merged_members(id)
        .iter()
        .map(|(name, member)| (name.to_string(), batch[member.owner].name.clone()))
        .collect()
}

/// `merged_owners` of the first declaration named `name`
pub fn merged_owners_of(batch: &TypeBatch, name: &str) -> Vec<(String, String)> {
    let decl = batch
        .first_named(name)
        .unwrap_or_else(|| panic!("no declaration named {}", name));
    merged_owners(batch, decl.id)
}

/// Build expected `(name, owner)` pairs
pub fn owners(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(name, owner)| (name.to_string(), owner.to_string()))
        .collect()
}
