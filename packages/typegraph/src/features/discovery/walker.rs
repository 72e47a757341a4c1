//! Declaration file discovery

use std::path::{Path, PathBuf};

use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

use crate::config::ScanConfig;
use crate::shared::models::{Result, TypeGraphError};

/// Collect declaration files under `root`
///
/// Entries are visited sorted by file name within each directory, so the
/// result (and with it the batch order) is stable across runs.
pub fn discover_declaration_files(root: &Path, config: &ScanConfig) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(config.follow_links)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_skipped_dir(e, config))
    {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            TypeGraphError::discovery(format!("Walk error: {}", e))
                .with_file(path)
                .with_source(e)
        })?;

        if entry.file_type().is_file() && is_declaration_file(entry.path(), &config.file_suffix) {
            trace!(path = %entry.path().display(), "discovered declaration file");
            files.push(entry.into_path());
        }
    }

    debug!(root = %root.display(), files = files.len(), "discovered declaration files");
    Ok(files)
}

fn is_skipped_dir(entry: &DirEntry, config: &ScanConfig) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    config.skip_dirs.iter().any(|skip| *skip == name)
}

fn is_declaration_file(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().ends_with(suffix))
        .unwrap_or(false)
}
