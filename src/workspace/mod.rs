//! Candidate project directory enumeration.
//!
//! A "project" is any immediate, non-hidden subdirectory of the workspace
//! root. When `--filter` patterns are given, only directory names containing
//! at least one pattern as a substring are kept. Whether a directory is
//! actually a node project (has a `package.json`) is decided later by the
//! manifest reader.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// List candidate project directory names under `root`, sorted by name.
///
/// Hidden directories (leading `.`) and non-directories are skipped. Sorting
/// keeps notification output stable; the merged result is insensitive to
/// processing order either way.
pub fn project_directories(root: &Path, filters: &[String]) -> Result<Vec<String>> {
    let entries = fs::read_dir(root)
        .with_context(|| format!("failed to read workspace root {}", root.display()))?;

    let mut directories = Vec::new();
    for entry in entries {
        let entry = entry
            .with_context(|| format!("failed to read entry under {}", root.display()))?;
        if !entry.file_type()?.is_dir() {
            continue;
        }

        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            tracing::debug!(?file_name, "skipping non-UTF-8 directory name");
            continue;
        };
        if name.starts_with('.') {
            continue;
        }

        if filters.is_empty() || filters.iter().any(|filter| name.contains(filter)) {
            directories.push(name.to_string());
        }
    }

    directories.sort();
    tracing::debug!(count = directories.len(), "scanned candidate project directories");
    Ok(directories)
}
