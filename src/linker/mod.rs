//! Symlink creation inside the root `node_modules` folder.
//!
//! Privately hosted cross-project imports are excluded from the assembled
//! `package.json`; instead, each node project in the workspace is linked into
//! `<root>/node_modules/<project>` as a relative symlink pointing at
//! `../<project>`. Existing entries at the destination are replaced, so
//! re-linking after a project is renamed or re-created is safe.

use crate::core::Error;
use crate::manifest::PACKAGE_JSON;
use crate::workspace;
use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::Path;

/// Name of the folder symlinks are created in.
pub const NODE_MODULES: &str = "node_modules";

/// Link every node project under `root` into `<root>/node_modules`.
///
/// Only directories containing a `package.json` are linked. Returns the
/// project names that were linked, in the order they were processed.
///
/// # Errors
///
/// Fails when `<root>/node_modules` does not exist, or when removing a stale
/// entry or creating a symlink fails.
pub fn link_projects(root: &Path, filters: &[String]) -> Result<Vec<String>> {
    let node_modules = root.join(NODE_MODULES);
    if !node_modules.is_dir() {
        return Err(Error::NoNodeModules {
            root: root.to_path_buf(),
        }
        .into());
    }

    let mut linked = Vec::new();
    for project in workspace::project_directories(root, filters)? {
        if !root.join(&project).join(PACKAGE_JSON).exists() {
            continue;
        }

        let destination = node_modules.join(&project);
        let target = Path::new("..").join(&project);

        // replace any existing entry, symlink or not
        if destination.symlink_metadata().is_ok() {
            remove_entry(&destination).with_context(|| {
                format!("failed to remove existing entry at {}", destination.display())
            })?;
        }

        symlink_dir(&target, &destination).with_context(|| {
            format!(
                "failed to symlink {} to {}",
                target.display(),
                destination.display()
            )
        })?;
        tracing::debug!(project = %project, "created symlink");
        linked.push(project);
    }

    Ok(linked)
}

#[cfg(unix)]
fn symlink_dir(target: &Path, destination: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, destination)
}

#[cfg(windows)]
fn symlink_dir(target: &Path, destination: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_dir(target, destination)
}

#[cfg(unix)]
fn remove_entry(path: &Path) -> io::Result<()> {
    // symlinks, including symlinks to directories, are files on unix
    if path.symlink_metadata()?.file_type().is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

#[cfg(windows)]
fn remove_entry(path: &Path) -> io::Result<()> {
    // directory symlinks must be removed as directories on windows
    fs::remove_dir(path).or_else(|_| fs::remove_file(path))
}
