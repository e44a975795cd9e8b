//! `package.json` reading and merged-manifest serialization.
//!
//! Two manifest shapes live here:
//!
//! - [`ProjectManifest`] is the typed view of a per-project `package.json`:
//!   just the two declaration sets, everything else in the file is ignored.
//!   Both maps are validated as string-to-string at parse time, so the
//!   assembler never performs runtime type checks.
//! - [`MergedManifest`] is the output shape: name, description, and the two
//!   merged declaration sets, serialized as pretty JSON with camelCase keys.
//!
//! # Error Semantics
//!
//! [`read_manifest`] distinguishes the two failure shapes the rest of the
//! tool cares about: a project directory without a `package.json` yields
//! `Ok(None)` and is skipped, while a `package.json` that exists but does not
//! parse (or declares a non-string version) is a fatal
//! [`Error::ManifestParse`] that aborts the whole run.

use crate::core::Error;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Per-project manifest file name.
pub const PACKAGE_JSON: &str = "package.json";

/// Description stamped onto every merged manifest.
pub const GENERATED_BY: &str = "automatically generated by monolink";

/// Prefix for the merged manifest's package name.
const NAME_PREFIX: &str = "monolink";

/// The dependency declarations of a single project's `package.json`.
///
/// Maps are `BTreeMap` rather than `HashMap` so iteration (and therefore
/// notification order) is deterministic; the merged result is insensitive to
/// iteration order either way.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectManifest {
    /// Packages required at runtime, name to version-constraint string.
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,

    /// Packages required for development only.
    #[serde(default)]
    pub dev_dependencies: BTreeMap<String, String>,
}

/// The assembled `package.json` produced by `monolink assemble`.
///
/// Invariant: a package name appears in at most one of `dependencies` and
/// `dev_dependencies` - the assembler's promotion rule enforces this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedManifest {
    pub name: String,
    pub description: String,
    pub dependencies: BTreeMap<String, String>,
    pub dev_dependencies: BTreeMap<String, String>,
}

impl MergedManifest {
    /// Build the output manifest for a workspace root.
    ///
    /// The package name is derived from the root directory's basename as
    /// `monolink-<basename>`. Roots without a basename (the filesystem root,
    /// or one that is not valid UTF-8) fall back to `monolink-workspace`.
    pub fn new(
        root: &Path,
        dependencies: BTreeMap<String, String>,
        dev_dependencies: BTreeMap<String, String>,
    ) -> Self {
        let basename = root
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("workspace");

        Self {
            name: format!("{NAME_PREFIX}-{basename}"),
            description: GENERATED_BY.to_string(),
            dependencies,
            dev_dependencies,
        }
    }

    /// Serialize to pretty JSON and write to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("failed to serialize merged manifest")?;
        fs::write(path, json)
            .with_context(|| format!("failed to write merged manifest to {}", path.display()))?;
        Ok(())
    }
}

/// Read the `package.json` inside `project_dir`, if there is one.
///
/// Returns `Ok(None)` when no manifest file exists. A manifest that exists
/// but fails to parse is fatal.
pub fn read_manifest(project_dir: &Path) -> Result<Option<ProjectManifest>> {
    let path = project_dir.join(PACKAGE_JSON);
    if !path.exists() {
        return Ok(None);
    }

    let raw = fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let manifest = serde_json::from_str(&raw).map_err(|source| Error::ManifestParse {
        path: path.clone(),
        source,
    })?;

    tracing::debug!(path = %path.display(), "parsed project manifest");
    Ok(Some(manifest))
}
