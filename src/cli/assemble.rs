//! Assemble the dependencies and devDependencies across all projects into a
//! single `package.json` file.
//!
//! The command scans the workspace root for candidate project directories,
//! reads every `package.json` it finds, and folds the declarations into an
//! [`Assembler`] in two passes: all projects' `dependencies` first, then all
//! projects' `devDependencies`. The merged manifest is written to
//! `./package.json` in the current working directory, and only after
//! aggregation fully completes - a parse failure in any project aborts the
//! run with nothing written.
//!
//! # Examples
//!
//! ```bash
//! # defaults: exclude github/gitlab/bitbucket versions, consider all projects
//! monolink assemble ~/work/meta-repo
//!
//! # custom exclusion patterns replace the defaults
//! monolink assemble -e github -e internal-registry ~/work/meta-repo
//!
//! # only projects whose directory name contains "service"
//! monolink assemble -f service ~/work/meta-repo
//! ```

use crate::assembler::{Assembler, ExclusionPatterns};
use crate::core::Error;
use crate::manifest::{self, ProjectManifest, PACKAGE_JSON};
use crate::workspace;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Command to assemble all project declarations into one `package.json`.
#[derive(Args)]
pub struct AssembleCommand {
    /// Root of the meta or monorepo workspace
    root: PathBuf,

    /// Patterns to exclude in versions
    #[arg(
        short,
        long,
        value_name = "PATTERN",
        default_values_t = ["github".to_string(), "gitlab".to_string(), "bitbucket".to_string()]
    )]
    exclude: Vec<String>,

    /// Patterns to include in projects
    #[arg(short, long, value_name = "PATTERN")]
    filter: Vec<String>,
}

impl AssembleCommand {
    /// Scan, read, fold, and write the merged manifest.
    pub fn execute(self, quiet: bool) -> Result<()> {
        let root = self
            .root
            .canonicalize()
            .with_context(|| format!("failed to resolve workspace root {}", self.root.display()))?;
        if !root.is_dir() {
            return Err(Error::NotADirectory { path: root }.into());
        }

        // Read every manifest up front: a malformed one must abort the run
        // before any folding happens.
        let mut projects: Vec<(String, ProjectManifest)> = Vec::new();
        for directory in workspace::project_directories(&root, &self.filter)? {
            if let Some(parsed) = manifest::read_manifest(&root.join(&directory))? {
                projects.push((directory, parsed));
            }
        }
        tracing::debug!(count = projects.len(), "read project manifests");

        let mut assembler = Assembler::new(ExclusionPatterns::new(self.exclude)).quiet(quiet);
        for (project, parsed) in &projects {
            assembler.fold_dependencies(project, &parsed.dependencies);
        }
        for (project, parsed) in &projects {
            assembler.fold_dev_dependencies(project, &parsed.dev_dependencies);
        }

        let merged = assembler.into_manifest(&root);
        merged.save(Path::new(PACKAGE_JSON))?;

        if !quiet {
            println!(
                "\n{}",
                format!("assembled {} into ./{PACKAGE_JSON}", merged.name).green()
            );
        }
        Ok(())
    }
}
