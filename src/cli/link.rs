//! Link private projects inside of the `node_modules` folder at the meta or
//! monorepo project root.
//!
//! For every candidate project directory containing a `package.json`, a
//! relative symlink `node_modules/<project>` -> `../<project>` is created at
//! the workspace root, replacing any existing entry. This makes privately
//! hosted packages (which `assemble` excludes from the merged manifest)
//! resolvable by the node module loader.
//!
//! # Examples
//!
//! ```bash
//! monolink link ~/work/meta-repo
//! monolink link --filter service ~/work/meta-repo
//! ```

use crate::linker;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

/// Command to symlink node projects into the root `node_modules`.
#[derive(Args)]
pub struct LinkCommand {
    /// Root of the meta or monorepo workspace
    root: PathBuf,

    /// Patterns to include in projects
    #[arg(short, long, value_name = "PATTERN")]
    filter: Vec<String>,
}

impl LinkCommand {
    /// Create the symlinks and report each one.
    pub fn execute(self, quiet: bool) -> Result<()> {
        let root = self
            .root
            .canonicalize()
            .with_context(|| format!("failed to resolve workspace root {}", self.root.display()))?;

        let linked = linker::link_projects(&root, &self.filter)?;

        if !quiet {
            for project in &linked {
                println!("symlinked {project} to ./node_modules/{project}");
            }
            println!(
                "{}",
                "finished linking private dependencies to ./node_modules".green()
            );
        }
        Ok(())
    }
}
