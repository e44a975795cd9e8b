//! Command-line interface for monolink.
//!
//! Each subcommand lives in its own module with its own argument struct and
//! execution logic, mirroring the workspace operations:
//!
//! - `assemble` - merge every project's dependency declarations into a single
//!   `package.json` written to the current directory
//! - `link` - symlink node projects into the root `node_modules` folder
//!
//! Both commands take the workspace root as a positional argument and accept
//! `--filter` patterns to restrict which project directories are considered.
//!
//! # Global Options
//!
//! - `--verbose` - enable debug-level log output
//! - `--quiet` - suppress everything except errors
//!
//! # Example
//!
//! ```bash
//! monolink assemble --exclude github --exclude internal-registry ~/work/meta
//! monolink link --filter service ~/work/meta
//! ```

mod assemble;
mod link;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

pub use assemble::AssembleCommand;
pub use link::LinkCommand;

/// Main CLI structure for monolink.
///
/// Uses the `clap` derive API for parsing, help text, and validation. The
/// global verbosity flags are available to both subcommands and only affect
/// log output, never the merged result.
#[derive(Parser)]
#[command(
    name = "monolink",
    about = "Assembles and links node dependencies across meta and monorepo projects",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Assemble the dependencies and devDependencies across all projects into
    /// a single package.json file
    #[command(alias = "a")]
    Assemble(AssembleCommand),

    /// Link private projects inside of the node_modules folder at the meta or
    /// monorepo project root
    #[command(alias = "l")]
    Link(LinkCommand),
}

impl Cli {
    /// Initialize the global tracing subscriber according to the verbosity
    /// flags. `RUST_LOG` still wins at the default verbosity level.
    pub fn init_logging(&self) {
        let filter = if self.verbose {
            EnvFilter::new("debug")
        } else if self.quiet {
            EnvFilter::new("error")
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        };

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    /// Dispatch to the selected subcommand.
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Assemble(cmd) => cmd.execute(self.quiet),
            Commands::Link(cmd) => cmd.execute(self.quiet),
        }
    }
}
