//! Error taxonomy for monolink.
//!
//! Monolink is a one-shot batch tool, so the taxonomy is deliberately small:
//! every failure is fatal and aborts the whole run before any merged manifest
//! is written. Resolution outcomes during assembly (added, updated, skipped,
//! excluded, promoted) are classifications, not errors - they are only ever
//! reported as notifications.
//!
//! Notably absent: a missing `package.json` in a project directory is not an
//! error at all; such projects are silently skipped.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal failures surfaced by monolink itself.
///
/// I/O errors from the standard library are wrapped with `anyhow::Context`
/// at the call sites instead of being enumerated here.
#[derive(Debug, Error)]
pub enum Error {
    /// A `package.json` exists but cannot be parsed as valid structured data.
    ///
    /// This includes dependency maps whose values are not strings. Raised
    /// before any aggregation occurs, so no partial merged manifest is ever
    /// produced.
    #[error("failed to parse manifest at {}", path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// `link` requires an existing `node_modules` folder at the workspace root.
    #[error("no node_modules folder found at {}", root.display())]
    NoNodeModules { root: PathBuf },

    /// The workspace root argument does not point at a directory.
    #[error("{} is not a directory", path.display())]
    NotADirectory { path: PathBuf },
}
