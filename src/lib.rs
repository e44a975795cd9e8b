//! Monolink - node dependency assembler and linker for meta/monorepo workspaces
//!
//! Monolink operates on a workspace layout where every immediate subdirectory of
//! a root folder is a candidate node project with its own `package.json`. It
//! provides two one-shot batch commands:
//!
//! - `assemble` merges the `dependencies` and `devDependencies` of every
//!   project into a single `package.json`, resolving cross-project version
//!   conflicts and filtering out privately hosted packages
//! - `link` symlinks the projects themselves into the root `node_modules`
//!   folder so that privately hosted cross-project imports resolve locally
//!
//! # Assembly Model
//!
//! Assembly runs in two passes over the scanned projects: first every
//! project's `dependencies` map is folded into the merged result, then every
//! project's `devDependencies` map. The two-pass order matters - by the time
//! any dev dependency is considered, the merged `dependencies` map already
//! reflects every project's plain-dependency declarations, so reclassification
//! decisions are made against the settled dependency set.
//!
//! Conflicts between projects are resolved with a deterministic precedence
//! policy (see [`assembler::precedence`]): the version strings are compared
//! lexicographically after stripping a leading `^` or `~` range qualifier,
//! and the greater string wins. A package declared as a plain dependency
//! anywhere is never emitted as a dev dependency - dev declarations of the
//! same name are either promoted into the dependency entry or dropped.
//!
//! Version strings that case-insensitively contain an exclusion pattern
//! (`github`, `gitlab` and `bitbucket` by default) refer to privately hosted
//! sources and are dropped from the merged result entirely; the `link`
//! command exists to wire those up as symlinks instead.
//!
//! # Core Modules
//!
//! - [`cli`] - command-line interface (`assemble` and `link` subcommands)
//! - [`core`] - crate-level error taxonomy
//! - [`manifest`] - `package.json` reading and merged-manifest serialization
//! - [`assembler`] - the aggregation engine, exclusion matching, precedence
//! - [`workspace`] - candidate project directory enumeration
//! - [`linker`] - symlink creation inside the root `node_modules`
//!
//! # Example
//!
//! ```bash
//! # merge every project's declarations into ./package.json
//! monolink assemble ~/work/meta-repo
//!
//! # only consider projects whose directory name contains "service"
//! monolink assemble --filter service ~/work/meta-repo
//!
//! # symlink projects into ~/work/meta-repo/node_modules
//! monolink link ~/work/meta-repo
//! ```

pub mod assembler;
pub mod cli;
pub mod core;
pub mod linker;
pub mod manifest;
pub mod workspace;
