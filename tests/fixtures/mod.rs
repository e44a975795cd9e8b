//! Shared fixtures for integration tests.
//!
//! [`TestWorkspace`] builds a temporary meta-repo layout: a `root/` directory
//! holding the sibling project directories, and a separate `out/` directory
//! used as the working directory for the `monolink` binary (so the merged
//! `package.json` that `assemble` writes to the cwd never collides with the
//! workspace being scanned).

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestWorkspace {
    temp: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("failed to create temp dir");
        fs::create_dir(temp.path().join("root")).unwrap();
        fs::create_dir(temp.path().join("out")).unwrap();
        Self { temp }
    }

    /// The workspace root passed to monolink as the positional argument.
    pub fn root(&self) -> PathBuf {
        self.temp.path().join("root")
    }

    /// Create a project directory containing the given `package.json` body.
    pub fn add_project(&self, name: &str, package_json: &str) {
        let dir = self.root().join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("package.json"), package_json).unwrap();
    }

    /// Create a project directory without any manifest.
    #[allow(dead_code)]
    pub fn add_bare_project(&self, name: &str) {
        fs::create_dir_all(self.root().join(name)).unwrap();
    }

    /// Create the `node_modules` folder `link` requires.
    #[allow(dead_code)]
    pub fn add_node_modules(&self) {
        fs::create_dir_all(self.root().join("node_modules")).unwrap();
    }

    /// A `monolink` command running in the output directory.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("monolink").expect("monolink binary not built");
        cmd.current_dir(self.temp.path().join("out"));
        cmd
    }

    /// Path of the merged manifest written by `assemble`.
    #[allow(dead_code)]
    pub fn merged_manifest(&self) -> PathBuf {
        self.temp.path().join("out").join("package.json")
    }

    /// Parse the merged manifest written by `assemble`.
    #[allow(dead_code)]
    pub fn merged_json(&self) -> serde_json::Value {
        let raw = fs::read_to_string(self.merged_manifest()).expect("no merged package.json");
        serde_json::from_str(&raw).expect("merged package.json is not valid JSON")
    }
}
