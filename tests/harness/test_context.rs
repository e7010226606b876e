//! Shared testing harness for `path-discovery` integration tests.

use assert_cmd::Command;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated filesystem with a few paths that exist and a place for mapping files.
pub(crate) struct TestContext {
    root: TempDir,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        fs::create_dir_all(root.path().join("etc/nginx")).expect("Failed to create nginx dir");
        fs::write(root.path().join("etc/hosts"), "127.0.0.1 localhost\n")
            .expect("Failed to write hosts file");
        Self { root }
    }

    pub(crate) fn root(&self) -> &Path {
        self.root.path()
    }

    /// Path under the test root, whether or not it exists.
    pub(crate) fn path(&self, relative: &str) -> String {
        self.root.path().join(relative).to_string_lossy().into_owned()
    }

    /// Write a mapping file from `(relative path, subscriptions)` pairs and return its location.
    pub(crate) fn write_mapping(&self, name: &str, entries: Vec<(&str, Vec<&str>)>) -> String {
        let entries: Vec<_> = entries
            .into_iter()
            .map(|(path, subs)| json!({ "path": self.path(path), "subs": subs }))
            .collect();
        self.write_raw(name, &serde_json::Value::Array(entries).to_string())
    }

    /// Write arbitrary content as a mapping file.
    pub(crate) fn write_raw(&self, name: &str, content: &str) -> String {
        let file: PathBuf = self.root.path().join("mappings").join(name);
        fs::create_dir_all(file.parent().expect("mapping file has a parent"))
            .expect("Failed to create mappings dir");
        fs::write(&file, content).expect("Failed to write mapping file");
        file.to_string_lossy().into_owned()
    }

    /// Build a command for the compiled binary with a clean environment.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("path-discovery").expect("Failed to locate binary");
        cmd.current_dir(self.root())
            .env_remove("PATHS_FILE")
            .env_remove("SUBSCRIPTION_PREFIX")
            .env_remove("RUST_LOG");
        cmd
    }
}
