//! Shared test infrastructure for integration tests.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A throwaway Composer project with a manifest and a vendor dir.
pub struct ProjectFixture {
    temp_dir: TempDir,
}

impl ProjectFixture {
    /// Create a project whose `composer.json` holds `manifest`.
    pub fn new(manifest: &str) -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        std::fs::write(temp_dir.path().join("composer.json"), manifest).expect("write manifest");
        std::fs::create_dir_all(temp_dir.path().join("vendor")).expect("create vendor dir");
        Self { temp_dir }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn vendor_dir(&self) -> PathBuf {
        self.root().join("vendor")
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Build a command with a clean Composer environment.
    pub fn command(&self) -> Command {
        let mut command = Command::new(env!("CARGO_BIN_EXE_autoload-guard"));
        command
            .current_dir(self.root())
            .env_remove("COMPOSER")
            .env_remove("COMPOSER_DEV_MODE")
            .env_remove("COMPOSER_VENDOR_DIR")
            .env_remove("RUST_LOG");
        command
    }

    /// Run `autoload-guard <args>` from the project root.
    pub fn run(&self, args: &[&str]) -> Output {
        self.command().args(args).output().expect("run autoload-guard")
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
