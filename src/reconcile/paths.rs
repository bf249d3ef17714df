//! Typed paths into a Composer project layout.
//!
//! Centralizing path construction keeps manifest entries resolved the same
//! way by `reconcile` and `status`.
use super::{ReconcileError, ReconcileResult, DEFAULT_VENDOR_DIR};
use crate::cli::DEFAULT_MANIFEST_NAME;
use std::path::{Path, PathBuf};

/// Convenience wrapper for locating the manifest and autoload entries.
#[derive(Debug, Clone)]
pub struct ProjectPaths {
    root: PathBuf,
    manifest_name: String,
}

impl ProjectPaths {
    /// Create a path helper rooted at the project root.
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            manifest_name: DEFAULT_MANIFEST_NAME.to_string(),
        }
    }

    /// Derive the project root from a dependency install root.
    ///
    /// The project root is the install root's parent directory.
    pub fn from_install_root(install_root: &Path) -> ReconcileResult<Self> {
        let root = install_root
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .ok_or_else(|| ReconcileError::MissingProjectRoot {
                install_root: install_root.to_path_buf(),
            })?;
        Ok(Self::new(root.to_path_buf()))
    }

    /// Use a different manifest filename (Composer's `COMPOSER` variable).
    pub fn with_manifest_name(mut self, name: impl Into<String>) -> Self {
        self.manifest_name = name.into();
        self
    }

    /// Return the project root used for path derivation.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Return the manifest path.
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(&self.manifest_name)
    }

    /// Return the install root for a manifest-declared vendor dir.
    pub fn vendor_dir(&self, configured: Option<&str>) -> PathBuf {
        let rel = configured
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_VENDOR_DIR);
        let rel = Path::new(rel);
        if rel.is_absolute() {
            rel.to_path_buf()
        } else {
            self.root.join(rel)
        }
    }

    /// Resolve a manifest autoload entry against the project root.
    ///
    /// Entries are always placed under the root; leading separators are
    /// dropped instead of replacing the root.
    pub fn resolve_entry(&self, entry: &str) -> PathBuf {
        let trimmed = entry.trim_start_matches(['/', '\\']);
        self.root.join(trimmed)
    }

    /// Convert an absolute path into a project relative path string.
    pub fn rel_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string()
    }
}
