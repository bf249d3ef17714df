use super::{ComposerManifest, ProjectPaths};
use serde::Serialize;
use std::path::PathBuf;

/// Kind of filesystem entry a target must be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    File,
    Directory,
}

/// Absolute paths derived from one manifest read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileTargets {
    pub files: Vec<PathBuf>,
    pub directories: Vec<PathBuf>,
}

impl ReconcileTargets {
    /// Resolve manifest entries against the project root.
    pub fn from_manifest(
        paths: &ProjectPaths,
        manifest: &ComposerManifest,
        dev_mode: bool,
    ) -> Self {
        let files = manifest
            .autoload_files(dev_mode)
            .into_iter()
            .map(|entry| paths.resolve_entry(entry))
            .collect();
        let directories = manifest
            .classmap_dirs(dev_mode)
            .into_iter()
            .map(|entry| paths.resolve_entry(entry))
            .collect();
        Self { files, directories }
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.directories.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len() + self.directories.len()
    }

    /// Targets in processing order: files first, then directories.
    pub fn iter(&self) -> impl Iterator<Item = (TargetKind, &PathBuf)> {
        self.files
            .iter()
            .map(|path| (TargetKind::File, path))
            .chain(
                self.directories
                    .iter()
                    .map(|path| (TargetKind::Directory, path)),
            )
    }
}
