//! Manifest-driven reconciliation of autoload targets.
//!
//! Composer fails the autoload dump when an `autoload.files` entry is
//! missing on disk. Reconciliation reads the manifest, resolves the declared
//! files and classmap directories against the project root, and creates the
//! missing ones as empty files or empty directories. Existing entries are
//! never modified, so running it twice is the same as running it once.
use serde::Serialize;
use std::io::Write;

/// Single progress line written before any target is processed.
pub const PROGRESS_MESSAGE: &str = "Making sure autoloaded files exist...";
/// Install directory Composer uses when `config.vendor-dir` is not set.
pub const DEFAULT_VENDOR_DIR: &str = "vendor";

mod ensure;
mod error;
mod manifest;
mod paths;
mod status;
mod targets;

pub use ensure::{ensure_dir, ensure_file, Ensured};
pub use error::{ReconcileError, ReconcileResult};
pub use manifest::ComposerManifest;
pub use paths::ProjectPaths;
pub use status::{target_status, StatusReport, TargetState};
pub use targets::{ReconcileTargets, TargetKind};

/// What a successful reconciliation did, as project relative paths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileReport {
    pub dev_mode: bool,
    pub created_files: Vec<String>,
    pub created_directories: Vec<String>,
    pub existing: Vec<String>,
}

impl ReconcileReport {
    pub fn created_count(&self) -> usize {
        self.created_files.len() + self.created_directories.len()
    }
}

/// Reconcile a project located by `paths`.
///
/// Build `paths` with [`ProjectPaths::from_install_root`] when starting from
/// the dependency install directory. Stops at the first failure; targets
/// processed before it stay created.
pub fn reconcile<W: Write>(
    paths: &ProjectPaths,
    dev_mode: bool,
    out: &mut W,
) -> ReconcileResult<ReconcileReport> {
    if let Err(err) = writeln!(out, "{PROGRESS_MESSAGE}") {
        tracing::warn!(error = %err, "failed to write progress message");
    }

    let manifest = ComposerManifest::load(&paths.manifest_path())?;
    let targets = ReconcileTargets::from_manifest(paths, &manifest, dev_mode);
    tracing::debug!(
        root = %paths.root().display(),
        dev_mode,
        files = targets.files.len(),
        directories = targets.directories.len(),
        "resolved autoload targets"
    );

    let mut report = ReconcileReport {
        dev_mode,
        ..ReconcileReport::default()
    };
    for file in &targets.files {
        let rel = paths.rel_path(file);
        match ensure_file(file)? {
            Ensured::Created => {
                tracing::debug!(path = %rel, "created autoload file");
                report.created_files.push(rel);
            }
            Ensured::Existing => report.existing.push(rel),
        }
    }
    for directory in &targets.directories {
        let rel = paths.rel_path(directory);
        match ensure_dir(directory)? {
            Ensured::Created => {
                tracing::debug!(path = %rel, "created classmap directory");
                report.created_directories.push(rel);
            }
            Ensured::Existing => report.existing.push(rel),
        }
    }

    tracing::info!(
        targets = targets.len(),
        created = report.created_count(),
        "autoload targets reconciled"
    );
    Ok(report)
}

/// Load the manifest and compute targets without writing anything.
pub fn project_status(paths: &ProjectPaths, dev_mode: bool) -> ReconcileResult<StatusReport> {
    let manifest = ComposerManifest::load(&paths.manifest_path())?;
    let targets = ReconcileTargets::from_manifest(paths, &manifest, dev_mode);
    if targets.is_empty() {
        tracing::debug!("manifest declares no autoload files or classmap directories");
    }
    Ok(target_status(paths, &targets, dev_mode))
}
