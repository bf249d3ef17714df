//! Filesystem primitives that create missing targets without touching
//! existing ones.
use super::{ReconcileError, ReconcileResult};
use std::fs::{self, DirBuilder, OpenOptions};
use std::io;
use std::path::Path;

/// Permission bits for created directories (rwxr-xr-x).
#[cfg(unix)]
pub const DIR_MODE: u32 = 0o755;

/// What an ensure call did to the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ensured {
    Created,
    Existing,
}

/// Make sure `path` exists, creating an empty file and its parents if not.
pub fn ensure_file(path: &Path) -> ReconcileResult<Ensured> {
    if path.exists() {
        return Ok(Ensured::Existing);
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_recursive(parent)?;
    }
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(_) => Ok(Ensured::Created),
        // Someone else created it after our check; leave their content alone.
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => Ok(Ensured::Existing),
        Err(source) => Err(ReconcileError::FileCreate {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Make sure `path` exists, creating it and its parents as directories if not.
pub fn ensure_dir(path: &Path) -> ReconcileResult<Ensured> {
    if path.exists() {
        return Ok(Ensured::Existing);
    }
    create_dir_recursive(path)?;
    Ok(Ensured::Created)
}

/// Create a directory tree, tolerating failures that still leave a directory.
fn create_dir_recursive(path: &Path) -> ReconcileResult<()> {
    match dir_builder().create(path) {
        Ok(()) => Ok(()),
        Err(_) if path.is_dir() => Ok(()),
        Err(source) => Err(ReconcileError::DirectoryCreate {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn dir_builder() -> DirBuilder {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }
    builder
}

/// Whether `path` currently exists with the expected kind.
pub fn has_kind(path: &Path, want_dir: bool) -> Option<bool> {
    let meta = fs::metadata(path).ok()?;
    Some(meta.is_dir() == want_dir)
}
