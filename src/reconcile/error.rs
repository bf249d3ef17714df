//! Failure taxonomy for manifest reconciliation.
//!
//! Every variant is fatal: the caller aborts the autoload dump and reports
//! the message, which always names the offending path.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias for reconciliation steps.
pub type ReconcileResult<T> = Result<T, ReconcileError>;

#[derive(Debug, Error)]
pub enum ReconcileError {
    /// The install root has no parent, so there is no project root.
    #[error("install root {} has no parent directory", install_root.display())]
    MissingProjectRoot { install_root: PathBuf },

    /// The manifest could not be read from disk.
    #[error("cannot read manifest {}", path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The manifest is not valid JSON or has wrongly typed autoload keys.
    #[error("cannot parse manifest {}", path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Directory \"{}\" was not created", path.display())]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("File \"{}\" was not created", path.display())]
    FileCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ReconcileError {
    /// True for failures raised before any filesystem mutation.
    pub fn is_manifest_error(&self) -> bool {
        matches!(
            self,
            ReconcileError::ManifestRead { .. } | ReconcileError::ManifestParse { .. }
        )
    }
}
