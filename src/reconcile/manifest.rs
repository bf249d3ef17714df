//! Composer manifest model.
//!
//! Only the autoload keys reconciliation reads are modeled; everything else
//! in the manifest is ignored, whatever its shape.
use super::{ReconcileError, ReconcileResult};
use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::Path;

/// Subset of `composer.json` used to compute autoload targets.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComposerManifest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub autoload: AutoloadSection,

    #[serde(
        default,
        rename = "autoload-dev",
        deserialize_with = "null_as_default"
    )]
    pub autoload_dev: AutoloadSection,
}

/// An `autoload` or `autoload-dev` block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AutoloadSection {
    /// Files included unconditionally by the autoloader.
    #[serde(default, deserialize_with = "null_as_default")]
    pub files: Vec<String>,

    /// Directories scanned to build the class map.
    #[serde(default, deserialize_with = "null_as_default")]
    pub classmap: Vec<String>,
}

/// `null` counts the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ComposerManifest {
    /// Load and parse a manifest from disk.
    pub fn load(path: &Path) -> ReconcileResult<Self> {
        let bytes = fs::read(path).map_err(|source| ReconcileError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &bytes)
    }

    /// Parse manifest bytes; `path` is only used for error reporting.
    pub fn parse(path: &Path, bytes: &[u8]) -> ReconcileResult<Self> {
        serde_json::from_slice(bytes).map_err(|source| ReconcileError::ManifestParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Files to ensure, in declaration order, dev entries appended last.
    pub fn autoload_files(&self, dev_mode: bool) -> Vec<&str> {
        let mut files: Vec<&str> = self.autoload.files.iter().map(String::as_str).collect();
        if dev_mode {
            files.extend(self.autoload_dev.files.iter().map(String::as_str));
        }
        files
    }

    /// Classmap directories to ensure, in declaration order, dev entries last.
    pub fn classmap_dirs(&self, dev_mode: bool) -> Vec<&str> {
        let mut dirs: Vec<&str> = self
            .autoload
            .classmap
            .iter()
            .map(String::as_str)
            .collect();
        if dev_mode {
            dirs.extend(self.autoload_dev.classmap.iter().map(String::as_str));
        }
        dirs
    }
}
