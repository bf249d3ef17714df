//! Run configuration resolved from flags, Composer's environment, and the
//! manifest itself.
//!
//! Precedence is always explicit flag, then environment, then default.
use crate::cli::ProjectArgs;
use crate::reconcile::ProjectPaths;
use anyhow::{Context, Result};
use serde_json::Value;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable Composer sets for scripts (`1` or `0`).
pub const DEV_MODE_ENV: &str = "COMPOSER_DEV_MODE";

/// Everything a command needs to locate and reconcile a project.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub paths: ProjectPaths,
    pub install_root: PathBuf,
    pub dev_mode: bool,
}

/// Resolve configuration using the process environment.
pub fn resolve(args: &ProjectArgs) -> Result<RunConfig> {
    let cwd = env::current_dir().context("resolve current directory")?;
    let dev_mode_env = env::var(DEV_MODE_ENV).ok();
    resolve_with(args, &cwd, dev_mode_env.as_deref())
}

/// Resolve configuration against an explicit cwd and dev-mode variable.
pub fn resolve_with(
    args: &ProjectArgs,
    cwd: &Path,
    dev_mode_env: Option<&str>,
) -> Result<RunConfig> {
    let dev_mode = resolve_dev_mode(args.dev, args.no_dev, dev_mode_env);
    let base = match args.working_dir.as_deref() {
        Some(dir) => absolute_from(cwd, dir),
        None => cwd.to_path_buf(),
    };

    let (paths, install_root) = match args.vendor_dir.as_deref() {
        Some(vendor_dir) if vendor_dir.is_absolute() => {
            let paths = ProjectPaths::from_install_root(vendor_dir)
                .with_context(|| format!("resolve project root from {}", vendor_dir.display()))?
                .with_manifest_name(args.manifest.as_str());
            (paths, vendor_dir.to_path_buf())
        }
        // Relative vendor dirs are read like `config.vendor-dir`: from the
        // project root, which stays at the working directory.
        Some(vendor_dir) => {
            let install_root = base.join(vendor_dir);
            let paths = ProjectPaths::new(base).with_manifest_name(args.manifest.as_str());
            (paths, install_root)
        }
        None => {
            let paths = ProjectPaths::new(base).with_manifest_name(args.manifest.as_str());
            let configured = configured_vendor_dir(&paths.manifest_path());
            let install_root = paths.vendor_dir(configured.as_deref());
            (paths, install_root)
        }
    };

    tracing::debug!(
        project_root = %paths.root().display(),
        install_root = %install_root.display(),
        manifest = %paths.manifest_path().display(),
        dev_mode,
        "resolved run configuration"
    );
    Ok(RunConfig {
        paths,
        install_root,
        dev_mode,
    })
}

/// Decide dev mode: `--dev`/`--no-dev`, then `COMPOSER_DEV_MODE`, then on.
pub fn resolve_dev_mode(dev: bool, no_dev: bool, env_value: Option<&str>) -> bool {
    if dev {
        return true;
    }
    if no_dev {
        return false;
    }
    match env_value {
        Some(value) => env_flag_enabled(value),
        None => true,
    }
}

fn env_flag_enabled(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "" | "0" | "false" | "no" | "off"
    )
}

/// Read `config.vendor-dir` from the manifest, if it is a string.
///
/// A missing or broken manifest is reported by the command itself.
fn configured_vendor_dir(manifest_path: &Path) -> Option<String> {
    let bytes = fs::read(manifest_path).ok()?;
    let manifest: Value = serde_json::from_slice(&bytes).ok()?;
    manifest
        .pointer("/config/vendor-dir")
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn absolute_from(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
