//! Command handlers.
//!
//! Each handler resolves configuration, runs one reconcile step, and renders
//! the result; all filesystem policy lives in `reconcile`.
use crate::cli::{ReconcileArgs, StatusArgs};
use crate::config;
use crate::reconcile::{self, StatusReport, TargetKind, TargetState};
use anyhow::{anyhow, Context, Result};
use std::io::{self, Write};
use std::path::Path;

pub fn run_reconcile(args: ReconcileArgs) -> Result<()> {
    let config = config::resolve(&args.project)?;
    let mut progress = io::stderr().lock();
    let report = reconcile::reconcile(&config.paths, config.dev_mode, &mut progress)
        .inspect_err(|err| {
            if err.is_manifest_error() {
                tracing::debug!("manifest rejected before any filesystem change");
            }
        })
        .with_context(|| {
            format!(
                "reconcile autoload targets for {}",
                config.paths.root().display()
            )
        })?;

    if args.json {
        let text = serde_json::to_string_pretty(&report).context("serialize reconcile report")?;
        println!("{text}");
    }
    Ok(())
}

pub fn run_status(args: StatusArgs) -> Result<()> {
    let config = config::resolve(&args.project)?;
    let status = reconcile::project_status(&config.paths, config.dev_mode)
        .context("compute autoload status")?;

    if args.json {
        let text = serde_json::to_string_pretty(&status).context("serialize status report")?;
        println!("{text}");
    } else {
        print_status(&status, &config.install_root).context("write status")?;
    }

    if args.check && !status.is_reconciled() {
        return Err(anyhow!(
            "{} autoload target(s) missing, {} with the wrong kind",
            status.count(TargetState::Missing),
            status.count(TargetState::WrongKind)
        ));
    }
    Ok(())
}

fn print_status(status: &StatusReport, install_root: &Path) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "project: {}", status.project_root)?;
    writeln!(out, "install root: {}", install_root.display())?;
    writeln!(out, "dev mode: {}", if status.dev_mode { "on" } else { "off" })?;
    if status.targets.is_empty() {
        writeln!(out, "no autoload files or classmap directories declared")?;
        return Ok(());
    }
    for target in &status.targets {
        let state = match target.state {
            TargetState::Present => "present",
            TargetState::Missing => "missing",
            TargetState::WrongKind => "wrong_kind",
        };
        let kind = match target.kind {
            TargetKind::File => "file",
            TargetKind::Directory => "dir",
        };
        writeln!(out, "{state:<10} {kind:<4} {}", target.path)?;
    }
    Ok(())
}
