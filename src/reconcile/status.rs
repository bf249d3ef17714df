//! Read-only view of how far a project is from reconciled.
use super::ensure::has_kind;
use super::{ProjectPaths, ReconcileTargets, TargetKind};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetState {
    Present,
    Missing,
    /// Exists, but as a directory where a file is declared or vice versa.
    WrongKind,
}

#[derive(Debug, Clone, Serialize)]
pub struct TargetStatus {
    pub path: String,
    pub kind: TargetKind,
    pub state: TargetState,
}

/// Status report for every target, in processing order.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub project_root: String,
    pub dev_mode: bool,
    pub targets: Vec<TargetStatus>,
}

impl StatusReport {
    /// True when every target exists with its declared kind.
    pub fn is_reconciled(&self) -> bool {
        self.targets
            .iter()
            .all(|target| target.state == TargetState::Present)
    }

    pub fn count(&self, state: TargetState) -> usize {
        self.targets
            .iter()
            .filter(|target| target.state == state)
            .count()
    }
}

/// Inspect each target without touching the filesystem.
pub fn target_status(
    paths: &ProjectPaths,
    targets: &ReconcileTargets,
    dev_mode: bool,
) -> StatusReport {
    let targets = targets
        .iter()
        .map(|(kind, path)| {
            let state = match has_kind(path, kind == TargetKind::Directory) {
                None => TargetState::Missing,
                Some(true) => TargetState::Present,
                Some(false) => TargetState::WrongKind,
            };
            TargetStatus {
                path: paths.rel_path(path),
                kind,
                state,
            }
        })
        .collect();
    StatusReport {
        project_root: paths.root().display().to_string(),
        dev_mode,
        targets,
    }
}
