//! `autoload-guard status` is a read-only view of the same targets.

mod common;

use common::{stderr, stdout, ProjectFixture};

const MANIFEST: &str = r#"{
    "autoload": {"files": ["present.php", "missing.php"], "classmap": ["lib"]}
}"#;

#[test]
fn status_reports_missing_targets_without_creating_them() {
    let project = ProjectFixture::new(MANIFEST);
    std::fs::write(project.path("present.php"), "").expect("write present.php");

    let output = project.run(&["status", "--no-dev"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("present    file present.php"), "stdout: {text}");
    assert!(text.contains("missing    file missing.php"), "stdout: {text}");
    assert!(text.contains("missing    dir  lib"), "stdout: {text}");
    assert!(!project.path("missing.php").exists());
    assert!(!project.path("lib").exists());
}

#[test]
fn status_check_fails_until_reconciled() {
    let project = ProjectFixture::new(MANIFEST);
    let vendor_dir = project.vendor_dir();
    let vendor_dir = vendor_dir.to_str().expect("utf8 path");

    let before = project.run(&["status", "--check", "--vendor-dir", vendor_dir]);
    assert!(!before.status.success());
    assert!(stderr(&before).contains("missing"));

    let reconcile = project.run(&["reconcile", "--vendor-dir", vendor_dir]);
    assert!(reconcile.status.success(), "stderr: {}", stderr(&reconcile));

    let after = project.run(&["status", "--check", "--vendor-dir", vendor_dir]);
    assert!(after.status.success(), "stderr: {}", stderr(&after));
}

#[test]
fn status_json_lists_states() {
    let project = ProjectFixture::new(MANIFEST);

    let output = project.run(&["status", "--json"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let status: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("parse JSON");
    assert_eq!(status["dev_mode"], true);
    let targets = status["targets"].as_array().expect("targets array");
    assert_eq!(targets.len(), 3);
    assert_eq!(targets[0]["path"], "present.php");
    assert_eq!(targets[0]["state"], "missing");
    assert_eq!(targets[2]["kind"], "directory");
}

#[test]
fn status_text_uses_wrong_kind_label() {
    let project = ProjectFixture::new(MANIFEST);
    std::fs::create_dir_all(project.path("missing.php")).expect("create directory");

    let output = project.run(&["status"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("wrong_kind file missing.php"), "stdout: {text}");
}
