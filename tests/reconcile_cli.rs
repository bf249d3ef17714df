//! End-to-end runs of `autoload-guard reconcile` the way Composer invokes it
//! from a `pre-autoload-dump` script.

mod common;

use common::{stderr, stdout, ProjectFixture};

const MANIFEST: &str = r#"{
    "name": "acme/plugin",
    "autoload": {
        "files": ["build/hooks.php"],
        "classmap": ["src/generated"]
    },
    "autoload-dev": {
        "files": ["tests/bootstrap.php"],
        "classmap": ["tests/fixtures"]
    }
}"#;

#[test]
fn reconcile_creates_missing_targets() {
    let project = ProjectFixture::new(MANIFEST);
    let vendor_dir = project.vendor_dir();

    let output = project.run(&[
        "reconcile",
        "--vendor-dir",
        vendor_dir.to_str().expect("utf8 path"),
        "--no-dev",
    ]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("Making sure autoloaded files exist..."));
    assert!(project.path("build/hooks.php").is_file());
    assert!(project.path("src/generated").is_dir());
    assert!(!project.path("tests").exists());
}

#[test]
fn composer_dev_mode_env_includes_dev_entries() {
    let project = ProjectFixture::new(MANIFEST);

    let output = project
        .command()
        .arg("pre-autoload-dump")
        .env("COMPOSER_VENDOR_DIR", project.vendor_dir())
        .env("COMPOSER_DEV_MODE", "1")
        .output()
        .expect("run autoload-guard");

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(project.path("tests/bootstrap.php").is_file());
    assert!(project.path("tests/fixtures").is_dir());
}

#[test]
fn composer_dev_mode_zero_skips_dev_entries() {
    let project = ProjectFixture::new(MANIFEST);

    let output = project
        .command()
        .arg("reconcile")
        .env("COMPOSER_DEV_MODE", "0")
        .output()
        .expect("run autoload-guard");

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(project.path("build/hooks.php").is_file());
    assert!(!project.path("tests/bootstrap.php").exists());
}

#[test]
fn existing_file_content_survives() {
    let project = ProjectFixture::new(MANIFEST);
    std::fs::create_dir_all(project.path("build")).expect("create build dir");
    std::fs::write(project.path("build/hooks.php"), "<?php // scoped\n").expect("write hooks");

    let output = project.run(&["reconcile", "--dev"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        std::fs::read_to_string(project.path("build/hooks.php")).expect("read hooks"),
        "<?php // scoped\n"
    );
}

#[test]
fn json_report_lists_created_paths() {
    let project = ProjectFixture::new(MANIFEST);

    let output = project.run(&["reconcile", "--no-dev", "--json"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let report: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("parse report JSON");
    assert_eq!(report["dev_mode"], false);
    assert_eq!(report["created_files"][0], "build/hooks.php");
    assert_eq!(report["created_directories"][0], "src/generated");
}

#[test]
fn malformed_manifest_fails_loudly() {
    let project = ProjectFixture::new("{ not json");

    let output = project.run(&["reconcile"]);

    assert!(!output.status.success());
    let message = stderr(&output);
    assert!(message.contains("composer.json"), "stderr: {message}");
    assert!(message.contains("cannot parse manifest"), "stderr: {message}");
}

#[test]
fn blocked_directory_names_the_path() {
    let project = ProjectFixture::new(r#"{"autoload": {"files": ["build/hooks.php"]}}"#);
    std::fs::write(project.path("build"), "in the way").expect("write blocker");

    let output = project.run(&["reconcile"]);

    assert!(!output.status.success());
    let message = stderr(&output);
    assert!(message.contains("was not created"), "stderr: {message}");
    assert!(message.contains("build"), "stderr: {message}");
}

#[test]
fn custom_manifest_name_from_composer_env() {
    let project = ProjectFixture::new("{}");
    std::fs::write(
        project.path("composer-alt.json"),
        r#"{"autoload": {"files": ["alt.php"]}}"#,
    )
    .expect("write alternate manifest");

    let output = project
        .command()
        .arg("reconcile")
        .env("COMPOSER", "composer-alt.json")
        .output()
        .expect("run autoload-guard");

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(project.path("alt.php").is_file());
}
