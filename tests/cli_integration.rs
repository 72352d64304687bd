//! End-to-end tests for the `bn` binary.
//!
//! These exercise process exit behavior: zero status with both artifacts on
//! success, non-zero status and a diagnostic on stderr for every failure
//! kind.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const MARKER: &str = "/*{{inject_build}}*/";

fn write_project(root: &Path, minifier: &str) {
    fs::create_dir_all(root.join("src")).unwrap();
    fs::write(
        root.join("bindery.toml"),
        format!(
            r#"
                [build]
                modules = ["lib", "util"]
                source_dir = "src"
                template = "src/main.js"
                raw_out = "dist/lib.js"
                min_out = "dist/lib.min.js"

                [minifier]
                command = "{minifier}"
                output_flag = ""
            "#
        ),
    )
    .unwrap();
    fs::write(root.join("src/lib.js"), "var Lib = {};\n").unwrap();
    fs::write(root.join("src/util.js"), "Lib.util = {};\n").unwrap();
    fs::write(
        root.join("src/main.js"),
        format!("head\n{MARKER}\ntail\n"),
    )
    .unwrap();
}

fn bn() -> Command {
    Command::cargo_bin("bn").expect("binary not built")
}

#[test]
fn build_succeeds_with_both_artifacts() {
    let dir = TempDir::new().unwrap();
    write_project(dir.path(), "cp");

    bn().current_dir(dir.path()).arg("build").assert().success();

    assert!(dir.path().join("dist/lib.js").exists());
    assert!(dir.path().join("dist/lib.min.js").exists());
}

#[test]
fn build_json_emits_report() {
    let dir = TempDir::new().unwrap();
    write_project(dir.path(), "cp");

    let output = bn()
        .current_dir(dir.path())
        .args(["build", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).expect("invalid JSON report");
    assert_eq!(report["modules"], 2);
    assert!(report["raw_digest"].is_string());
}

#[test]
fn missing_module_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    write_project(dir.path(), "cp");
    fs::remove_file(dir.path().join("src/util.js")).unwrap();

    bn().current_dir(dir.path())
        .arg("build")
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing module 'util'"));
}

#[test]
fn absent_marker_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    write_project(dir.path(), "cp");
    fs::write(dir.path().join("src/main.js"), "no marker\n").unwrap();

    bn().current_dir(dir.path())
        .arg("build")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found in template"));
}

#[test]
fn minifier_failure_exits_nonzero_after_raw_write() {
    let dir = TempDir::new().unwrap();
    write_project(dir.path(), "false");

    bn().current_dir(dir.path())
        .arg("build")
        .assert()
        .failure()
        .stderr(predicate::str::contains("minification failed"));

    // Raw artifact was already written; compressed artifact never appeared.
    assert!(dir.path().join("dist/lib.js").exists());
    assert!(!dir.path().join("dist/lib.min.js").exists());
}

#[test]
fn check_reports_problems_and_fails() {
    let dir = TempDir::new().unwrap();
    write_project(dir.path(), "cp");
    fs::remove_file(dir.path().join("src/lib.js")).unwrap();

    bn().current_dir(dir.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("lib"));
}

#[test]
fn check_passes_quietly() {
    let dir = TempDir::new().unwrap();
    write_project(dir.path(), "cp");

    bn().current_dir(dir.path())
        .args(["--quiet", "check"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn no_project_config_exits_nonzero() {
    let dir = TempDir::new().unwrap();

    bn().current_dir(dir.path())
        .arg("build")
        .assert()
        .failure()
        .stderr(predicate::str::contains("bindery.toml"));
}

#[test]
fn init_scaffolds_project_file() {
    let dir = TempDir::new().unwrap();

    bn().current_dir(dir.path())
        .args(["--no-interactive", "init"])
        .assert()
        .success();

    assert!(dir.path().join("bindery.toml").exists());
}

#[test]
fn completion_prints_script() {
    bn().args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bindery"));
}
