use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[allow(deprecated)]
fn cairn_cmd(tmp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cairn").unwrap();
    cmd.env("CAIRN_CONFIG", tmp.path().join("no-global-config.toml"));
    cmd
}

fn init_project(tmp: &TempDir) -> PathBuf {
    let root = tmp.path().join("android");
    fs::create_dir_all(&root).unwrap();
    cairn_cmd(tmp)
        .current_dir(&root)
        .args(["init"])
        .assert()
        .success();
    root
}

#[test]
fn test_clean_removes_shared_build_directory() {
    let tmp = TempDir::new().unwrap();
    let root = init_project(&tmp);
    let build_dir = tmp.path().join("build");
    fs::create_dir_all(build_dir.join("app")).unwrap();
    fs::write(build_dir.join("app").join("app-release.apk"), "fake").unwrap();

    cairn_cmd(&tmp)
        .current_dir(&root)
        .args(["clean"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleaned build directory"));

    assert!(!build_dir.exists());
    assert!(root.join("Cairn.toml").exists());
}

#[test]
fn test_clean_dry_run_keeps_files() {
    let tmp = TempDir::new().unwrap();
    let root = init_project(&tmp);
    let build_dir = tmp.path().join("build");
    fs::create_dir_all(&build_dir).unwrap();

    cairn_cmd(&tmp)
        .current_dir(&root)
        .args(["clean", "--dry-run"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Would remove"));

    assert!(build_dir.exists());
}

#[test]
fn test_clean_no_build_dir_prints_nothing_to_clean() {
    let tmp = TempDir::new().unwrap();
    let root = init_project(&tmp);

    cairn_cmd(&tmp)
        .current_dir(&root)
        .args(["clean"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to clean"));
}

#[test]
fn test_clean_without_manifest_fails() {
    let tmp = TempDir::new().unwrap();

    cairn_cmd(&tmp)
        .current_dir(tmp.path())
        .args(["clean"])
        .assert()
        .failure();
}
