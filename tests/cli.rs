//! CLI-level tests for startup failure paths.
//!
//! Only paths that fail before binding a socket are exercised here, so
//! the suite never races on a port.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn web_with_missing_bundle_dir_exits_one() {
    let tmp = tempfile::tempdir().unwrap();

    Command::cargo_bin("devserve")
        .unwrap()
        .current_dir(tmp.path())
        .args(["web", "--root", "no-such-bundle"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("run the web build first"));
}

#[test]
fn web_missing_bundle_names_the_directory() {
    let tmp = tempfile::tempdir().unwrap();

    Command::cargo_bin("devserve")
        .unwrap()
        .current_dir(tmp.path())
        .args(["web", "--root", "build/web"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("build/web"));
}

#[test]
fn explicit_broken_config_is_fatal() {
    let tmp = tempfile::tempdir().unwrap();
    let config = tmp.path().join("devserve.toml");
    std::fs::write(&config, "not [valid toml").unwrap();

    Command::cargo_bin("devserve")
        .unwrap()
        .current_dir(tmp.path())
        .args(["web", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("config"));
}

#[test]
fn help_lists_both_servers() {
    Command::cargo_bin("devserve")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("web").and(predicate::str::contains("mock")));
}
