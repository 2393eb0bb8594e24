//! End-to-end tests for the veche binary.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn network_file(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("network.txt");
    std::fs::write(&path, contents).unwrap();
    path
}

fn veche() -> Command {
    Command::cargo_bin("veche").unwrap()
}

#[test]
fn users_lists_every_ingested_name() {
    let dir = tempfile::tempdir().unwrap();
    let file = network_file(&dir, "adduser ana\naddfriends bora vlad\n");

    veche()
        .arg("users")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::diff("ana\nbora\nvlad\n"));
}

#[test]
fn friends_prints_direct_neighbors_only() {
    let dir = tempfile::tempdir().unwrap();
    let file = network_file(&dir, "addfriends ana bora\naddfriends bora vlad\n");

    veche()
        .args(["friends", "--user", "bora"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::diff("ana\nvlad\n"));
}

#[test]
fn suggest_prints_friends_of_friends() {
    let dir = tempfile::tempdir().unwrap();
    let file = network_file(&dir, "addfriends ana bora\naddfriends bora vlad\n");

    veche()
        .args(["suggest", "--user", "ana"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::diff("vlad\n"));
}

#[test]
fn merge_collapses_related_users() {
    let dir = tempfile::tempdir().unwrap();
    let file = network_file(&dir, "addfriends ana bora\naddfriends bora vlad\n");

    veche()
        .args(["merge", "--left", "ana", "--right", "bora"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::diff("ana\nvlad\n"));
}

#[test]
fn merge_of_unrelated_users_fails() {
    let dir = tempfile::tempdir().unwrap();
    let file = network_file(&dir, "adduser ana\nadduser bora\n");

    veche()
        .args(["merge", "--left", "ana", "--right", "bora"])
        .arg(&file)
        .assert()
        .failure();
}

#[test]
fn missing_sources_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let file = network_file(&dir, "adduser ana\n");
    let missing = dir.path().join("missing.txt");

    veche()
        .arg("users")
        .arg(&missing)
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::diff("ana\n"));
}
