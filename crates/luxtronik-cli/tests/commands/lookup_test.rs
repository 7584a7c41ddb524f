//! Tests for the `status` and `unit` commands.

use assert_cmd::Command;
use predicates::prelude::*;

/// Test that an inactive status code is reported as such.
#[test]
fn test_status_evu_inactive() {
    let mut cmd = Command::cargo_bin("luxtronik").unwrap();
    cmd.args(["status", "3"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"label\": \"evu\""))
        .stdout(predicate::str::contains("\"icon\": \"mdi:power-plug-off\""))
        .stdout(predicate::str::contains("\"active\": false"));
}

/// Test that status labels are accepted.
#[test]
fn test_status_by_label() {
    let mut cmd = Command::cargo_bin("luxtronik").unwrap();
    cmd.args(["status", "defrost"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"code\": 4"))
        .stdout(predicate::str::contains("\"active\": true"));
}

/// Test that unmapped codes fall back to unknown.
#[test]
fn test_status_unknown_code() {
    let mut cmd = Command::cargo_bin("luxtronik").unwrap();
    cmd.args(["status", "42"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"label\": \"unknown\""))
        .stdout(predicate::str::contains("\"code\": null"));
}

/// Test the celsius unit class.
#[test]
fn test_unit_celsius() {
    let mut cmd = Command::cargo_bin("luxtronik").unwrap();
    cmd.args(["unit", "celsius"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"icon\": \"mdi:thermometer\""))
        .stdout(predicate::str::contains("\"device_class\": \"temperature\""))
        .stdout(predicate::str::contains("\"unit\": \"°C\""));
}

/// Test that unknown unit classes are rejected.
#[test]
fn test_unit_unknown() {
    let mut cmd = Command::cargo_bin("luxtronik").unwrap();
    cmd.args(["unit", "furlongs"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown unit class"));
}
