//! Tests for the `write` command.

use assert_cmd::Command;
use predicates::prelude::*;

/// Test that numeric values stay numbers.
#[test]
fn test_write_numeric_value() {
    let mut cmd = Command::cargo_bin("luxtronik").unwrap();
    cmd.args(["write", "--parameter", "ID_Einst_BWS_akt", "--value", "48.5"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"parameter\": \"ID_Einst_BWS_akt\""))
        .stdout(predicate::str::contains("\"value\": 48.5"));
}

/// Test that negative numbers are accepted as values.
#[test]
fn test_write_negative_value() {
    let mut cmd = Command::cargo_bin("luxtronik").unwrap();
    cmd.args(["write", "--parameter", "ID_Einst_WK_akt", "--value", "-2"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"value\": -2"));
}

/// Test that text values are sent as strings.
#[test]
fn test_write_text_value() {
    let mut cmd = Command::cargo_bin("luxtronik").unwrap();
    cmd.args(["write", "--parameter", "ID_Ba_Hz_akt", "--value", "Party"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"value\": \"Party\""));
}

/// Test that an empty parameter name is rejected.
#[test]
fn test_write_empty_parameter() {
    let mut cmd = Command::cargo_bin("luxtronik").unwrap();
    cmd.args(["write", "--parameter", "", "--value", "1"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Parameter name must not be empty"));
}
