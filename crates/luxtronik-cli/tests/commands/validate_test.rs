//! Tests for the `validate` command.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn config_file(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

/// Test that a minimal TOML configuration is filled with defaults.
#[test]
fn test_validate_minimal_toml() {
    let file = config_file(".toml", "[luxtronik2]\nhost = \"192.168.1.20\"\n");

    let mut cmd = Command::cargo_bin("luxtronik").unwrap();
    cmd.arg("validate").arg(file.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"host\": \"192.168.1.20\""))
        .stdout(predicate::str::contains("\"port\": 8888"))
        .stdout(predicate::str::contains("\"safe\": true"))
        .stdout(predicate::str::contains("\"update_immediately_after_write\": false"));
}

/// Test that JSON files keep unknown keys of the integration block.
#[test]
fn test_validate_json_with_extras() {
    let file = config_file(
        ".json",
        r#"{"luxtronik2": {"host": "heatpump", "port": 8889, "language_sensor_names": "de"}, "http": {}}"#,
    );

    let mut cmd = Command::cargo_bin("luxtronik").unwrap();
    cmd.arg("validate").arg(file.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"port\": 8889"))
        .stdout(predicate::str::contains("\"language_sensor_names\": \"de\""));
}

/// Test that a configuration without host fails.
#[test]
fn test_validate_missing_host() {
    let file = config_file(".toml", "[luxtronik2]\nport = 8888\n");

    let mut cmd = Command::cargo_bin("luxtronik").unwrap();
    cmd.arg("validate").arg(file.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing required key: host"));
}

/// Test that an out-of-range port fails.
#[test]
fn test_validate_bad_port() {
    let file = config_file(".toml", "[luxtronik2]\nhost = \"h\"\nport = 70000\n");

    let mut cmd = Command::cargo_bin("luxtronik").unwrap();
    cmd.arg("validate").arg(file.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

/// Test that a missing file is reported.
#[test]
fn test_validate_missing_file() {
    let mut cmd = Command::cargo_bin("luxtronik").unwrap();
    cmd.arg("validate").arg("/nonexistent/luxtronik.toml");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}
