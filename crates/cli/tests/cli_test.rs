//! Integration tests for the oas2raml binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const PETS_API: &str = r#"openapi: "3.0.0"
info:
  title: Pets API
  version: "1.0"
  license: { name: MIT }
paths:
  /pets:
    get:
      summary: List pets
      parameters:
        - { name: limit, in: query }
"#;

fn oas2raml() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("oas2raml").expect("oas2raml binary not built");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write_spec(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_convert_to_stdout() {
    let dir = TempDir::new().unwrap();
    let spec = write_spec(&dir, "openapi.yaml", PETS_API);

    oas2raml()
        .arg(&spec)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("#%RAML 1.0\n"))
        .stdout(predicate::str::contains("displayName: List pets"))
        .stderr(predicate::str::contains("info/license"));
}

#[test]
fn test_convert_to_output_file_with_report() {
    let dir = TempDir::new().unwrap();
    let spec = write_spec(&dir, "openapi.yaml", PETS_API);
    let output = dir.path().join("api.raml");
    let report = dir.path().join("diagnostics.json");

    oas2raml()
        .arg(&spec)
        .arg("--output")
        .arg(&output)
        .arg("--report")
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let raml = fs::read_to_string(&output).unwrap();
    assert!(raml.starts_with("#%RAML 1.0"));
    assert!(raml.contains("title: Pets API"));

    let diagnostics: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(diagnostics[0]["kind"], "unsupported_by_target");
    assert_eq!(diagnostics[0]["path"], "info/license");
}

#[test]
fn test_json_input() {
    let dir = TempDir::new().unwrap();
    let spec = write_spec(
        &dir,
        "openapi.json",
        r#"{"openapi": "3.1.0", "info": {"title": "JSON API"}, "paths": {}}"#,
    );

    oas2raml()
        .arg(&spec)
        .assert()
        .success()
        .stdout(predicate::str::contains("title: JSON API"));
}

#[test]
fn test_strict_fails_on_version_mismatch() {
    let dir = TempDir::new().unwrap();
    let spec = write_spec(&dir, "swagger.yaml", "openapi: '2.0'\ninfo: { title: Old }\n");

    oas2raml()
        .arg(&spec)
        .assert()
        .success();

    oas2raml()
        .arg("--strict")
        .arg(&spec)
        .assert()
        .failure()
        .stdout(predicate::str::contains("title: Old"))
        .stderr(predicate::str::contains("error diagnostic"));
}

#[test]
fn test_missing_input_file() {
    oas2raml()
        .arg("/nonexistent/openapi.yaml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load OpenAPI document"));
}
