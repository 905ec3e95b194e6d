//! Integration tests for the inflekt CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Command with the bootstrap file pointed somewhere that does not exist
fn inflekt(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("inflekt").unwrap();
    cmd.env("INFLECT_PATH", dir.join("absent.json"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_apply_pluralize_args() {
    let dir = TempDir::new().unwrap();
    inflekt(dir.path())
        .args(["apply", "pluralize", "person", "box", "equipment"])
        .assert()
        .success()
        .stdout("people\nboxes\nequipment\n");
}

#[test]
fn test_apply_reads_stdin() {
    let dir = TempDir::new().unwrap();
    inflekt(dir.path())
        .args(["apply", "singularize"])
        .write_stdin("people\n\nmice\n")
        .assert()
        .success()
        .stdout("person\nmouse\n");
}

#[test]
fn test_apply_case_styles() {
    let dir = TempDir::new().unwrap();
    inflekt(dir.path())
        .args(["apply", "camelize", "dino_party"])
        .assert()
        .success()
        .stdout("DinoParty\n");

    inflekt(dir.path())
        .args(["apply", "tableize", "SuperPerson"])
        .assert()
        .success()
        .stdout("super_people\n");

    inflekt(dir.path())
        .args(["apply", "foreign_key", "AdminPost"])
        .assert()
        .success()
        .stdout("admin_post_id\n");
}

#[test]
fn test_apply_count_and_separator() {
    let dir = TempDir::new().unwrap();
    inflekt(dir.path())
        .args(["apply", "pluralize", "--count", "1", "cat"])
        .assert()
        .success()
        .stdout("cat\n");

    inflekt(dir.path())
        .args(["apply", "pluralize", "--count", "-1", "cat"])
        .assert()
        .success()
        .stdout("cats\n");

    inflekt(dir.path())
        .args(["apply", "parameterize", "--separator", "_", "Donald E. Knuth"])
        .assert()
        .success()
        .stdout("donald_e_knuth\n");
}

#[test]
fn test_count_with_wrong_transform() {
    let dir = TempDir::new().unwrap();
    inflekt(dir.path())
        .args(["apply", "camelize", "--count", "2", "cat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "--count only applies to pluralize",
        ));
}

#[test]
fn test_unknown_transform() {
    let dir = TempDir::new().unwrap();
    inflekt(dir.path())
        .args(["apply", "frobnicate", "cat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown transformation: frobnicate"));
}

#[test]
fn test_json_output() {
    let dir = TempDir::new().unwrap();
    let output = inflekt(dir.path())
        .args(["apply", "ordinalize", "-f", "json", "1", "22"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        parsed,
        serde_json::json!([
            { "input": "1", "output": "1st" },
            { "input": "22", "output": "22nd" },
        ])
    );
}

#[test]
fn test_json_rules_file() {
    let dir = TempDir::new().unwrap();
    let rules = dir.path().join("extra.json");
    fs::write(&rules, r#"{"cactus": "cacti"}"#).unwrap();

    inflekt(dir.path())
        .args(["apply", "pluralize", "--rules"])
        .arg(&rules)
        .arg("cactus")
        .assert()
        .success()
        .stdout("cacti\n");
}

#[test]
fn test_toml_rules_file() {
    let dir = TempDir::new().unwrap();
    let rules = dir.path().join("rules.toml");
    fs::write(&rules, "acronym = [\"HTML\"]\nuncountable = [\"furniture\"]\n").unwrap();

    inflekt(dir.path())
        .args(["apply", "underscore", "--rules"])
        .arg(&rules)
        .arg("HTMLParser")
        .assert()
        .success()
        .stdout("html_parser\n");

    inflekt(dir.path())
        .args(["apply", "pluralize", "--rules"])
        .arg(&rules)
        .arg("furniture")
        .assert()
        .success()
        .stdout("furniture\n");
}

#[test]
fn test_invalid_rules_file() {
    let dir = TempDir::new().unwrap();
    let rules = dir.path().join("bad.toml");
    fs::write(&rules, "[[plural]]\nsuffix = \"\"\nreplacement = \"x\"\n").unwrap();

    inflekt(dir.path())
        .args(["apply", "pluralize", "--rules"])
        .arg(&rules)
        .arg("cat")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Rules error"));
}

#[test]
fn test_missing_rules_file() {
    let dir = TempDir::new().unwrap();
    inflekt(dir.path())
        .args(["apply", "pluralize", "--rules"])
        .arg(dir.path().join("nope.json"))
        .arg("cat")
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("extra.json"), r#"{"octopus": "octopodes"}"#).unwrap();
    let config = dir.path().join("inflekt.toml");
    fs::write(
        &config,
        r#"
[rules]
files = ["extra.json"]

[output]
default_format = "json"
pretty_json = false
"#,
    )
    .unwrap();

    inflekt(dir.path())
        .args(["apply", "pluralize", "--config"])
        .arg(&config)
        .arg("octopus")
        .assert()
        .success()
        .stdout("[{\"input\":\"octopus\",\"output\":\"octopodes\"}]\n");
}

#[test]
fn test_bootstrap_file_from_environment() {
    let dir = TempDir::new().unwrap();
    let bootstrap = dir.path().join("inflections.json");
    fs::write(&bootstrap, r#"{"datum": "datums"}"#).unwrap();

    Command::cargo_bin("inflekt")
        .unwrap()
        .env("INFLECT_PATH", &bootstrap)
        .args(["apply", "pluralize", "datum"])
        .assert()
        .success()
        .stdout("datums\n");
}

#[test]
fn test_malformed_bootstrap_file_is_not_fatal() {
    let dir = TempDir::new().unwrap();
    let bootstrap = dir.path().join("inflections.json");
    fs::write(&bootstrap, "{ broken").unwrap();

    Command::cargo_bin("inflekt")
        .unwrap()
        .env("INFLECT_PATH", &bootstrap)
        .args(["apply", "pluralize", "person"])
        .assert()
        .success()
        .stdout("people\n");
}

#[test]
fn test_list_transforms() {
    let dir = TempDir::new().unwrap();
    inflekt(dir.path())
        .args(["list", "transforms"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("pluralize\nsingularize\n"))
        .stdout(predicate::str::contains("foreign-key-to-attribute\n"));
}

#[test]
fn test_list_acronyms_and_uncountables() {
    let dir = TempDir::new().unwrap();
    inflekt(dir.path())
        .args(["list", "acronyms"])
        .assert()
        .success()
        .stdout(predicate::str::contains("API\n"))
        .stdout(predicate::str::contains("HTTPS\n"));

    inflekt(dir.path())
        .args(["list", "uncountables"])
        .assert()
        .success()
        .stdout(predicate::str::contains("equipment\n"));
}

#[test]
fn test_help() {
    Command::cargo_bin("inflekt")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("apply"))
        .stdout(predicate::str::contains("list"));
}
