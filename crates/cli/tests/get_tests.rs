//! Integration tests for lookup commands (`get`, `api-key`, `openai`, `bright-data`, `show`).

mod common;

use common::{CONFIG_YML, researcher_cmd, write_fixture};
use predicates::prelude::*;
use tempfile::TempDir;

fn fixture_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path(), "config.yml", CONFIG_YML);
    dir
}

#[test]
fn test_get_scalar_uses_yaml_default() {
    let dir = fixture_dir();
    researcher_cmd(dir.path())
        .args(["get", "api.openai.model"])
        .assert()
        .success()
        .stdout("gpt-4.1\n");
}

#[test]
fn test_get_sequence_index() {
    let dir = fixture_dir();
    researcher_cmd(dir.path())
        .args(["get", "servers.1.host"])
        .assert()
        .success()
        .stdout("beta\n");
}

#[test]
fn test_get_subtree_prints_yaml() {
    let dir = fixture_dir();
    researcher_cmd(dir.path())
        .args(["get", "api.bright_data"])
        .assert()
        .success()
        .stdout(predicate::str::contains("username: researcher"));
}

#[test]
fn test_get_missing_key_with_default() {
    let dir = fixture_dir();
    researcher_cmd(dir.path())
        .args(["get", "api.openai.organization", "--default", "none"])
        .assert()
        .success()
        .stdout("none\n");
}

#[test]
fn test_process_env_beats_dotenv_and_default() {
    let dir = fixture_dir();
    write_fixture(dir.path(), ".env", "RESEARCHER_CLI_MODEL=from-dotenv\n");

    researcher_cmd(dir.path())
        .args(["get", "api.openai.model"])
        .assert()
        .success()
        .stdout("from-dotenv\n");

    researcher_cmd(dir.path())
        .env("RESEARCHER_CLI_MODEL", "from-process")
        .args(["get", "api.openai.model"])
        .assert()
        .success()
        .stdout("from-process\n");
}

#[test]
fn test_api_key_is_masked_unless_revealed() {
    let dir = fixture_dir();
    write_fixture(dir.path(), ".env", "RESEARCHER_CLI_OPENAI_KEY=sk-from-dotenv\n");

    researcher_cmd(dir.path())
        .args(["api-key", "openai"])
        .assert()
        .success()
        .stdout("********\n");

    researcher_cmd(dir.path())
        .args(["api-key", "openai", "--reveal"])
        .assert()
        .success()
        .stdout("sk-from-dotenv\n");
}

#[test]
fn test_openai_block_json() {
    let dir = fixture_dir();
    let output = researcher_cmd(dir.path())
        .env("RESEARCHER_CLI_MAX_TOKENS", "2048")
        .arg("openai")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["api_key"], "********");
    assert_eq!(json["model"], "gpt-4.1");
    assert_eq!(json["max_tokens"], 2048);
}

#[test]
fn test_bright_data_block_json() {
    let dir = fixture_dir();
    let output = researcher_cmd(dir.path())
        .arg("bright-data")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["api_key"], "");
    assert_eq!(json["username"], "researcher");
    assert!(json["base_url"].is_null());
}

#[test]
fn test_show_redacts_secrets() {
    let dir = fixture_dir();
    researcher_cmd(dir.path())
        .env("RESEARCHER_CLI_OPENAI_KEY", "sk-very-secret")
        .args(["show", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sk-very-secret").not())
        .stdout(predicate::str::contains("********"));
}

#[test]
fn test_env_reports_development_from_dotenv() {
    let dir = fixture_dir();
    write_fixture(dir.path(), ".env", "ENVIRONMENT=development\n");

    researcher_cmd(dir.path())
        .arg("env")
        .assert()
        .success()
        .stdout(predicate::str::contains("environment: development"))
        .stdout(predicate::str::contains("development: true"));
}

#[test]
fn test_env_defaults_to_production() {
    let dir = fixture_dir();
    researcher_cmd(dir.path())
        .arg("env")
        .assert()
        .success()
        .stdout(predicate::str::contains("environment: production"))
        .stdout(predicate::str::contains("development: false"))
        .stdout(predicate::str::contains("debug: false"));
}
