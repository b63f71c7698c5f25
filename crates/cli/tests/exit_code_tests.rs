//! Integration tests for structured exit codes.
//!
//! These tests verify that researcher-cli returns the correct exit codes
//! for different error scenarios, enabling reliable shell scripting.

mod common;

use common::{CONFIG_YML, researcher_cmd, write_fixture};
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_success_returns_exit_code_0() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path(), "config.yml", CONFIG_YML);
    researcher_cmd(dir.path()).arg("env").assert().code(0);
}

#[test]
fn test_missing_config_returns_exit_code_2() {
    let dir = TempDir::new().unwrap();
    researcher_cmd(dir.path())
        .args(["--config", "absent.yml", "env"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_malformed_config_returns_exit_code_2() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path(), "config.yml", "api: [unclosed\n");
    researcher_cmd(dir.path())
        .arg("env")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_missing_key_returns_exit_code_3() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path(), "config.yml", CONFIG_YML);
    researcher_cmd(dir.path())
        .args(["get", "api.openai.nope"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Key not found: api.openai.nope"));
}

#[test]
fn test_missing_api_key_returns_exit_code_3() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path(), "config.yml", CONFIG_YML);
    researcher_cmd(dir.path())
        .args(["api-key", "anthropic"])
        .assert()
        .code(3);
}

#[test]
fn test_bad_max_tokens_returns_exit_code_4() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path(), "config.yml", CONFIG_YML);
    researcher_cmd(dir.path())
        .env("RESEARCHER_CLI_MAX_TOKENS", "plenty")
        .arg("openai")
        .assert()
        .code(4);
}
