//! Shared test utilities for researcher-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory rooted in a temporary directory.
//! - Write config and dotenv fixtures.
//!
//! Invariants / Assumptions:
//! - Every command runs with `RESEARCHER_*` and `DOTENV_DISABLED` cleared so the
//!   host environment cannot leak in.
//! - The working directory is the fixture directory, so default paths resolve there.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_YML: &str = r#"
environment: ${ENVIRONMENT:production}
debug: ${RESEARCHER_CLI_DEBUG:false}

api:
  openai:
    api_key: ${RESEARCHER_CLI_OPENAI_KEY:sk-default}
    base_url: https://api.openai.com/v1
    model: ${RESEARCHER_CLI_MODEL:gpt-4.1}
    max_tokens: ${RESEARCHER_CLI_MAX_TOKENS:1000}
  bright_data:
    api_key: ${RESEARCHER_CLI_BRIGHT_KEY}
    username: researcher
servers:
  - host: alpha
  - host: beta
"#;

/// Returns a hermetic `researcher-cli` command running in `dir`.
pub fn researcher_cmd(dir: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("researcher-cli");
    cmd.current_dir(dir)
        .env_remove("DOTENV_DISABLED")
        .env_remove("RUST_LOG")
        .env_remove("RESEARCHER_CONFIG_PATH")
        .env_remove("RESEARCHER_DOTENV_PATH")
        .env_remove("ENVIRONMENT")
        .env_remove("RESEARCHER_CLI_DEBUG")
        .env_remove("RESEARCHER_CLI_OPENAI_KEY")
        .env_remove("RESEARCHER_CLI_MODEL")
        .env_remove("RESEARCHER_CLI_MAX_TOKENS")
        .env_remove("RESEARCHER_CLI_BRIGHT_KEY");
    cmd
}

/// Write `content` to `name` inside `dir` and return the full path.
pub fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write fixture");
    path
}
