//! Tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test YAML file loading and its failure modes.
//! - Test dotenv parsing, the `DOTENV_DISABLED` gate, and secret-safe errors.
//! - Test tier precedence end to end through `ConfigLoader::build`.
//!
//! Does NOT handle:
//! - Placeholder scanning details (tested in placeholder.rs).
//! - Accessor behavior on the resolved tree (tested in resolved.rs).
//!
//! Invariants:
//! - Tests that touch process environment variables use `serial_test`.
//! - Environment mutations go through `temp_env` so they are restored afterwards.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::fs;
use std::path::{Path, PathBuf};


/// Write `content` to `name` inside `dir` and return the full path.
pub fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write fixture");
    path
}
