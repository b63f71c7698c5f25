//! YAML config file reading.
//!
//! Responsibilities:
//! - Read the YAML document into a raw `serde_yaml::Value` tree.
//! - Distinguish a missing file from unreadable and malformed ones.
//!
//! Invariants:
//! - An empty document is an empty mapping, never null.

use std::io::ErrorKind;
use std::path::Path;

use serde_yaml::{Mapping, Value};
use tracing::debug;

use super::error::ConfigError;

/// Reads and parses the YAML config file from disk.
pub(crate) fn read_config_file(path: &Path) -> Result<Value, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::ConfigFileMissing {
            path: path.to_path_buf(),
        },
        _ => ConfigError::ConfigFileRead {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let raw = parse_config_str(&content).map_err(|e| ConfigError::ConfigFileParse {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!(path = %path.display(), "read config file");
    Ok(raw)
}

/// Parse YAML text, treating an empty document as an empty mapping.
pub(crate) fn parse_config_str(content: &str) -> Result<Value, serde_yaml::Error> {
    match serde_yaml::from_str::<Value>(content)? {
        Value::Null => Ok(Value::Mapping(Mapping::new())),
        other => Ok(other),
    }
}
