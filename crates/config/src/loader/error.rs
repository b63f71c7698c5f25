//! Error types for configuration loading and lookup.
//!
//! Responsibilities:
//! - Define error variants for YAML loading, dotenv reading, and key lookup.
//! - Classify load-time failures so callers can map them to exit codes.
//!
//! Does NOT handle:
//! - Placeholder syntax problems. Malformed placeholders are literal text, never errors.
//!
//! Invariants:
//! - All error variants include context for debugging (paths, dotted keys).
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or reading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found at {path}")]
    ConfigFileMissing { path: PathBuf },

    #[error("Failed to read config file at {path}: {source}")]
    ConfigFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    ConfigFileParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Unable to determine config directory: {0}")]
    ConfigDirUnavailable(String),

    #[error("Key not found: {path}")]
    KeyNotFound { path: String },

    #[error("Invalid value at {path}: {message}")]
    TypeMismatch { path: String, message: String },

    /// Failed to read the `.env` file due to an I/O error.
    ///
    /// SAFETY: Only the error kind is kept, never file contents.
    #[error("Failed to read .env file: {kind}. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvIo { kind: ErrorKind },
}

impl ConfigError {
    /// Returns true for failures that happen while loading files, as opposed to lookups.
    pub fn is_load_error(&self) -> bool {
        !matches!(
            self,
            ConfigError::KeyNotFound { .. } | ConfigError::TypeMismatch { .. }
        )
    }

    pub(crate) fn key_not_found(path: &str) -> Self {
        ConfigError::KeyNotFound {
            path: path.to_string(),
        }
    }

    pub(crate) fn type_mismatch(path: &str, message: impl Into<String>) -> Self {
        ConfigError::TypeMismatch {
            path: path.to_string(),
            message: message.into(),
        }
    }
}
