//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that picks the YAML and dotenv paths.
//! - Read both files, snapshot the process environment, and resolve placeholders.
//! - Enforce the `DOTENV_DISABLED` gate for hermetic tests.
//!
//! Does NOT handle:
//! - Placeholder syntax (see placeholder.rs).
//! - Lookups on the finished tree (see resolved.rs).
//!
//! Invariants / Assumptions:
//! - Builder paths take precedence over `RESEARCHER_*` environment variables.
//! - Environment variables take precedence over default paths.
//! - The process environment is read, never written.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::dotenv::read_dotenv;
use super::env::{EnvOverrides, env_var_or_none};
use super::error::ConfigError;
use super::file::read_config_file;
use super::path::{default_config_path, default_dotenv_path};
use crate::constants::{CONFIG_PATH_ENV, DOTENV_DISABLED_ENV, DOTENV_PATH_ENV};
use crate::resolved::ResolvedConfig;

/// Configuration loader that builds a `ResolvedConfig` from YAML, dotenv, and env vars.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    dotenv_path: Option<PathBuf>,
    skip_dotenv: bool,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(DOTENV_DISABLED_ENV).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Set the YAML config file path.
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Set the dotenv file path.
    pub fn with_dotenv_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dotenv_path = Some(path.into());
        self
    }

    /// Skip the dotenv tier regardless of paths.
    pub fn skip_dotenv(mut self) -> Self {
        self.skip_dotenv = true;
        self
    }

    /// Fill unset paths from `RESEARCHER_CONFIG_PATH` and `RESEARCHER_DOTENV_PATH`.
    ///
    /// Blank values are ignored so they fall back to the defaults.
    pub fn from_env(mut self) -> Self {
        if self.config_path.is_none() {
            self.config_path = env_var_or_none(CONFIG_PATH_ENV).map(PathBuf::from);
        }
        if self.dotenv_path.is_none() {
            self.dotenv_path = env_var_or_none(DOTENV_PATH_ENV).map(PathBuf::from);
        }
        self
    }

    /// Get the configured YAML path, if any.
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Get the configured dotenv path, if any.
    pub fn dotenv_path(&self) -> Option<&Path> {
        self.dotenv_path.as_deref()
    }

    /// Load both files and resolve every placeholder.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The YAML file is missing, unreadable, or malformed.
    /// - The dotenv file exists but cannot be read or parsed.
    ///
    /// A missing dotenv file is not an error.
    pub fn build(self) -> Result<ResolvedConfig, ConfigError> {
        let config_path = match self.config_path {
            Some(path) => path,
            None => default_config_path()
                .map_err(|e| ConfigError::ConfigDirUnavailable(e.to_string()))?,
        };
        let raw = read_config_file(&config_path)?;

        let dotenv_path = if self.skip_dotenv || Self::dotenv_disabled() {
            debug!("dotenv loading disabled");
            None
        } else {
            Some(self.dotenv_path.unwrap_or_else(default_dotenv_path))
        };
        let dotenv_vars = match &dotenv_path {
            Some(path) => read_dotenv(path)?,
            None => HashMap::new(),
        };

        let overrides = EnvOverrides::from_process(dotenv_vars);
        debug!(
            config = %config_path.display(),
            dotenv_overrides = overrides.dotenv_len(),
            "resolving configuration"
        );
        Ok(ResolvedConfig::resolve(raw, &overrides).with_sources(config_path, dotenv_path))
    }
}
