//! Centralized constants for the researcher workspace.
//!
//! File names, environment variable names, and well-known config keys live
//! here so the CLI and the library agree on them.

// =============================================================================
// File Locations
// =============================================================================

/// Application name used for the per-user config directory.
pub const APP_NAME: &str = "researcher";

/// Default YAML config file name, looked up in the working directory first.
pub const DEFAULT_CONFIG_FILE: &str = "config.yml";

/// Default dotenv file name, looked up in the working directory.
pub const DEFAULT_DOTENV_FILE: &str = ".env";

// =============================================================================
// Environment Variables
// =============================================================================

/// Overrides the YAML config path when no explicit path is given.
pub const CONFIG_PATH_ENV: &str = "RESEARCHER_CONFIG_PATH";

/// Overrides the dotenv path when no explicit path is given.
pub const DOTENV_PATH_ENV: &str = "RESEARCHER_DOTENV_PATH";

/// When set to `1` or `true`, the dotenv tier is skipped entirely.
pub const DOTENV_DISABLED_ENV: &str = "DOTENV_DISABLED";

// =============================================================================
// Well-Known Keys
// =============================================================================

/// Top-level key naming the deployment environment.
pub const ENVIRONMENT_KEY: &str = "environment";

/// Top-level key toggling debug behavior.
pub const DEBUG_KEY: &str = "debug";

/// Value of [`ENVIRONMENT_KEY`] that marks a development setup.
pub const DEVELOPMENT: &str = "development";

/// Dotted path of the OpenAI service block.
pub const OPENAI_PATH: &str = "api.openai";

/// Dotted path of the Bright Data service block.
pub const BRIGHT_DATA_PATH: &str = "api.bright_data";

/// Replacement text for secret values in redacted output.
pub const REDACTED: &str = "********";
