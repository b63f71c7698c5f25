//! Default locations for the YAML and dotenv files.
//!
//! Responsibilities:
//! - Prefer `config.yml` in the working directory, then the per-user config dir.
//! - Use `directories` crate for platform-appropriate paths.
//!
//! Does NOT handle:
//! - File I/O beyond an existence check.

use std::path::PathBuf;

use anyhow::Context;

use crate::constants::{APP_NAME, DEFAULT_CONFIG_FILE, DEFAULT_DOTENV_FILE};

/// Returns the YAML path used when none is configured.
///
/// `./config.yml` wins when it exists; otherwise the per-user location:
/// - Linux/macOS: `~/.config/researcher/config.yml`
/// - Windows: `%AppData%\researcher\config.yml`
pub(crate) fn default_config_path() -> Result<PathBuf, anyhow::Error> {
    let local = PathBuf::from(DEFAULT_CONFIG_FILE);
    if local.exists() {
        return Ok(local);
    }
    user_config_path()
}

/// Returns the per-user YAML config path.
pub(crate) fn user_config_path() -> Result<PathBuf, anyhow::Error> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME)
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.config_dir().join(DEFAULT_CONFIG_FILE))
}

/// Returns the dotenv path used when none is configured.
pub(crate) fn default_dotenv_path() -> PathBuf {
    PathBuf::from(DEFAULT_DOTENV_FILE)
}
