//! Dotted-path lookup command.

use anyhow::Result;
use researcher_config::{ConfigError, ResolvedConfig};

use crate::formatters::render_value;

pub fn run(config: &ResolvedConfig, path: &str, default: Option<&str>) -> Result<()> {
    match (config.get(path), default) {
        (Ok(value), _) => println!("{}", render_value(value)?),
        (Err(ConfigError::KeyNotFound { .. }), Some(fallback)) => {
            tracing::debug!(path, "key not found, printing default");
            println!("{fallback}");
        }
        (Err(e), _) => return Err(e.into()),
    }
    Ok(())
}
